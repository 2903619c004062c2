//! Lumina Landing, a client-side marketing page.
//! Assembles the page sections and owns the alert banner lifecycle.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

mod config;
mod hero;
mod hooks;
mod navbar;
mod services;
mod showcase;
mod stats;
mod utils;

use config::{ALERT_FADE_MS, ALERT_LINGER_MS};
use hero::HeroSlideshow;
use navbar::Navbar;
use services::ServicesSection;
use showcase::ShowcaseSection;
use stats::StatsSection;

#[derive(Properties, PartialEq)]
struct AlertStackProps {
    #[prop_or_default]
    messages: Vec<AttrValue>,
}

/// Banners shown at load; they fade out after a fixed linger and are
/// removed once the fade completes.
#[function_component(AlertStack)]
fn alert_stack(props: &AlertStackProps) -> Html {
    let fading = use_state_eq(|| false);
    let visible = use_state_eq(|| true);
    let linger = use_mut_ref(|| None::<Timeout>);
    let fade = use_mut_ref(|| None::<Timeout>);

    {
        let fading = fading.clone();
        let visible = visible.clone();
        let linger = linger.clone();
        let fade = fade.clone();
        use_effect_with((), move |_| {
            let fade_slot = fade.clone();
            *linger.borrow_mut() = Some(Timeout::new(ALERT_LINGER_MS, move || {
                fading.set(true);
                *fade_slot.borrow_mut() = Some(Timeout::new(ALERT_FADE_MS, move || {
                    visible.set(false)
                }));
            }));
            move || {
                linger.borrow_mut().take();
                fade.borrow_mut().take();
            }
        });
    }

    if props.messages.is_empty() || !*visible {
        return html! {};
    }
    html! {
        <div class="alerts">
            { for props.messages.iter().map(|message| html! {
                <div class={classes!("alert", fading.then_some("fading"))}>
                    { message.clone() }
                </div>
            }) }
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <AlertStack
                messages={vec![AttrValue::from(
                    "Early access is open. Studio slots for autumn are filling up.",
                )]}
            />
            <Navbar />
            <HeroSlideshow />
            <ServicesSection />
            <ShowcaseSection />
            <StatsSection />
            <footer id="contact">
                <p>{ "Lumina Studio · hello@lumina.example" }</p>
                <p class="fineprint">{ "Made in Rotterdam. No cookies, no trackers." }</p>
            </footer>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
