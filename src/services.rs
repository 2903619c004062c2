//! Services section: typed headline, responsive layout and backdrop.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{PARAGRAPH_REVEAL_DELAY_MS, TYPE_TICK_MS};
use crate::hooks::{use_fade_in, use_viewport_width};
use crate::utils::{backdrop_for_width, services_layout};

const HEADLINE: &str = "What We Build";
const INTRO: &str = "Small senior teams, embedded with yours, delivering one \
                     well-made thing at a time.";

const SERVICES: [(&str, &str); 4] = [
    (
        "Web Platforms",
        "Design systems and applications that hold up under real traffic.",
    ),
    (
        "Mobile Apps",
        "Native feel on both stores without two parallel codebases.",
    ),
    (
        "Brand & Motion",
        "Identity work that survives contact with an actual product.",
    ),
    (
        "Data & Insight",
        "Dashboards people check because they want to, not because they must.",
    ),
];

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let width = use_viewport_width();
    let typed = use_state_eq(|| 0usize);
    let para_visible = use_state_eq(|| false);
    let ticker = use_mut_ref(|| None::<Interval>);
    let reveal_delay = use_mut_ref(|| None::<Timeout>);
    let backdrop = use_node_ref();
    let grid = use_fade_in();

    // Type the headline one character per tick; once it is complete,
    // cancel the ticker and reveal the paragraph after a short pause.
    {
        let typed = typed.clone();
        let para_visible = para_visible.clone();
        let ticker = ticker.clone();
        let reveal_delay = reveal_delay.clone();
        use_effect_with((), move |_| {
            let total = HEADLINE.chars().count();
            let progress = Rc::new(Cell::new(0usize));
            let handle = Interval::new(TYPE_TICK_MS, {
                let ticker = ticker.clone();
                let reveal_delay = reveal_delay.clone();
                move || {
                    if progress.get() < total {
                        progress.set(progress.get() + 1);
                        typed.set(progress.get());
                    } else {
                        ticker.borrow_mut().take();
                        let para_visible = para_visible.clone();
                        *reveal_delay.borrow_mut() =
                            Some(Timeout::new(PARAGRAPH_REVEAL_DELAY_MS, move || {
                                para_visible.set(true)
                            }));
                    }
                }
            });
            *ticker.borrow_mut() = Some(handle);
            move || {
                ticker.borrow_mut().take();
                reveal_delay.borrow_mut().take();
            }
        });
    }

    // Re-tune the backdrop whenever the viewport band changes.
    {
        let backdrop = backdrop.clone();
        use_effect_with(width, move |&w| {
            if let Some(img) = backdrop.cast::<HtmlElement>() {
                let treatment = backdrop_for_width(w);
                let style = img.style();
                let _ = style.set_property("filter", treatment.filter);
                let _ = style.set_property("transform", treatment.transform);
                let _ = style.set_property("object-position", treatment.object_position);
            }
            || ()
        });
    }

    let headline: String = HEADLINE.chars().take(*typed).collect();
    let para_style = if *para_visible {
        "transition: opacity 1.5s ease-in-out; opacity: 1;"
    } else {
        "opacity: 0;"
    };
    let (direction, columns) = services_layout(width);

    html! {
        <section id="services" class="services">
            <div class="section-bg">
                <img ref={backdrop} src="assets/studio.jpg" alt="" />
            </div>
            <div class="services-container" style={format!("flex-direction: {direction};")}>
                <div class="services-text">
                    <h2>{ headline }</h2>
                    <p style={para_style}>{ INTRO }</p>
                </div>
                <div
                    ref={grid}
                    class="services-grid fade-in"
                    style={format!("grid-template-columns: {columns};")}
                >
                    { for SERVICES.iter().map(|(title, blurb)| html! {
                        <div class="service-card">
                            <h3>{ *title }</h3>
                            <p>{ *blurb }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
