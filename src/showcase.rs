//! Showcase section with the decorative floating-shape backdrop.

use lumina_landing::defaults::HOVER_DURATION_SECS;
use lumina_landing::shapes;
use yew::prelude::*;

use crate::hooks::use_fade_in;

const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Meridian Bank",
        "A retail banking portal rebuilt around a 90ms page budget.",
    ),
    (
        "Fieldnote",
        "Offline-first survey tooling for crews two days from a signal.",
    ),
    (
        "Koru Health",
        "Appointment flows that cut no-shows by a third in one quarter.",
    ),
];

#[function_component(ShowcaseSection)]
pub fn showcase_section() -> Html {
    // The field is drawn once; only durations mutate afterwards.
    let field = use_state(|| {
        let mut rng = rand::rng();
        let mut shapes = shapes::generate(&mut rng);
        shapes::assign_animations(&mut shapes, &mut rng);
        shapes
    });
    let copy = use_fade_in();

    let on_hover_in = {
        let field = field.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*field).clone();
            shapes::set_all_durations(&mut next, HOVER_DURATION_SECS);
            field.set(next);
        })
    };
    let on_hover_out = {
        let field = field.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*field).clone();
            shapes::rerandomize_durations(&mut next, &mut rand::rng());
            field.set(next);
        })
    };

    html! {
        <section
            id="work"
            class="showcase"
            onmouseenter={on_hover_in}
            onmouseleave={on_hover_out}
        >
            <div id="animated-shapes" class="shape-field" aria-hidden="true">
                { for field.iter().map(|shape| html! {
                    <div class={shape.class_names()} style={shape.style()}></div>
                }) }
            </div>
            <div ref={copy} class="showcase-copy fade-in">
                <h2>{ "Recent Work" }</h2>
                <div class="highlight-cards">
                    { for HIGHLIGHTS.iter().map(|(name, summary)| html! {
                        <div class="highlight-card">
                            <h3>{ *name }</h3>
                            <p>{ *summary }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
