//! Hero slideshow: autoplay carousel with indicator dots.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use lumina_landing::Carousel;
use yew::prelude::*;

use crate::config::AUTOPLAY_PERIOD_MS;
use crate::navbar::scroll_to_anchor;

struct SlideDef {
    class: &'static str,
    title: &'static str,
    tagline: &'static str,
}

const SLIDES: [SlideDef; 3] = [
    SlideDef {
        class: "slide-aurora",
        title: "Products that feel inevitable",
        tagline: "Strategy, design and engineering under one roof.",
    },
    SlideDef {
        class: "slide-ember",
        title: "Shipped, not shelved",
        tagline: "We take ideas from whiteboard to production traffic.",
    },
    SlideDef {
        class: "slide-tide",
        title: "Built to be kept",
        tagline: "Maintainable platforms your team will still love in year five.",
    },
];

enum CarouselAction {
    Next,
    Show(usize),
}

#[derive(PartialEq)]
struct SlideshowState {
    carousel: Carousel,
}

impl Reducible for SlideshowState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.carousel;
        match action {
            CarouselAction::Next => carousel.next(),
            CarouselAction::Show(i) => carousel.show(i as i64),
        }
        Rc::new(Self { carousel })
    }
}

#[function_component(HeroSlideshow)]
pub fn hero_slideshow() -> Html {
    let state = use_reducer(|| SlideshowState {
        carousel: Carousel::new(SLIDES.len()),
    });
    // Single slot for the autoplay handle: at most one timer can exist,
    // and taking the handle out cancels it.
    let autoplay = use_mut_ref(|| None::<Interval>);

    {
        let dispatcher = state.dispatcher();
        let autoplay = autoplay.clone();
        use_effect_with((), move |_| {
            *autoplay.borrow_mut() = Some(Interval::new(AUTOPLAY_PERIOD_MS, move || {
                dispatcher.dispatch(CarouselAction::Next)
            }));
            move || {
                autoplay.borrow_mut().take();
            }
        });
    }

    // Manual selection stops autoplay for good; it is not re-armed.
    let select = {
        let state = state.clone();
        let autoplay = autoplay.clone();
        Callback::from(move |i: usize| {
            autoplay.borrow_mut().take();
            state.dispatch(CarouselAction::Show(i));
        })
    };

    let carousel = state.carousel;
    let cta_onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor("#services");
    });

    html! {
        <header id="home" class="hero">
            <div
                class="hero-slideshow"
                style={format!("transform: translateX({}%);", carousel.track_offset_percent())}
            >
                { for SLIDES.iter().enumerate().map(|(i, slide)| html! {
                    <div class={classes!("slide", slide.class, carousel.is_active(i).then_some("active"))}>
                        <div class="slide-copy">
                            <h1>{ slide.title }</h1>
                            <p>{ slide.tagline }</p>
                            <a class="cta" href="#services" onclick={cta_onclick.clone()}>
                                { "See what we build" }
                            </a>
                        </div>
                    </div>
                }) }
            </div>
            <div class="dots">
                { for (0..carousel.len()).map(|i| {
                    let select = select.clone();
                    html! {
                        <button
                            type="button"
                            class={classes!("dot", carousel.is_active(i).then_some("active"))}
                            aria-label={format!("Show slide {}", i + 1)}
                            onclick={Callback::from(move |_: MouseEvent| select.emit(i))}
                        ></button>
                    }
                }) }
            </div>
        </header>
    }
}
