//! Custom hooks shared by the page sections.

use gloo_events::EventListener;
use gloo_utils::window;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

fn current_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current viewport width in px, refreshed on every resize event.
///
/// The resize listener lives exactly as long as the calling component;
/// dropping the [`EventListener`] in the effect destructor detaches it.
#[hook]
pub fn use_viewport_width() -> f64 {
    let width = use_state_eq(current_width);
    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&window(), "resize", move |_| {
                width.set(current_width());
            });
            move || drop(listener)
        });
    }
    *width
}

/// Marks a node for scroll reveal.
///
/// The returned ref is observed at the configured threshold; the node
/// gains the `animate` class when it enters the viewport. The observer
/// is disconnected when the component unmounts. A ref that never gets
/// attached simply stays unobserved.
#[hook]
pub fn use_fade_in() -> NodeRef {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with((), move |_| {
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                |entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            let _ = entry.target().class_list().add_1("animate");
                        }
                    }
                },
            );
            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .ok();
            if let (Some(observer), Some(element)) = (observer.as_ref(), node.cast::<Element>()) {
                observer.observe(&element);
            }
            move || {
                if let Some(observer) = observer.as_ref() {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }
    node
}
