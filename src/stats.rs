//! Stat counters that count up from zero on page load.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::COUNT_TICK_MS;
use crate::hooks::use_fade_in;
use crate::utils::{counter_label, counter_step};

const STATS: [(u32, &str); 4] = [
    (120, "Projects shipped"),
    (86, "Happy clients"),
    (14, "Industry awards"),
    (9, "Years running"),
];

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let current = use_state_eq(|| 0.0f64);
    let ticker = use_mut_ref(|| None::<Interval>);

    {
        let current = current.clone();
        let ticker = ticker.clone();
        use_effect_with(props.target, move |&target| {
            let step = counter_step(target);
            let running = Rc::new(Cell::new(0.0f64));
            let handle = Interval::new(COUNT_TICK_MS, {
                let ticker = ticker.clone();
                move || {
                    running.set(running.get() + step);
                    if running.get() >= target as f64 {
                        current.set(target as f64);
                        ticker.borrow_mut().take();
                    } else {
                        current.set(running.get());
                    }
                }
            });
            *ticker.borrow_mut() = Some(handle);
            move || {
                ticker.borrow_mut().take();
            }
        });
    }

    html! {
        <div class="stat">
            <strong>{ counter_label(*current, props.target) }</strong>
            <span>{ props.label.clone() }</span>
        </div>
    }
}

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let wrap = use_fade_in();
    html! {
        <section id="stats" class="stats">
            <div ref={wrap} class="stats-row fade-in">
                { for STATS.iter().map(|(target, label)| html! {
                    <StatCounter target={*target} label={*label} />
                }) }
            </div>
        </section>
    }
}
