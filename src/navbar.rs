//! Top navigation: mobile menu toggle, dropdowns, smooth-scroll anchors.

use gloo_events::EventListener;
use gloo_utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::NAV_SCROLL_OFFSET_PX;
use crate::hooks::use_viewport_width;
use crate::utils::is_mobile;

/// Smooth-scroll to the section an `#anchor` href points at, stopping
/// short of the fixed header. Unknown or malformed targets are ignored.
pub(crate) fn scroll_to_anchor(href: &str) {
    let Some(id) = href.strip_prefix('#') else {
        return;
    };
    let Some(target) = document().get_element_by_id(id) else {
        return;
    };
    let Ok(target) = target.dyn_into::<HtmlElement>() else {
        return;
    };
    let top = (target.offset_top() - NAV_SCROLL_OFFSET_PX).max(0);
    let options = ScrollToOptions::new();
    options.set_top(top as f64);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    /// Fired after a successful selection so the navbar can fold the
    /// mobile menu away.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&href);
            on_navigate.emit(());
        })
    };
    html! {
        <li><a href={props.href.clone()} {onclick}>{ props.label.clone() }</a></li>
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    pub label: AttrValue,
    /// Anchor the head link scrolls to in desktop mode.
    pub href: AttrValue,
    pub items: Vec<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
}

/// A nav item with a submenu. Opens on hover above the mobile
/// breakpoint, on tap below it; a click anywhere outside closes it.
#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let open = use_state_eq(|| false);
    let node = use_node_ref();
    let mobile = is_mobile(use_viewport_width());

    // One document-level listener per dropdown, detached on unmount.
    {
        let open = open.clone();
        let node = node.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&document(), "click", move |event| {
                let inside = event
                    .target()
                    .and_then(|t| t.dyn_into::<Node>().ok())
                    .is_some_and(|t| {
                        node.cast::<Node>()
                            .is_some_and(|n| n.contains(Some(&t)))
                    });
                if !inside {
                    open.set(false);
                }
            });
            move || drop(listener)
        });
    }

    let head_onclick = {
        let open = open.clone();
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if mobile {
                open.set(!*open);
            } else {
                scroll_to_anchor(&href);
                on_navigate.emit(());
            }
        })
    };

    let hover_in = (!mobile).then(|| {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    });
    let hover_out = (!mobile).then(|| {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    });

    html! {
        <li
            ref={node}
            class={classes!("dropdown", open.then_some("active"))}
            onmouseenter={hover_in}
            onmouseleave={hover_out}
        >
            <a href={props.href.clone()} onclick={head_onclick}>
                { props.label.clone() }
                <i class="fas fa-chevron-down"></i>
            </a>
            <ul class="dropdown-menu">
                { for props.items.iter().map(|(href, label)| {
                    let onclick = {
                        let href = href.clone();
                        let open = open.clone();
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_anchor(&href);
                            open.set(false);
                            on_navigate.emit(());
                        })
                    };
                    html! { <li><a href={href.clone()} {onclick}>{ label.clone() }</a></li> }
                }) }
            </ul>
        </li>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state_eq(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let brand_onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor("#home");
    });

    let service_items = vec![
        (AttrValue::from("#services"), AttrValue::from("Web Platforms")),
        (AttrValue::from("#services"), AttrValue::from("Mobile Apps")),
        (AttrValue::from("#work"), AttrValue::from("Brand & Motion")),
    ];

    html! {
        <nav>
            <a class="brand" href="#home" onclick={brand_onclick}>{ "Lumina" }</a>
            <div class="mobile-menu" onclick={toggle_menu}>
                <i class={if *menu_open { "fas fa-times" } else { "fas fa-bars" }}></i>
            </div>
            <ul class={classes!(menu_open.then_some("active"))}>
                <NavLink href="#home" label="Home" on_navigate={close_menu.clone()} />
                <Dropdown
                    label="Services"
                    href="#services"
                    items={service_items}
                    on_navigate={close_menu.clone()}
                />
                <NavLink href="#work" label="Work" on_navigate={close_menu.clone()} />
                <NavLink href="#stats" label="About" on_navigate={close_menu.clone()} />
                <NavLink href="#contact" label="Contact" on_navigate={close_menu} />
            </ul>
        </nav>
    }
}
