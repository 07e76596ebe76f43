use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::config;
use crate::dom::{self, Listener};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#solutions", "Solutions"),
    ("#team", "About"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

const NAV_STYLES: &str = r#"
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 900;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(10px);
        transition: box-shadow 0.3s ease, background 0.3s ease;
    }
    .navbar.scrolled {
        background: rgba(255, 255, 255, 0.98);
        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
    }
    .nav-container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 1.5rem;
        font-weight: 700;
        color: #2563eb;
        text-decoration: none;
    }
    .nav-menu {
        display: flex;
        gap: 2rem;
        list-style: none;
    }
    .nav-link {
        color: #374151;
        font-weight: 500;
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .nav-link:hover {
        color: #2563eb;
    }
    .nav-toggle {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.25rem;
    }
    .bar {
        display: block;
        width: 25px;
        height: 3px;
        background: #111827;
        border-radius: 2px;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    @media (max-width: 768px) {
        .nav-toggle {
            display: flex;
        }
        .nav-menu {
            position: fixed;
            top: 64px;
            left: -100%;
            width: 100%;
            height: calc(100vh - 64px);
            flex-direction: column;
            align-items: center;
            padding-top: 2rem;
            background: #ffffff;
            transition: left 0.3s ease;
        }
        .nav-menu.active {
            left: 0;
        }
        .nav-toggle.active .bar:nth-child(1) {
            transform: translateY(8px) rotate(45deg);
        }
        .nav-toggle.active .bar:nth-child(2) {
            opacity: 0;
        }
        .nav-toggle.active .bar:nth-child(3) {
            transform: translateY(-8px) rotate(-45deg);
        }
    }
"#;

pub fn is_scrolled(scroll_top: f64) -> bool {
    scroll_top > config::NAVBAR_SCROLLED_AFTER_PX
}

/// The mobile menu has no place on a desktop-width layout.
pub fn closes_on_resize(width: f64) -> bool {
    width > config::MOBILE_BREAKPOINT_PX
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| is_scrolled(dom::scroll_y()));
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Listener::on_window("scroll", move |_| {
                    scrolled.set(is_scrolled(dom::scroll_y()));
                });
                move || drop(listener)
            },
            (),
        );
    }

    use_effect_with_deps(
        |open: &bool| {
            dom::lock_body_scroll(*open);
            || ()
        },
        *menu_open,
    );

    // Outside clicks, Escape and growing past the mobile breakpoint all
    // close the menu.
    {
        let close = menu_open.setter();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let on_click = {
                    let close = close.clone();
                    Listener::on_document("click", move |e| {
                        let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                            return;
                        };
                        let inside = [&toggle_ref, &menu_ref].iter().any(|r| {
                            r.cast::<Element>()
                                .map(|el| el.contains(Some(&target)))
                                .unwrap_or(false)
                        });
                        if !inside {
                            close.set(false);
                        }
                    })
                };

                let on_keydown = {
                    let close = close.clone();
                    Listener::on_document("keydown", move |e| {
                        if e.dyn_ref::<KeyboardEvent>().map(|k| k.key()) == Some("Escape".to_string()) {
                            close.set(false);
                        }
                    })
                };

                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let on_resize = Listener::on_window("resize", move |_| {
                    let close = close.clone();
                    let timeout = Timeout::new(config::RESIZE_DEBOUNCE_MS, move || {
                        if dom::inner_width().map(closes_on_resize).unwrap_or(false) {
                            close.set(false);
                        }
                    });
                    // replacing the previous timeout cancels it
                    pending.borrow_mut().replace(timeout);
                });

                move || {
                    drop(on_click);
                    drop(on_keydown);
                    drop(on_resize);
                    dom::lock_body_scroll(false);
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <AnchorLink href="#home" class="nav-logo">
                    {"Digital Crew"}
                </AnchorLink>

                <ul ref={menu_ref} id="nav-menu" class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li class="nav-item" key={*href}>
                            <AnchorLink href={*href} class="nav-link" onclick={close_menu.clone()}>
                                { *label }
                            </AnchorLink>
                        </li>
                    }) }
                </ul>

                <button
                    ref={toggle_ref}
                    id="nav-toggle"
                    class={classes!("nav-toggle", (*menu_open).then(|| "active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
            <style>{ NAV_STYLES }</style>
        </nav>
    }
}
