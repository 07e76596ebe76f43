//! Page-wide listeners that are not tied to a single component.

use log::error;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, ErrorEvent, Event, KeyboardEvent, PromiseRejectionEvent};
use yew::prelude::*;

use crate::analytics;
use crate::dom::{self, Listener};

pub const CTA_CLASS: &str = "btn-primary";

/// Whether an element's class attribute marks it as a call to action.
pub fn is_cta(class_name: &str) -> bool {
    class_name.split_whitespace().any(|c| c == CTA_CLASS)
}

fn page_location() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

fn track_cta_click(e: Event) {
    let Some(element) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    if is_cta(&element.class_name()) {
        let text = element.text_content().unwrap_or_default();
        analytics::track_event(&analytics::cta_click(&text, &page_location()));
    }
}

#[hook]
pub fn use_page_effects() {
    use_effect_with_deps(
        |_| {
            let listeners = vec![
                Listener::on_document("keydown", |e| {
                    if e.dyn_ref::<KeyboardEvent>().map(|k| k.key() == "Tab").unwrap_or(false) {
                        dom::toggle_body_class("keyboard-navigation", true);
                    }
                }),
                Listener::on_document("mousedown", |_| {
                    dom::toggle_body_class("keyboard-navigation", false);
                }),
                Listener::on_document("visibilitychange", |_| {
                    let hidden = window()
                        .and_then(|w| w.document())
                        .map(|d| d.hidden())
                        .unwrap_or(false);
                    dom::toggle_body_class("page-hidden", hidden);
                }),
                Listener::on_document("click", track_cta_click),
                Listener::on_window("error", |e| {
                    if let Some(e) = e.dyn_ref::<ErrorEvent>() {
                        error!("JavaScript Error: {} ({:?})", e.message(), e.error());
                    }
                }),
                Listener::on_window("unhandledrejection", |e| {
                    if let Some(e) = e.dyn_ref::<PromiseRejectionEvent>() {
                        error!("Unhandled Promise Rejection: {:?}", e.reason());
                    }
                    e.prevent_default();
                }),
            ];
            move || drop(listeners)
        },
        (),
    );
}
