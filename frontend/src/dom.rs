//! Small wrappers over `web_sys` used by the page behaviors.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions};

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| log::error!("Failed to listen for {}: {:?}", event, e))
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        Self::new(window.as_ref(), event, callback)
    }

    pub fn on_document<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let document = window()?.document()?;
        Self::new(document.as_ref(), event, callback)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

pub fn toggle_body_class(class: &str, on: bool) {
    if let Some(body) = body() {
        let classes = body.class_list();
        let _ = if on { classes.add_1(class) } else { classes.remove_1(class) };
    }
}

/// Locks page scrolling while an overlay (the mobile menu) is open.
pub fn lock_body_scroll(locked: bool) {
    if let Some(body) = body() {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn inner_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

pub fn supports_intersection_observer() -> bool {
    window()
        .map(|w| {
            web_sys::js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// The element id an in-page link points at, if it is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Where to scroll so the target sits just below the fixed navbar.
pub fn scroll_destination(target_top: i32, navbar_height: i32) -> f64 {
    f64::from(target_top - navbar_height)
}

/// Smoothly scrolls to the element an in-page link points at. Links to
/// missing elements do nothing.
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_target(href) else { return };
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let navbar_height = document
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height())
        .unwrap_or(0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_destination(target.offset_top(), navbar_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Adds a `<link rel="preload">` for a stylesheet to the document head.
pub fn preload_stylesheet(href: &str) {
    let Some(document) = window().and_then(|w| w.document()) else { return };
    let Some(head) = document.head() else { return };
    let Ok(link) = document.create_element("link") else { return };
    let _ = link.set_attribute("rel", "preload");
    let _ = link.set_attribute("as", "style");
    let _ = link.set_attribute("href", href);
    if let Err(e) = head.append_child(&link) {
        log::warn!("Could not preload {}: {:?}", href, e);
    }
}
