use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    /// How long to wait before assuming visibility when the browser has no
    /// IntersectionObserver.
    pub fallback_delay_ms: u32,
}

struct Watch {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
    _fallback: Option<Timeout>,
}

impl Drop for Watch {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn watch(element: &Element, options: ViewportOptions, on_visible: Callback<()>) -> Option<Watch> {
    if !dom::supports_intersection_observer() {
        let fallback = if options.fallback_delay_ms == 0 {
            on_visible.emit(());
            None
        } else {
            Some(Timeout::new(options.fallback_delay_ms, move || on_visible.emit(())))
        };
        return Some(Watch {
            observer: None,
            _callback: None,
            _fallback: fallback,
        });
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false)
        });
        if visible {
            // only the first appearance matters
            observer.disconnect();
            on_visible.emit(());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| log::error!("IntersectionObserver unavailable: {:?}", e))
        .ok()?;
    observer.observe(element);

    Some(Watch {
        observer: Some(observer),
        _callback: Some(callback),
        _fallback: None,
    })
}

/// Becomes `true` the first time the referenced element scrolls into view
/// and stays `true` afterwards.
#[hook]
pub fn use_in_view(node: NodeRef, options: ViewportOptions) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let on_visible = Callback::from(move |_| in_view.set(true));
                let guard = node
                    .cast::<Element>()
                    .and_then(|element| watch(&element, options, on_visible));
                move || drop(guard)
            },
            node,
        );
    }

    *in_view
}
