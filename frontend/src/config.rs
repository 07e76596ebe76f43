use crate::forms::rules::FormKind;

// Form submission
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;

// Toasts
pub const NOTIFICATION_VISIBLE_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

// Navigation
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 100.0;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// Stat counters
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_TICK_MS: u32 = 16;
pub const COUNTER_FALLBACK_DELAY_MS: u32 = 2_000;
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNTER_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Hero chart bars start staggering once the page has settled
pub const CHART_STAGGER_START_MS: u32 = 1_500;
pub const CHART_STAGGER_STEP_SECS: f64 = 0.2;

pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap";

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Name of the `<meta>` tag that can point a form at a real endpoint.
pub fn endpoint_meta_name(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Contact => "contact-endpoint",
        FormKind::Newsletter => "newsletter-endpoint",
    }
}

/// Looks up the submission endpoint for a form. `None` means the
/// submission is simulated.
pub fn submission_endpoint(kind: FormKind) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", endpoint_meta_name(kind));
    let meta = document.query_selector(&selector).ok().flatten()?;
    let content = meta.get_attribute("content")?;
    resolve_endpoint(get_backend_url(), &content)
}

/// Absolute URLs are used as-is, root-relative paths are joined onto the
/// backend base URL, anything else is ignored.
pub fn resolve_endpoint(base: &str, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Some(raw.to_string())
    } else if raw.starts_with('/') {
        Some(format!("{}{}", base.trim_end_matches('/'), raw))
    } else {
        None
    }
}
