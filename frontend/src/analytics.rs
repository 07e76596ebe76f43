//! Minimal analytics sink. Events are a name plus a flat string map and
//! currently end up in the console log.

use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use crate::forms::rules::{FieldId, FormKind};
use crate::forms::state::FormSubmission;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub properties: BTreeMap<&'static str, String>,
}

impl AnalyticsEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            properties: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.properties.insert(key, value.into());
        self
    }
}

pub fn track_event(event: &AnalyticsEvent) {
    let properties = serde_json::to_string(&event.properties).unwrap_or_default();
    info!("Event tracked: {} {}", event.name, properties);
}

pub fn cta_click(button_text: &str, page_location: &str) -> AnalyticsEvent {
    AnalyticsEvent::new("CTA Click")
        .with("button_text", button_text.trim())
        .with("page_location", page_location)
}

/// Event fired whenever a form's submit is intercepted, valid or not.
pub fn submit_attempt(kind: FormKind) -> Option<AnalyticsEvent> {
    match kind {
        FormKind::Contact => Some(AnalyticsEvent::new("Form Submission").with("form_name", "contact")),
        FormKind::Newsletter => None,
    }
}

/// Event fired once a submission has been delivered.
pub fn submit_success(submission: &FormSubmission) -> Option<AnalyticsEvent> {
    match submission.form {
        FormKind::Contact => None,
        FormKind::Newsletter => Some(
            AnalyticsEvent::new("Newsletter Signup")
                .with("name", submission.value(FieldId::Name))
                .with("email", submission.value(FieldId::Email)),
        ),
    }
}
