//! Declarative field rules for the site's forms.
//!
//! Both forms are described by a [`FormSpec`] table; the same validation
//! and submission flow drives either one.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// something@something.something, no whitespace or extra '@' in any run
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldId {
    /// The `name` attribute of the field's input.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Newsletter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// At least this many characters once surrounding whitespace is removed.
    MinTrimmedLen(usize),
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    /// Element id in the markup, also used as the label target.
    pub dom_id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: InputKind,
    pub rule: Rule,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub kind: FormKind,
    pub dom_id: &'static str,
    pub fields: &'static [FieldSpec],
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    pub success_message: &'static str,
}

impl FormSpec {
    pub fn field(&self, id: FieldId) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }
}

pub static CONTACT_FORM: FormSpec = FormSpec {
    kind: FormKind::Contact,
    dom_id: "contact-form",
    fields: &[
        FieldSpec {
            id: FieldId::Name,
            dom_id: "name",
            label: "Full Name",
            placeholder: "Your name",
            input: InputKind::Text,
            rule: Rule::MinTrimmedLen(2),
            message: "Name must be at least 2 characters long",
        },
        FieldSpec {
            id: FieldId::Email,
            dom_id: "email",
            label: "Email Address",
            placeholder: "you@company.com",
            input: InputKind::Email,
            rule: Rule::Email,
            message: EMAIL_MESSAGE,
        },
        FieldSpec {
            id: FieldId::Subject,
            dom_id: "subject",
            label: "Subject",
            placeholder: "How can we help?",
            input: InputKind::Text,
            rule: Rule::MinTrimmedLen(3),
            message: "Subject must be at least 3 characters long",
        },
        FieldSpec {
            id: FieldId::Message,
            dom_id: "message",
            label: "Message",
            placeholder: "Tell us about your project",
            input: InputKind::TextArea,
            rule: Rule::MinTrimmedLen(10),
            message: "Message must be at least 10 characters long",
        },
    ],
    submit_label: "Send Message",
    busy_label: "Sending...",
    success_message: "Thank you! Your message has been sent successfully.",
};

pub static NEWSLETTER_FORM: FormSpec = FormSpec {
    kind: FormKind::Newsletter,
    dom_id: "newsletter-form",
    fields: &[
        FieldSpec {
            id: FieldId::Name,
            dom_id: "newsletter-name",
            label: "Name",
            placeholder: "Your name",
            input: InputKind::Text,
            rule: Rule::MinTrimmedLen(2),
            message: "Please enter your name",
        },
        FieldSpec {
            id: FieldId::Email,
            dom_id: "newsletter-email",
            label: "Email",
            placeholder: "you@company.com",
            input: InputKind::Email,
            rule: Rule::Email,
            message: EMAIL_MESSAGE,
        },
    ],
    submit_label: "Subscribe",
    busy_label: "Subscribing...",
    success_message: "🎉 Welcome aboard! Check your email to confirm your subscription.",
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FieldId,
    pub message: &'static str,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

// Same set a browser strips from form input: Unicode whitespace plus the
// byte order mark, but not NEL.
fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Length of the value once surrounding whitespace is removed, counted in
/// UTF-16 code units the way the browser reports `value.length`.
fn trimmed_len(value: &str) -> usize {
    value.trim_matches(is_trimmed).encode_utf16().count()
}

impl Rule {
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Rule::MinTrimmedLen(min) => trimmed_len(value) >= min,
            Rule::Email => is_valid_email(value),
        }
    }
}

/// Checks one field in isolation. This is what runs on blur.
pub fn validate_field(field: &FieldSpec, value: &str) -> Result<(), ValidationError> {
    if field.rule.accepts(value) {
        Ok(())
    } else {
        Err(ValidationError {
            field: field.id,
            message: field.message,
        })
    }
}

/// Evaluates every field of the form; a missing value counts as empty.
/// Returns all failures, in field order.
pub fn validate_form(
    spec: &FormSpec,
    values: &BTreeMap<FieldId, String>,
) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = spec
        .fields
        .iter()
        .filter_map(|field| {
            let value = values.get(&field.id).map(String::as_str).unwrap_or("");
            validate_field(field, value).err()
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
