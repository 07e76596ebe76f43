use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

use crate::forms::rules::{validate_field, validate_form, FieldId, FormKind, FormSpec, ValidationError};
use crate::forms::submit::SubmissionError;

/// Field values captured at submit time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormSubmission {
    pub form: FormKind,
    pub fields: BTreeMap<FieldId, String>,
}

impl FormSubmission {
    pub fn value(&self, id: FieldId) -> &str {
        self.fields.get(&id).map(String::as_str).unwrap_or("")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Invalid,
    Submitting,
}

pub enum FormAction {
    Input(FieldId, String),
    Blur(FieldId),
    ClearError(FieldId),
    Rejected(Vec<ValidationError>),
    Started,
    Completed(Result<(), SubmissionError>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub spec: &'static FormSpec,
    values: BTreeMap<FieldId, String>,
    errors: BTreeMap<FieldId, &'static str>,
    phase: Phase,
}

impl FormState {
    pub fn new(spec: &'static FormSpec) -> Self {
        Self {
            spec,
            values: spec.fields.iter().map(|f| (f.id, String::new())).collect(),
            errors: BTreeMap::new(),
            phase: Phase::Idle,
        }
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, id: FieldId) -> Option<&'static str> {
        self.errors.get(&id).copied()
    }

    #[cfg(test)]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            self.spec.busy_label
        } else {
            self.spec.submit_label
        }
    }

    /// Runs the full validation pass over the current values. On success
    /// the values are handed out as a [`FormSubmission`].
    pub fn check(&self) -> Result<FormSubmission, Vec<ValidationError>> {
        validate_form(self.spec, &self.values)?;
        Ok(FormSubmission {
            form: self.spec.kind,
            fields: self.values.clone(),
        })
    }

    fn apply(mut self, action: FormAction) -> Self {
        match action {
            FormAction::Input(id, value) => {
                self.values.insert(id, value);
                self.errors.remove(&id);
                if self.phase == Phase::Invalid {
                    self.phase = Phase::Idle;
                }
            }
            FormAction::Blur(id) => {
                if let Some(field) = self.spec.field(id) {
                    match validate_field(field, self.value(id)) {
                        Ok(()) => {
                            self.errors.remove(&id);
                        }
                        Err(err) => {
                            self.errors.insert(err.field, err.message);
                        }
                    }
                }
            }
            FormAction::ClearError(id) => {
                self.errors.remove(&id);
            }
            FormAction::Rejected(errors) => {
                if self.phase != Phase::Submitting {
                    self.errors = errors.into_iter().map(|e| (e.field, e.message)).collect();
                    self.phase = Phase::Invalid;
                }
            }
            FormAction::Started => {
                self.errors.clear();
                self.phase = Phase::Submitting;
            }
            FormAction::Completed(result) => {
                if result.is_ok() {
                    for value in self.values.values_mut() {
                        value.clear();
                    }
                    self.errors.clear();
                }
                self.phase = Phase::Idle;
            }
        }
        self
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::rules::{CONTACT_FORM, EMAIL_MESSAGE, NEWSLETTER_FORM};

    fn reduce(state: FormState, action: FormAction) -> FormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn filled_contact() -> FormState {
        [
            (FieldId::Name, "Al"),
            (FieldId::Email, "al@x.com"),
            (FieldId::Subject, "Hi there"),
            (FieldId::Message, "This is a long enough message."),
        ]
        .into_iter()
        .fold(FormState::new(&CONTACT_FORM), |state, (id, v)| {
            reduce(state, FormAction::Input(id, v.to_string()))
        })
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = FormState::new(&CONTACT_FORM);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.value(FieldId::Message), "");
        assert_eq!(state.error_count(), 0);
        assert_eq!(state.button_label(), "Send Message");
    }

    #[test]
    fn successful_contact_flow() {
        let state = filled_contact();
        let submission = state.check().expect("form should be valid");
        assert_eq!(submission.form, FormKind::Contact);
        assert_eq!(submission.value(FieldId::Name), "Al");

        let state = reduce(state, FormAction::Started);
        assert!(state.is_submitting());
        assert_eq!(state.button_label(), "Sending...");

        let state = reduce(state, FormAction::Completed(Ok(())));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.button_label(), "Send Message");
        for field in CONTACT_FORM.fields {
            assert_eq!(state.value(field.id), "");
        }
    }

    #[test]
    fn rejected_submission_marks_each_bad_field_once() {
        let state = reduce(filled_contact(), FormAction::Input(FieldId::Name, "A".into()));
        let errors = state.check().unwrap_err();
        let state = reduce(state, FormAction::Rejected(errors));

        assert_eq!(state.phase(), Phase::Invalid);
        assert_eq!(state.error_count(), 1);
        assert_eq!(state.error(FieldId::Name), Some("Name must be at least 2 characters long"));

        // a second pass replaces rather than stacks
        let errors = state.check().unwrap_err();
        let state = reduce(state, FormAction::Rejected(errors));
        assert_eq!(state.error_count(), 1);
    }

    #[test]
    fn new_validation_pass_drops_errors_of_fixed_fields() {
        let state = FormState::new(&CONTACT_FORM);
        let errors = state.check().unwrap_err();
        let state = reduce(state, FormAction::Rejected(errors));
        assert_eq!(state.error_count(), 4);

        let mut state = filled_contact();
        state = reduce(state, FormAction::Blur(FieldId::Name));
        state = reduce(state, FormAction::Input(FieldId::Email, "nope".into()));
        let errors = state.check().unwrap_err();
        let state = reduce(state, FormAction::Rejected(errors));
        assert_eq!(state.error_count(), 1);
        assert_eq!(state.error(FieldId::Email), Some(EMAIL_MESSAGE));
    }

    #[test]
    fn typing_clears_error_and_leaves_invalid() {
        let state = FormState::new(&NEWSLETTER_FORM);
        let errors = state.check().unwrap_err();
        let state = reduce(state, FormAction::Rejected(errors));
        assert_eq!(state.phase(), Phase::Invalid);

        let state = reduce(state, FormAction::Input(FieldId::Email, "x".into()));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.error(FieldId::Email), None);
        // only cleared, not re-validated
        assert_eq!(state.error(FieldId::Name), Some("Please enter your name"));
    }

    #[test]
    fn blur_validates_a_single_field() {
        let state = reduce(
            FormState::new(&NEWSLETTER_FORM),
            FormAction::Input(FieldId::Email, "not-an-email".into()),
        );
        let state = reduce(state, FormAction::Blur(FieldId::Email));
        assert_eq!(state.error(FieldId::Email), Some(EMAIL_MESSAGE));
        assert_eq!(state.error(FieldId::Name), None);

        let state = reduce(state, FormAction::Input(FieldId::Email, "a@b.co".into()));
        let state = reduce(state, FormAction::Blur(FieldId::Email));
        assert_eq!(state.error(FieldId::Email), None);
    }

    #[test]
    fn blur_matches_email_against_the_raw_value() {
        let state = reduce(
            FormState::new(&CONTACT_FORM),
            FormAction::Input(FieldId::Email, " a@b.co".into()),
        );
        let state = reduce(state, FormAction::Blur(FieldId::Email));
        assert_eq!(state.error(FieldId::Email), Some(EMAIL_MESSAGE));
    }

    #[test]
    fn blur_on_unknown_field_is_ignored() {
        let state = reduce(FormState::new(&NEWSLETTER_FORM), FormAction::Blur(FieldId::Subject));
        assert_eq!(state.error_count(), 0);
    }

    #[test]
    fn clearing_twice_is_idempotent() {
        let state = reduce(FormState::new(&CONTACT_FORM), FormAction::Blur(FieldId::Name));
        assert_eq!(state.error_count(), 1);
        let state = reduce(state, FormAction::ClearError(FieldId::Name));
        let state = reduce(state, FormAction::ClearError(FieldId::Name));
        assert_eq!(state.error_count(), 0);
        assert_eq!(state.error(FieldId::Name), None);
    }

    #[test]
    fn failed_submission_keeps_values() {
        let state = reduce(filled_contact(), FormAction::Started);
        let state = reduce(
            state,
            FormAction::Completed(Err(SubmissionError::Rejected { status: 500 })),
        );
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.value(FieldId::Name), "Al");
        assert_eq!(state.button_label(), "Send Message");
    }

    #[test]
    fn rejection_cannot_interrupt_an_in_flight_submission() {
        let state = reduce(filled_contact(), FormAction::Started);
        let state = reduce(
            state,
            FormAction::Rejected(vec![ValidationError {
                field: FieldId::Name,
                message: "x",
            }]),
        );
        assert!(state.is_submitting());
        assert_eq!(state.error_count(), 0);
    }
}
