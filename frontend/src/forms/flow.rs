//! The two halves of a form submit, kept apart from the component so the
//! order of side effects can be checked without a browser.

use log::{info, warn};

use crate::analytics::{self, AnalyticsEvent};
use crate::components::notification::{Notifier, Severity};
use crate::forms::rules::{FormSpec, ValidationError};
use crate::forms::state::{FormAction, FormState, FormSubmission};
use crate::forms::submit::SubmissionError;

/// Where a form sends its toasts and analytics events.
pub trait FormEffects {
    fn notify(&self, severity: Severity, message: &str);
    fn track(&self, event: &AnalyticsEvent);
}

/// Effects as they happen on the live page.
pub struct PageEffects {
    pub notifier: Option<Notifier>,
}

impl FormEffects for PageEffects {
    fn notify(&self, severity: Severity, message: &str) {
        let Some(notifier) = &self.notifier else {
            return;
        };
        match severity {
            Severity::Success => notifier.success(message),
            Severity::Error => notifier.error(message),
        }
    }

    fn track(&self, event: &AnalyticsEvent) {
        analytics::track_event(event);
    }
}

#[derive(Debug, PartialEq)]
pub enum SubmitStep {
    /// A delivery is already in flight.
    Ignored,
    Rejected(Vec<ValidationError>),
    Deliver(FormSubmission),
}

/// Synchronous part of a submit: records the attempt and runs the full
/// validation pass. Only [`SubmitStep::Deliver`] leads to a delivery.
pub fn begin_submit(state: &FormState, effects: &impl FormEffects) -> SubmitStep {
    if let Some(event) = analytics::submit_attempt(state.spec.kind) {
        effects.track(&event);
    }
    if state.is_submitting() {
        return SubmitStep::Ignored;
    }

    match state.check() {
        Ok(submission) => SubmitStep::Deliver(submission),
        Err(errors) => {
            info!("{} form has {} invalid field(s)", state.spec.dom_id, errors.len());
            SubmitStep::Rejected(errors)
        }
    }
}

/// Announces the delivery outcome, then hands back the action that resets
/// the fields and restores the button.
pub fn finish_submit(
    spec: &FormSpec,
    submission: &FormSubmission,
    result: Result<(), SubmissionError>,
    effects: &impl FormEffects,
) -> FormAction {
    match &result {
        Ok(()) => {
            effects.notify(Severity::Success, spec.success_message);
            if let Some(event) = analytics::submit_success(submission) {
                effects.track(&event);
            }
        }
        Err(err) => {
            warn!("{} submission failed: {}", spec.dom_id, err);
            effects.notify(Severity::Error, err.user_message());
        }
    }
    FormAction::Completed(result)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::forms::rules::{FieldId, CONTACT_FORM, EMAIL_MESSAGE, NEWSLETTER_FORM};
    use yew::Reducible;

    #[derive(Debug, PartialEq)]
    enum Effect {
        Toast(Severity, String),
        Event(&'static str),
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Effect>>);

    impl Recorder {
        fn take(&self) -> Vec<Effect> {
            self.0.take()
        }
    }

    impl FormEffects for Recorder {
        fn notify(&self, severity: Severity, message: &str) {
            self.0.borrow_mut().push(Effect::Toast(severity, message.to_string()));
        }

        fn track(&self, event: &AnalyticsEvent) {
            self.0.borrow_mut().push(Effect::Event(event.name));
        }
    }

    fn reduce(state: FormState, action: FormAction) -> FormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn filled(spec: &'static FormSpec, pairs: &[(FieldId, &str)]) -> FormState {
        pairs.iter().fold(FormState::new(spec), |state, (id, v)| {
            reduce(state, FormAction::Input(*id, v.to_string()))
        })
    }

    fn valid_contact() -> FormState {
        filled(
            &CONTACT_FORM,
            &[
                (FieldId::Name, "Al"),
                (FieldId::Email, "al@x.com"),
                (FieldId::Subject, "Hi there"),
                (FieldId::Message, "This is a long enough message."),
            ],
        )
    }

    #[test]
    fn valid_contact_is_delivered_then_toasted_then_reset() {
        let effects = Recorder::default();
        let state = valid_contact();

        let SubmitStep::Deliver(submission) = begin_submit(&state, &effects) else {
            panic!("valid form was not delivered");
        };
        assert_eq!(effects.take(), vec![Effect::Event("Form Submission")]);

        let state = reduce(state, FormAction::Started);
        assert!(state.is_submitting());
        assert_eq!(state.button_label(), "Sending...");

        let action = finish_submit(&CONTACT_FORM, &submission, Ok(()), &effects);
        // the toast is out before the reset is applied
        assert_eq!(
            effects.take(),
            vec![Effect::Toast(
                Severity::Success,
                "Thank you! Your message has been sent successfully.".to_string()
            )]
        );
        assert_eq!(state.value(FieldId::Name), "Al");

        let state = reduce(state, action);
        for field in CONTACT_FORM.fields {
            assert_eq!(state.value(field.id), "");
        }
        assert!(!state.is_submitting());
        assert_eq!(state.button_label(), "Send Message");
    }

    #[test]
    fn short_contact_name_is_rejected_without_delivery() {
        let effects = Recorder::default();
        let state = reduce(valid_contact(), FormAction::Input(FieldId::Name, "A".into()));

        let step = begin_submit(&state, &effects);
        assert_eq!(
            step,
            SubmitStep::Rejected(vec![ValidationError {
                field: FieldId::Name,
                message: "Name must be at least 2 characters long",
            }])
        );
        // the attempt is the only thing recorded
        assert_eq!(effects.take(), vec![Effect::Event("Form Submission")]);
    }

    #[test]
    fn invalid_newsletter_has_no_side_effects() {
        let effects = Recorder::default();
        let state = filled(
            &NEWSLETTER_FORM,
            &[(FieldId::Name, "Ada"), (FieldId::Email, "not-an-email")],
        );

        let step = begin_submit(&state, &effects);
        assert_eq!(
            step,
            SubmitStep::Rejected(vec![ValidationError {
                field: FieldId::Email,
                message: EMAIL_MESSAGE,
            }])
        );
        assert!(effects.take().is_empty());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let effects = Recorder::default();
        let state = reduce(valid_contact(), FormAction::Started);
        assert_eq!(begin_submit(&state, &effects), SubmitStep::Ignored);
    }

    #[test]
    fn newsletter_success_tracks_the_signup_after_the_toast() {
        let effects = Recorder::default();
        let state = filled(
            &NEWSLETTER_FORM,
            &[(FieldId::Name, "Ada"), (FieldId::Email, "ada@example.com")],
        );
        let SubmitStep::Deliver(submission) = begin_submit(&state, &effects) else {
            panic!("valid form was not delivered");
        };
        assert!(effects.take().is_empty());

        finish_submit(&NEWSLETTER_FORM, &submission, Ok(()), &effects);
        assert_eq!(
            effects.take(),
            vec![
                Effect::Toast(Severity::Success, NEWSLETTER_FORM.success_message.to_string()),
                Effect::Event("Newsletter Signup"),
            ]
        );
    }

    #[test]
    fn failed_delivery_shows_an_error_and_keeps_values() {
        let effects = Recorder::default();
        let state = reduce(valid_contact(), FormAction::Started);
        let submission = valid_contact().check().unwrap();

        let err = SubmissionError::Network("offline".into());
        let message = err.user_message().to_string();
        let action = finish_submit(&CONTACT_FORM, &submission, Err(err), &effects);
        assert_eq!(effects.take(), vec![Effect::Toast(Severity::Error, message)]);

        let state = reduce(state, action);
        assert_eq!(state.value(FieldId::Message), "This is a long enough message.");
        assert_eq!(state.button_label(), "Send Message");
    }
}
