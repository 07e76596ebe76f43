use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};

use crate::config;
use crate::forms::state::FormSubmission;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("could not encode submission: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server rejected submission with status {status}")]
    Rejected { status: u16 },
}

impl SubmissionError {
    /// Text shown to the visitor in the error toast.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::Rejected { status } if *status < 500 => {
                "We couldn't accept that submission. Please check your details and try again."
            }
            _ => "Something went wrong while sending. Please try again in a moment.",
        }
    }
}

/// Delivers a validated submission. Without a configured endpoint this
/// only waits out the simulated round trip and always succeeds.
pub async fn deliver(submission: &FormSubmission) -> Result<(), SubmissionError> {
    match config::submission_endpoint(submission.form) {
        Some(url) => post(&url, submission).await,
        None => {
            TimeoutFuture::new(config::SIMULATED_SUBMIT_DELAY_MS).await;
            info!("Form submitted (simulated): {:?}", submission);
            Ok(())
        }
    }
}

async fn post(url: &str, submission: &FormSubmission) -> Result<(), SubmissionError> {
    let request = Request::post(url)
        .json(submission)
        .map_err(|e| SubmissionError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    if response.ok() {
        info!("Form submitted to {}", url);
        Ok(())
    } else {
        warn!("Submission to {} failed with status: {}", url, response.status());
        Err(SubmissionError::Rejected {
            status: response.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_ask_the_visitor_to_check_input() {
        let err = SubmissionError::Rejected { status: 422 };
        assert!(err.user_message().contains("check your details"));
    }

    #[test]
    fn other_failures_ask_to_retry_later() {
        for err in [
            SubmissionError::Rejected { status: 503 },
            SubmissionError::Network("offline".into()),
            SubmissionError::Encode("bad".into()),
        ] {
            assert!(err.user_message().contains("try again in a moment"));
        }
    }

    #[test]
    fn errors_describe_themselves() {
        assert_eq!(
            SubmissionError::Rejected { status: 500 }.to_string(),
            "server rejected submission with status 500"
        );
    }
}
