//! Submission error taxonomy
//!
//! Everything that can go wrong between pressing Compare and decoding a
//! result. All variants are recoverable: the workflow surfaces the message
//! inline and the user retries by pressing Compare again.

use std::fmt;

/// Errors from submitting a comparison request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionError {
    /// Network-level failure (connection refused, DNS, transport timeout).
    Network(String),
    /// Non-2xx HTTP status; carries the server's `error` field when the
    /// body had one.
    Http { status: u16, message: Option<String> },
    /// 2xx response whose body did not match the expected success shape.
    MalformedResponse(String),
    /// A selected file could not be read at submit time.
    FileRead { filename: String, detail: String },
}

impl SubmissionError {
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            SubmissionError::Http {
                status: status.as_u16(),
                message: None,
            }
        } else {
            SubmissionError::Network(err.to_string())
        }
    }

    /// Message for the inline error slot: the server's `error` field
    /// verbatim when present, otherwise a generic retryable message.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Network(_) => {
                "Could not reach the comparison service. Please try again.".to_string()
            }
            SubmissionError::Http {
                message: Some(msg), ..
            } => msg.clone(),
            SubmissionError::Http { status, .. } => {
                format!("Comparison failed (HTTP {status}). Please try again.")
            }
            SubmissionError::MalformedResponse(_) => {
                "The comparison service returned an unexpected response. Please try again."
                    .to_string()
            }
            SubmissionError::FileRead { filename, .. } => {
                format!("Could not read {filename}. Please re-select the file.")
            }
        }
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Network(detail) => write!(f, "network error: {detail}"),
            SubmissionError::Http {
                status,
                message: Some(msg),
            } => write!(f, "server returned HTTP {status}: {msg}"),
            SubmissionError::Http { status, .. } => write!(f, "server returned HTTP {status}"),
            SubmissionError::MalformedResponse(detail) => {
                write!(f, "unexpected response body: {detail}")
            }
            SubmissionError::FileRead { filename, detail } => {
                write!(f, "failed to read {filename}: {detail}")
            }
        }
    }
}

impl std::error::Error for SubmissionError {}
