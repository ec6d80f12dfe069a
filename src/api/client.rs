//! HTTP client for the comparator service
//!
//! Builds the multipart request (`document1` + `document2`), POSTs it to the
//! comparison endpoint, and decodes the response. Decoding is a pure
//! function of `(status, body)` so it can be tested without sockets.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use super::error::SubmissionError;
use super::models::ComparisonResult;
use crate::workflow::{SelectedFile, Slot};

const COMPARE_PATH: &str = "/api/compare_documents";

/// Envelope the service wraps every response in. All fields defaulted so a
/// body of the wrong shape decodes to `success: false` instead of failing.
#[derive(Debug, Deserialize)]
struct CompareResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    comparison: Option<ComparisonResult>,
    #[serde(default)]
    error: Option<String>,
}

/// Error-only body shape used on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client for the external comparator service. Construct once per command;
/// the underlying `reqwest::Client` pools connections.
pub struct CompareClient {
    client: reqwest::Client,
    base_url: String,
}

impl CompareClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("doccmp/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit both documents and decode the comparison result.
    ///
    /// File bytes are read at submit time, not selection time, so a file
    /// deleted in between surfaces as a `FileRead` error.
    pub async fn compare(
        &self,
        document1: &SelectedFile,
        document2: &SelectedFile,
    ) -> Result<ComparisonResult, SubmissionError> {
        let url = format!("{}{}", self.base_url, COMPARE_PATH);
        info!(
            "Submitting comparison: {} vs {} to {}",
            document1.name, document2.name, url
        );

        let part1 = multipart_part(document1).await?;
        let part2 = multipart_part(document2).await?;
        let form = Form::new()
            .part(Slot::Template.wire_name(), part1)
            .part(Slot::Comparison.wire_name(), part2);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Comparison request failed: {}", e);
                SubmissionError::from_reqwest(&e)
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        debug!("Comparator responded with HTTP {} ({} bytes)", status, body.len());
        decode_response(status, &body)
    }
}

/// Build one multipart part carrying the raw bytes, filename, and MIME type
/// of a selected file.
async fn multipart_part(file: &SelectedFile) -> Result<Part, SubmissionError> {
    let bytes = read_file(&file.path, &file.name).await?;

    Part::bytes(bytes)
        .file_name(file.name.clone())
        .mime_str(&file.mime)
        .map_err(|e| SubmissionError::FileRead {
            filename: file.name.clone(),
            detail: format!("invalid MIME type: {e}"),
        })
}

async fn read_file(path: &Path, name: &str) -> Result<Vec<u8>, SubmissionError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| SubmissionError::FileRead {
            filename: name.to_string(),
            detail: e.to_string(),
        })
}

/// Decode a comparator response from its HTTP status and raw body.
///
/// Non-2xx statuses are failures, carrying the body's `error` field when it
/// has one. A 2xx body must have `success: true` and a `comparison` object;
/// anything else is malformed or a server-reported failure.
pub fn decode_response(status: u16, body: &str) -> Result<ComparisonResult, SubmissionError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        return Err(SubmissionError::Http { status, message });
    }

    let decoded: CompareResponse = serde_json::from_str(body)
        .map_err(|e| SubmissionError::MalformedResponse(e.to_string()))?;

    if decoded.success {
        if let Some(comparison) = decoded.comparison {
            return Ok(comparison);
        }
    }

    if let Some(error) = decoded.error {
        return Err(SubmissionError::Http {
            status,
            message: Some(error),
        });
    }

    Err(SubmissionError::MalformedResponse(
        "response missing comparison payload".to_string(),
    ))
}
