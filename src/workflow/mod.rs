//! The two-document comparison workflow
//!
//! A single tagged state machine drives the whole UI: the upload form and
//! the result view are mutually exclusive by construction because they are
//! variants of one enum, not independent visibility flags. The workflow is
//! pure and synchronous; the caller performs the HTTP request between
//! `submit()` and `complete()`.

pub mod validation;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::api::{ComparisonResult, SubmissionError};
pub use validation::ValidationError;

/// One of the two file-upload positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Template,
    Comparison,
}

impl Slot {
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Template => "template",
            Slot::Comparison => "comparison",
        }
    }

    /// Multipart field name on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Slot::Template => "document1",
            Slot::Comparison => "document2",
        }
    }
}

/// A user-chosen file. Replaced wholesale on re-selection, cleared on
/// reset; the bytes are read from `path` at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
            path,
        }
    }

    /// Build a selection from a local path: name from the final component,
    /// MIME from the extension, size from filesystem metadata.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            mime: validation::mime_for_path(path).to_string(),
            size: metadata.len(),
            path: path.to_path_buf(),
            name,
        })
    }
}

/// Where the workflow currently is. The form (with or without an inline
/// error) and the result view are mutually exclusive variants.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    /// At least one slot is empty.
    Idle,
    /// Both slots filled, nothing validated yet.
    FilesSelected,
    /// Request in flight; reset and re-submit are blocked.
    Submitting,
    /// A decoded result is on display.
    ShowingResult(ComparisonResult),
    /// An inline error is on display; the form stays actionable.
    ShowingError(String),
}

/// State management for the upload/compare/result workflow.
pub struct ComparisonWorkflow {
    template: Option<SelectedFile>,
    comparison: Option<SelectedFile>,
    state: WorkflowState,
}

impl ComparisonWorkflow {
    pub fn new() -> Self {
        Self {
            template: None,
            comparison: None,
            state: WorkflowState::Idle,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn file(&self, slot: Slot) -> Option<&SelectedFile> {
        match slot {
            Slot::Template => self.template.as_ref(),
            Slot::Comparison => self.comparison.as_ref(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, WorkflowState::Submitting)
    }

    /// The inline error message, if one is showing.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            WorkflowState::ShowingError(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ComparisonResult> {
        match &self.state {
            WorkflowState::ShowingResult(result) => Some(result),
            _ => None,
        }
    }

    /// Compare is enactable iff both slots are filled and no request is in
    /// flight.
    pub fn can_submit(&self) -> bool {
        self.template.is_some() && self.comparison.is_some() && !self.is_submitting()
    }

    /// Reset is blocked only while a request is in flight, since there is
    /// no cancellation support.
    pub fn can_reset(&self) -> bool {
        !self.is_submitting()
    }

    /// Store a file in the given slot and clear any inline error. No
    /// validation happens at selection time. Ignored while a request is in
    /// flight or a result is on display, where the form is not visible.
    pub fn select_file(&mut self, slot: Slot, file: SelectedFile) {
        match self.state {
            WorkflowState::Submitting | WorkflowState::ShowingResult(_) => {
                warn!("Ignoring file selection for {} slot: form not active", slot.label());
                return;
            }
            _ => {}
        }

        debug!("Selected {} ({} bytes) for {} slot", file.name, file.size, slot.label());
        match slot {
            Slot::Template => self.template = Some(file),
            Slot::Comparison => self.comparison = Some(file),
        }
        self.state = self.derive_form_state();
    }

    /// Validate and begin submission. On success the workflow moves to
    /// `Submitting` and hands back both files for the caller to POST; on
    /// failure it surfaces the inline error with both slots retained.
    pub fn submit(&mut self) -> Result<(SelectedFile, SelectedFile), ValidationError> {
        match validation::validate(self.template.as_ref(), self.comparison.as_ref()) {
            Ok(()) => match (self.template.clone(), self.comparison.clone()) {
                (Some(template), Some(comparison)) => {
                    self.state = WorkflowState::Submitting;
                    Ok((template, comparison))
                }
                // validate() already rejected empty slots
                _ => Err(ValidationError::MissingFile(Slot::Template)),
            },
            Err(err) => {
                debug!("Validation failed: {}", err);
                self.state = WorkflowState::ShowingError(err.to_string());
                Err(err)
            }
        }
    }

    /// Deliver the outcome of the in-flight request. Ignored outside
    /// `Submitting` (a late completion after reset has nothing to update).
    pub fn complete(&mut self, outcome: Result<ComparisonResult, SubmissionError>) {
        if !self.is_submitting() {
            warn!("Dropping request outcome: no submission in flight");
            return;
        }

        self.state = match outcome {
            Ok(result) => WorkflowState::ShowingResult(result),
            Err(err) => WorkflowState::ShowingError(err.user_message()),
        };
    }

    /// Clear both slots, any error, and any result, returning to `Idle`.
    /// Returns false (and changes nothing) while a request is in flight.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            warn!("Reset blocked: submission in flight");
            return false;
        }

        self.template = None;
        self.comparison = None;
        self.state = WorkflowState::Idle;
        true
    }

    fn derive_form_state(&self) -> WorkflowState {
        if self.template.is_some() && self.comparison.is_some() {
            WorkflowState::FilesSelected
        } else {
            WorkflowState::Idle
        }
    }
}

impl Default for ComparisonWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
