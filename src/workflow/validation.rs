//! Client-side validation of the two selected documents
//!
//! Runs synchronously inside `submit()`. Checks are ordered: missing file
//! before unsupported type before size cap, and the first failing condition
//! wins. A validation failure never reaches the network.

use std::fmt;
use std::path::Path;

use log::debug;

use super::Slot;
use crate::workflow::SelectedFile;

/// MIME types the comparator accepts.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/tiff",
    "text/plain",
];

/// Per-file size cap: 20 MB.
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Locally recoverable validation failures, surfaced as an inline message
/// with the form still usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingFile(Slot),
    UnsupportedType { slot: Slot, mime: String },
    FileTooLarge { slot: Slot, size: u64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFile(slot) => {
                write!(f, "Please select a {} document before comparing.", slot.label())
            }
            ValidationError::UnsupportedType { .. } => {
                write!(f, "Please upload PDF, image (JPEG, PNG, TIFF), or plain text files.")
            }
            ValidationError::FileTooLarge { slot, size } => {
                write!(
                    f,
                    "The {} document is {} — files must be 20 MB or smaller.",
                    slot.label(),
                    crate::render::format_bytes(*size)
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate both slots in the fixed order: missing file, then type, then
/// size, each checked for the template slot before the comparison slot.
pub fn validate(
    template: Option<&SelectedFile>,
    comparison: Option<&SelectedFile>,
) -> Result<(), ValidationError> {
    let template = template.ok_or(ValidationError::MissingFile(Slot::Template))?;
    let comparison = comparison.ok_or(ValidationError::MissingFile(Slot::Comparison))?;

    for (slot, file) in [(Slot::Template, template), (Slot::Comparison, comparison)] {
        if !ALLOWED_MIME_TYPES.contains(&file.mime.as_str()) {
            debug!("Rejected {} slot: unsupported type {}", slot.label(), file.mime);
            return Err(ValidationError::UnsupportedType {
                slot,
                mime: file.mime.clone(),
            });
        }
    }

    for (slot, file) in [(Slot::Template, template), (Slot::Comparison, comparison)] {
        if file.size > MAX_FILE_SIZE {
            debug!("Rejected {} slot: {} bytes", slot.label(), file.size);
            return Err(ValidationError::FileTooLarge { slot, size: file.size });
        }
    }

    Ok(())
}

/// Derive a MIME type from the file extension. Unknown extensions map to
/// `application/octet-stream`, which validation then rejects.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
