//! Comparator service interface
//!
//! Wire types for the comparison response, the submission error taxonomy,
//! and the HTTP client that POSTs the two documents as a multipart form.
//! The comparator itself is an opaque collaborator; only the request and
//! response shapes matter here.

pub mod client;
pub mod error;
pub mod models;

pub use client::{decode_response, CompareClient};
pub use error::SubmissionError;
pub use models::{ComparisonResult, ContentDifferences, DocumentSummary, StructureComparison};
