//! Wire types for the comparator service response
//!
//! The comparison endpoint returns `{ "success": true, "comparison": {...} }`
//! on success; these types mirror the comparison object exactly as the
//! service emits it.

use serde::{Deserialize, Serialize};

/// A complete comparison of two documents as produced by the comparator
/// service. Immutable once decoded; discarded on workflow reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub document1: DocumentSummary,
    pub document2: DocumentSummary,
    /// Textual closeness in [0, 1].
    pub similarity_score: f64,
    pub differences: ContentDifferences,
    pub structure_comparison: StructureComparison,
    /// Human-readable summary, displayed verbatim.
    pub summary: String,
}

/// Per-document analysis summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub filename: String,
    pub page_count: u32,
    pub table_count: u32,
    pub content_length: u64,
}

/// Sentence-level content differences. The service truncates the content
/// lists for display (first 10), so `total_added`/`total_removed` may
/// exceed the list lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDifferences {
    pub added_content: Vec<String>,
    pub removed_content: Vec<String>,
    pub common_content_count: usize,
    pub total_added: usize,
    pub total_removed: usize,
}

/// Page/table counts and their deltas (document 2 minus document 1; deltas
/// may be negative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureComparison {
    pub page_count_diff: i64,
    pub table_count_diff: i64,
    pub doc1_pages: u32,
    pub doc2_pages: u32,
    pub doc1_tables: u32,
    pub doc2_tables: u32,
}

impl ContentDifferences {
    /// Items the service counted but did not return for display.
    pub fn hidden_added(&self) -> usize {
        self.total_added.saturating_sub(self.added_content.len())
    }

    pub fn hidden_removed(&self) -> usize {
        self.total_removed.saturating_sub(self.removed_content.len())
    }
}
