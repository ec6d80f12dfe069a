//! End-to-end exercises of the comparison workflow state machine, driven
//! without any network: the caller hands outcomes to `complete()` the same
//! way the HTTP layer would.

use std::path::PathBuf;

use doccmp::api::{ComparisonResult, SubmissionError};
use doccmp::workflow::{ComparisonWorkflow, SelectedFile, Slot, WorkflowState};

fn file(name: &str, mime: &str, size: u64) -> SelectedFile {
    SelectedFile::new(name, mime, size, PathBuf::from(name))
}

fn pdf(name: &str) -> SelectedFile {
    file(name, "application/pdf", 4096)
}

fn sample_result() -> ComparisonResult {
    serde_json::from_value(serde_json::json!({
        "document1": {
            "filename": "a.pdf",
            "page_count": 3,
            "table_count": 1,
            "content_length": 45120
        },
        "document2": {
            "filename": "b.pdf",
            "page_count": 4,
            "table_count": 1,
            "content_length": 46000
        },
        "similarity_score": 0.85,
        "differences": {
            "added_content": ["New clause"],
            "removed_content": [],
            "common_content_count": 120,
            "total_added": 1,
            "total_removed": 0
        },
        "structure_comparison": {
            "page_count_diff": 1,
            "table_count_diff": 0,
            "doc1_pages": 3,
            "doc2_pages": 4,
            "doc1_tables": 1,
            "doc2_tables": 1
        },
        "summary": "Documents are highly similar."
    }))
    .unwrap()
}

#[test]
fn compare_is_enactable_iff_both_slots_filled_and_not_submitting() {
    let mut workflow = ComparisonWorkflow::new();
    assert!(!workflow.can_submit());

    workflow.select_file(Slot::Template, pdf("a.pdf"));
    assert!(!workflow.can_submit());
    assert_eq!(*workflow.state(), WorkflowState::Idle);

    workflow.select_file(Slot::Comparison, pdf("b.pdf"));
    assert!(workflow.can_submit());
    assert_eq!(*workflow.state(), WorkflowState::FilesSelected);

    workflow.submit().unwrap();
    assert_eq!(*workflow.state(), WorkflowState::Submitting);
    assert!(!workflow.can_submit());
}

#[test]
fn missing_file_reported_before_unsupported_type() {
    // Template slot empty, comparison slot holds an invalid type: the
    // missing file wins.
    let mut workflow = ComparisonWorkflow::new();
    workflow.select_file(Slot::Comparison, file("tool.exe", "application/exe", 1024));

    let err = workflow.submit().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please select a template document before comparing."
    );
    assert_eq!(
        *workflow.state(),
        WorkflowState::ShowingError(err.to_string())
    );
}

#[test]
fn unsupported_type_fails_without_reaching_submission() {
    let mut workflow = ComparisonWorkflow::new();
    workflow.select_file(Slot::Template, file("tool.exe", "application/exe", 1024));
    workflow.select_file(Slot::Comparison, pdf("b.pdf"));

    let err = workflow.submit().unwrap_err();
    assert!(err.to_string().starts_with("Please upload PDF, image"));

    // Slots are retained and the form stays actionable.
    assert!(workflow.file(Slot::Template).is_some());
    assert!(workflow.file(Slot::Comparison).is_some());
    assert!(workflow.can_submit());
    assert!(!workflow.is_submitting());
}

#[test]
fn oversized_file_names_the_offending_slot() {
    let mut workflow = ComparisonWorkflow::new();
    workflow.select_file(Slot::Template, pdf("a.pdf"));
    workflow.select_file(
        Slot::Comparison,
        file("big.pdf", "application/pdf", 21 * 1024 * 1024),
    );

    let err = workflow.submit().unwrap_err();
    assert!(err.to_string().contains("comparison document"));
    assert!(err.to_string().contains("20 MB or smaller"));
}

#[test]
fn successful_comparison_shows_result() {
    let mut workflow = ComparisonWorkflow::new();
    workflow.select_file(Slot::Template, pdf("a.pdf"));
    workflow.select_file(Slot::Comparison, pdf("b.pdf"));

    let (template, comparison) = workflow.submit().unwrap();
    assert_eq!(template.name, "a.pdf");
    assert_eq!(comparison.name, "b.pdf");

    workflow.complete(Ok(sample_result()));
    let result = workflow.result().unwrap();
    assert_eq!(result.similarity_score, 0.85);
    assert_eq!(result.summary, "Documents are highly similar.");
}

#[test]
fn server_error_surfaces_verbatim_and_form_stays_usable() {
    let mut workflow = ComparisonWorkflow::new();
    workflow.select_file(Slot::Template, pdf("a.pdf"));
    workflow.select_file(Slot::Comparison, pdf("b.pdf"));
    workflow.submit().unwrap();

    workflow.complete(Err(SubmissionError::Http {
        status: 500,
        message: Some("Processing failed".to_string()),
    }));

    assert_eq!(workflow.error(), Some("Processing failed"));
    // Both files are still selected, so a retry is immediately possible.
    assert!(workflow.can_submit());
}

#[test]
fn http_error_without_body_gets_generic_message() {
    let mut workflow = ComparisonWorkflow::new();
    workflow.select_file(Slot::Template, pdf("a.pdf"));
    workflow.select_file(Slot::Comparison, pdf("b.pdf"));
    workflow.submit().unwrap();

    workflow.complete(Err(SubmissionError::Http {
        status: 502,
        message: None,
    }));

    let message = workflow.error().unwrap();
    assert!(message.contains("Comparison failed (HTTP 502)"));
}

#[test]
fn reset_and_selection_blocked_while_submitting() {
    let mut workflow = ComparisonWorkflow::new();
    workflow.select_file(Slot::Template, pdf("a.pdf"));
    workflow.select_file(Slot::Comparison, pdf("b.pdf"));
    workflow.submit().unwrap();

    assert!(!workflow.can_reset());
    assert!(!workflow.reset());
    assert_eq!(*workflow.state(), WorkflowState::Submitting);

    // A selection made while the request is in flight is dropped.
    workflow.select_file(Slot::Template, pdf("late.pdf"));
    assert_eq!(workflow.file(Slot::Template).unwrap().name, "a.pdf");
}

#[test]
fn reset_returns_to_an_empty_form() {
    let mut workflow = ComparisonWorkflow::new();
    workflow.select_file(Slot::Template, pdf("a.pdf"));
    workflow.select_file(Slot::Comparison, pdf("b.pdf"));
    workflow.submit().unwrap();
    workflow.complete(Ok(sample_result()));
    assert!(workflow.result().is_some());

    assert!(workflow.reset());
    assert_eq!(*workflow.state(), WorkflowState::Idle);
    assert!(workflow.file(Slot::Template).is_none());
    assert!(workflow.file(Slot::Comparison).is_none());
    assert!(workflow.error().is_none());
    assert!(workflow.result().is_none());
}

#[test]
fn late_completion_after_reset_is_dropped() {
    let mut workflow = ComparisonWorkflow::new();
    workflow.select_file(Slot::Template, pdf("a.pdf"));
    workflow.select_file(Slot::Comparison, pdf("b.pdf"));

    // Never submitted: a stray completion must not change anything.
    workflow.complete(Ok(sample_result()));
    assert_eq!(*workflow.state(), WorkflowState::FilesSelected);
    assert!(workflow.result().is_none());
}
