//! Response decoding tests against captured comparator bodies. Decoding is
//! a pure function of (status, body), so no server is needed.

use doccmp::api::{decode_response, SubmissionError};

const SUCCESS_BODY: &str = r#"{
    "success": true,
    "comparison": {
        "document1": {
            "filename": "contract_v1.pdf",
            "page_count": 12,
            "table_count": 3,
            "content_length": 45120
        },
        "document2": {
            "filename": "contract_v2.pdf",
            "page_count": 13,
            "table_count": 3,
            "content_length": 47890
        },
        "similarity_score": 0.85,
        "differences": {
            "added_content": ["Clause 14.2 added", "New signature block"],
            "removed_content": ["Old appendix reference"],
            "common_content_count": 312,
            "total_added": 5,
            "total_removed": 1
        },
        "structure_comparison": {
            "page_count_diff": 1,
            "table_count_diff": 0,
            "doc1_pages": 12,
            "doc2_pages": 13,
            "doc1_tables": 3,
            "doc2_tables": 3
        },
        "summary": "The documents are highly similar with minor additions."
    },
    "error": null
}"#;

#[test]
fn decodes_successful_comparison() {
    let result = decode_response(200, SUCCESS_BODY).unwrap();

    assert_eq!(result.similarity_score, 0.85);
    assert_eq!(result.summary, "The documents are highly similar with minor additions.");
    assert_eq!(result.document1.filename, "contract_v1.pdf");
    assert_eq!(result.document1.content_length, 45120);
    assert_eq!(result.document2.page_count, 13);
    assert_eq!(result.structure_comparison.page_count_diff, 1);
}

#[test]
fn truncated_lists_report_full_totals() {
    // The service returns only the first few items of each list but the
    // untruncated totals; the hidden counts drive the "... and N more" note.
    let result = decode_response(200, SUCCESS_BODY).unwrap();

    assert_eq!(result.differences.added_content.len(), 2);
    assert_eq!(result.differences.total_added, 5);
    assert_eq!(result.differences.hidden_added(), 3);
    assert_eq!(result.differences.hidden_removed(), 0);
}

#[test]
fn server_error_message_passes_through_verbatim() {
    let err = decode_response(500, r#"{"error": "Processing failed"}"#).unwrap_err();

    assert_eq!(
        err,
        SubmissionError::Http {
            status: 500,
            message: Some("Processing failed".to_string()),
        }
    );
    assert_eq!(err.user_message(), "Processing failed");
}

#[test]
fn http_error_without_parsable_body_gets_generic_message() {
    let err = decode_response(502, "<html>Bad Gateway</html>").unwrap_err();

    assert_eq!(err, SubmissionError::Http { status: 502, message: None });
    assert_eq!(
        err.user_message(),
        "Comparison failed (HTTP 502). Please try again."
    );
}

#[test]
fn malformed_success_body_is_rejected() {
    let err = decode_response(200, "not json at all").unwrap_err();
    assert!(matches!(err, SubmissionError::MalformedResponse(_)));
    assert_eq!(
        err.user_message(),
        "The comparison service returned an unexpected response. Please try again."
    );
}

#[test]
fn success_false_with_error_field_is_a_failure() {
    let err =
        decode_response(200, r#"{"success": false, "error": "Unreadable document"}"#).unwrap_err();

    assert_eq!(
        err,
        SubmissionError::Http {
            status: 200,
            message: Some("Unreadable document".to_string()),
        }
    );
}

#[test]
fn success_without_comparison_payload_is_malformed() {
    let err = decode_response(200, r#"{"success": true}"#).unwrap_err();
    assert!(matches!(err, SubmissionError::MalformedResponse(_)));
}
