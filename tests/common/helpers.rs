#![allow(dead_code)]

//! Helper functions for common test assertions

use serde_json::Value;

pub fn assert_error_contains(err: &str, expected: &str, context: &str) {
    assert!(
        err.to_lowercase().contains(&expected.to_lowercase()),
        "{}: Error should contain '{}', got: {}",
        context,
        expected,
        err
    );
}

/// Assert the arithmetic every report must satisfy.
pub fn assert_report_consistent(report: &Value) {
    let total = report["total_chars"].as_u64().expect("total_chars");
    let meaningful = report["meaningful_chars"].as_u64().expect("meaningful_chars");
    let removable = report["removable_chars"].as_u64().expect("removable_chars");
    let percent = report["removable_percent"].as_f64().expect("removable_percent");

    assert!(
        meaningful <= total,
        "meaningful_chars ({}) should not exceed total_chars ({})",
        meaningful,
        total
    );
    assert_eq!(removable, total - meaningful, "removable_chars mismatch");
    assert!(
        (0.0..=100.0).contains(&percent),
        "removable_percent out of range: {}",
        percent
    );
}
