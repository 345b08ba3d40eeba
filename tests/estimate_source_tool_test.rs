use serde_json::json;

mod common;

use common::helpers::assert_report_consistent;

#[test]
fn test_estimate_source_css() {
    // Given: inline CSS
    let arguments = json!({
        "content": ".my-class { /* c */ width: 100px; }",
        "language": "css"
    });

    // When: estimate_source is called
    let result = minification_estimator::analysis::estimate_source::execute(&arguments).unwrap();

    // Then: the report counts only what a minifier keeps
    let report = common::get_report(&result);
    assert_eq!(report["language"], "CSS");
    assert_eq!(report["meaningful_chars"], ".my-class{width:100px;}".len());
    assert!(report.get("path").is_none(), "inline source has no path");
    assert_report_consistent(&report);
}

#[test]
fn test_estimate_source_js() {
    let arguments = json!({
        "content": "return 1 / 2 // hello",
        "language": "js"
    });

    let result = minification_estimator::analysis::estimate_source::execute(&arguments).unwrap();

    let report = common::get_report(&result);
    assert_eq!(report["language"], "JavaScript");
    assert_eq!(report["total_chars"], 21);
    assert_eq!(report["meaningful_chars"], 9);
    assert_eq!(report["removable_chars"], 12);
    assert_eq!(report["removable_percent"], 57.1);
}

#[test]
fn test_estimate_source_counts_characters_not_bytes() {
    let arguments = json!({
        "content": "const s = 'héllo wörld';",
        "language": "javascript"
    });

    let result = minification_estimator::analysis::estimate_source::execute(&arguments).unwrap();

    let report = common::get_report(&result);
    assert_eq!(report["total_chars"], 24);
    assert_eq!(report["meaningful_chars"], 21);
}

#[test]
fn test_estimate_source_empty_content() {
    let arguments = json!({
        "content": "",
        "language": "css"
    });

    let result = minification_estimator::analysis::estimate_source::execute(&arguments).unwrap();

    let report = common::get_report(&result);
    assert_eq!(report["total_chars"], 0);
    assert_eq!(report["meaningful_chars"], 0);
    assert_eq!(report["removable_percent"], 0.0);
}
