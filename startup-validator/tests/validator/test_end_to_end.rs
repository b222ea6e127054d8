//! End-to-end: stubbed completion service through to a saved report

use super::common::*;
use startup_validator::analysis::{analyze_and_persist, Step};
use startup_validator::report::{compare_reports, load_report};

const IDEA: &str = "A task management app for remote teams";

#[tokio::test]
async fn test_full_run_saves_report_with_all_fields_verbatim() {
    let dir = create_temp_dir();
    let texts = step_texts();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let client = StubClient::with_step_responses(&refs);

    let outcome = analyze_and_persist(&client, &run_config(dir.path(), true), IDEA)
        .await
        .unwrap();

    let path = outcome.report_path.expect("report should be saved");
    assert_eq!(path.parent().unwrap(), dir.path());
    assert!(matches_report_pattern(
        path.file_name().unwrap().to_str().unwrap()
    ));

    let report = load_report(&path).unwrap().unwrap();
    assert_eq!(report.idea, IDEA);
    for (step, text) in Step::ALL.iter().zip(&texts) {
        assert_eq!(report.analysis.get(*step), text.as_str());
    }

    // Raw JSON carries the same strings under the fixed keys
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    for (step, text) in Step::ALL.iter().zip(&texts) {
        assert_eq!(json["analysis"][step.report_key()], text.as_str());
    }
}

#[tokio::test]
async fn test_saved_reports_can_be_compared() {
    let dir = create_temp_dir();
    let client = StubClient::new();

    let first = analyze_and_persist(&client, &run_config(dir.path(), true), IDEA)
        .await
        .unwrap();
    let first = load_report(&first.report_path.unwrap()).unwrap().unwrap();

    let other = analyze_and_persist(&client, &run_config(dir.path(), false), "Other idea")
        .await
        .unwrap();
    assert!(other.report_path.is_none());

    let second = startup_validator::report::Report::new(
        other.idea.clone(),
        other.results.clone(),
        first.timestamp,
    );
    let comparison = compare_reports(&first, &second);
    assert_eq!(comparison.idea_1, IDEA);
    assert_eq!(comparison.idea_2, "Other idea");
    assert!(comparison.comparison.is_empty());
}
