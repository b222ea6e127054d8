//! Tests for the interactive and scripted front ends

use super::common::*;
use std::io::Cursor;
use startup_validator::analysis::interactive::{run_interactive, InputError};
use startup_validator::analysis::scripted::{run_selection, ExampleSelection, EXAMPLE_IDEAS};
use startup_validator::analysis::{build_prompt, Step, StepError};
use startup_validator::report::store::find_report_files;

#[tokio::test]
async fn test_empty_idea_makes_no_network_call() {
    let dir = create_temp_dir();
    let client = StubClient::new();
    let mut input = Cursor::new("   \n");

    let err = run_interactive(&client, &run_config(dir.path(), true), &mut input)
        .await
        .unwrap_err();

    assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::EmptyIdea)));
    assert_eq!(client.call_count(), 0);
    assert!(find_report_files(dir.path()).unwrap().is_empty());
}

#[tokio::test]
async fn test_interactive_trims_idea_before_analysis() {
    let dir = create_temp_dir();
    let client = StubClient::new();
    let mut input = Cursor::new("  Solar panel leasing  \n");

    let outcome = run_interactive(&client, &run_config(dir.path(), false), &mut input)
        .await
        .unwrap();

    assert_eq!(outcome.idea, "Solar panel leasing");
    assert!(outcome.report_path.is_none());
    assert_eq!(
        client.calls()[0].1,
        build_prompt(Step::Feasibility, "Solar panel leasing")
    );
}

#[tokio::test]
async fn test_interactive_failure_writes_no_report() {
    let dir = create_temp_dir();
    let client = StubClient::failing_on(4);
    let mut input = Cursor::new("Pet insurance marketplace\n");

    let err = run_interactive(&client, &run_config(dir.path(), true), &mut input)
        .await
        .unwrap_err();

    let step_error = err.downcast_ref::<StepError>().unwrap();
    assert_eq!(step_error.step, Step::Features);
    assert_eq!(client.call_count(), 4);
    assert!(find_report_files(dir.path()).unwrap().is_empty());
}

#[tokio::test]
async fn test_scripted_single_example() {
    let dir = create_temp_dir();
    let client = StubClient::new();

    let outcomes = run_selection(&client, &run_config(dir.path(), false), ExampleSelection::One(2))
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].idea, EXAMPLE_IDEAS[1]);
    assert_eq!(client.call_count(), 6);
}

#[tokio::test]
async fn test_scripted_all_runs_each_example_in_order() {
    let dir = create_temp_dir();
    let client = StubClient::new();

    let outcomes = run_selection(&client, &run_config(dir.path(), false), ExampleSelection::All)
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 3);
    let calls = client.calls();
    assert_eq!(calls.len(), 18);
    for (i, idea) in EXAMPLE_IDEAS.iter().enumerate() {
        assert_eq!(calls[i * 6].1, build_prompt(Step::Feasibility, idea));
    }
}

#[tokio::test]
async fn test_scripted_all_stops_at_first_failure() {
    let dir = create_temp_dir();
    // First step of the second example
    let client = StubClient::failing_on(7);

    let err = run_selection(&client, &run_config(dir.path(), true), ExampleSelection::All)
        .await
        .unwrap_err();

    assert!(err.downcast_ref::<StepError>().is_some());
    assert_eq!(client.call_count(), 7);
    // Only the first, fully successful example was saved
    assert_eq!(find_report_files(dir.path()).unwrap().len(), 1);
}
