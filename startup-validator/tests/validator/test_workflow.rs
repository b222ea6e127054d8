//! Tests for orchestration order and stop-on-failure

use super::common::*;
use startup_validator::analysis::{build_prompt, run_analysis, RunConfig, Step};

const IDEA: &str = "A task management app for remote teams";

#[tokio::test]
async fn test_steps_run_in_fixed_order() {
    let client = StubClient::new();
    run_analysis(&client, &RunConfig::default(), IDEA).await.unwrap();

    let prompts: Vec<String> = client.calls().into_iter().map(|(_, p)| p).collect();
    let expected: Vec<String> = Step::ALL.iter().map(|s| build_prompt(*s, IDEA)).collect();
    assert_eq!(prompts, expected);
}

#[tokio::test]
async fn test_results_map_to_their_steps() {
    let texts = step_texts();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let client = StubClient::with_step_responses(&refs);

    let results = run_analysis(&client, &RunConfig::default(), IDEA).await.unwrap();

    assert_eq!(results, sample_results());
    assert_eq!(results.risks, texts[2]);
    assert_eq!(results.timeline, texts[5]);
}

#[tokio::test]
async fn test_failure_at_each_step_stops_the_run() {
    for k in 1..=Step::ALL.len() {
        let client = StubClient::failing_on(k);
        let err = run_analysis(&client, &RunConfig::default(), IDEA)
            .await
            .unwrap_err();

        assert_eq!(err.step, Step::ALL[k - 1]);
        assert_eq!(client.call_count(), k, "steps after {} were invoked", k);
    }
}

#[tokio::test]
async fn test_every_call_uses_configured_model() {
    let client = StubClient::new();
    let config = RunConfig {
        model: "llama-test".to_string(),
        ..RunConfig::default()
    };
    run_analysis(&client, &config, IDEA).await.unwrap();

    assert!(client.calls().iter().all(|(model, _)| model == "llama-test"));
}
