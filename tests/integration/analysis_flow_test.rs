//! Analysis Flow Integration Tests
//!
//! Drive `analyze_message` through the real HTTP client against wiremock:
//! - successful analyses and their presentation
//! - empty-flags and out-of-range results
//! - API, parse and network failures
//! - rejection of blank and concurrent submissions

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use recruiter_check::commands::{analyze_message, exit_code, format_analysis};
use recruiter_check::view::Painter;
use recruiter_check::{AppConfig, AppState, Phase};
use recruiter_check_core::{AnalysisResult, BadgeColorKey};

// ============================================================================
// Helpers
// ============================================================================

fn state_for(server: &MockServer) -> AppState {
    let config = AppConfig {
        api_url: format!("{}/", server.uri()),
        request_timeout_secs: 5,
        ..Default::default()
    };
    AppState::new(config).expect("valid test config")
}

async fn mount_analysis(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Success
// ============================================================================

#[tokio::test]
async fn test_high_risk_message_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({ "text": "Hi, exciting opportunity!" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "score": 72,
            "level": "High",
            "flags": ["urgency language", "generic greeting"],
            "highlights": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = state_for(&server);
    let response = analyze_message(&state, "  Hi, exciting opportunity!\n").await;

    assert!(response.success);
    let report = response.data.as_ref().unwrap();
    assert_eq!(report.phase(), Phase::Success);
    assert_eq!(
        report.state.result(),
        Some(&AnalysisResult::new(
            72,
            "High",
            vec!["urgency language".to_string(), "generic greeting".to_string()],
        ))
    );

    let view = report.view.as_ref().unwrap();
    assert_eq!(view.badge_label, "High Risk");
    assert_eq!(view.badge_color_key, BadgeColorKey::Red);
    assert_eq!(view.progress_width_percent, 72);
    assert_eq!(view.flag_items.len(), 2);
    assert!(view.empty_flags_message.is_none());
    assert_eq!(exit_code(&response), 0);

    assert_eq!(state.orchestrator().lock().await.invocations(), 1);
}

#[tokio::test]
async fn test_low_risk_without_flags() {
    let server = MockServer::start().await;
    mount_analysis(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "score": 10,
            "level": "Low",
            "flags": [],
            "highlights": []
        })),
    )
    .await;

    let response = analyze_message(&state_for(&server), "Thanks for applying.").await;
    let view = response.data.unwrap().view.unwrap();
    assert_eq!(view.badge_color_key, BadgeColorKey::Green);
    assert!(view.flag_items.is_empty());
    assert_eq!(
        view.empty_flags_message.as_deref(),
        Some("No suspicious patterns detected.")
    );
}

#[tokio::test]
async fn test_out_of_range_score_and_unknown_level_still_render() {
    let server = MockServer::start().await;
    mount_analysis(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "score": 140,
            "level": "Critical",
            "flags": ["wire transfer"]
        })),
    )
    .await;

    let response = analyze_message(&state_for(&server), "Send the money today").await;
    assert!(response.success);
    let report = response.data.as_ref().unwrap();
    let view = report.view.as_ref().unwrap();
    assert_eq!(view.score, 140);
    assert_eq!(view.progress_width_percent, 100);
    assert_eq!(view.badge_label, "Critical Risk");
    assert_eq!(view.badge_color_key, BadgeColorKey::Neutral);

    let rendered = format_analysis(&response, Painter::plain(), false).unwrap();
    assert!(rendered.contains("[Critical Risk]"));
    assert!(rendered.contains("Score 140/100"));
}

#[tokio::test]
async fn test_highlights_are_marked_in_output() {
    let server = MockServer::start().await;
    mount_analysis(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "score": 55,
            "level": "Medium",
            "flags": ["Requests an upfront fee"],
            "highlights": [{ "phrase": "processing fee" }]
        })),
    )
    .await;

    let response =
        analyze_message(&state_for(&server), "A small Processing Fee is required.").await;
    let rendered = format_analysis(&response, Painter::plain(), false).unwrap();
    assert!(rendered.contains("A small [Processing Fee] is required."));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_server_error_surfaces_status_and_body() {
    let server = MockServer::start().await;
    mount_analysis(
        &server,
        ResponseTemplate::new(500).set_body_string("internal error"),
    )
    .await;

    let response = analyze_message(&state_for(&server), "hello").await;
    assert!(!response.success);
    let report = response.data.as_ref().unwrap();
    assert_eq!(report.phase(), Phase::Error);
    assert!(report.state.result().is_none());
    let message = report.state.error_message().unwrap();
    assert!(message.contains("500"));
    assert!(message.contains("internal error"));
    assert_eq!(exit_code(&response), 1);
}

#[tokio::test]
async fn test_malformed_payload_is_an_error_not_a_crash() {
    let server = MockServer::start().await;
    mount_analysis(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "level": "High", "flags": [] })),
    )
    .await;

    let response = analyze_message(&state_for(&server), "hello").await;
    let message = response.error.unwrap();
    assert!(message.starts_with("Unexpected response from the analysis service"));
}

#[tokio::test]
async fn test_unreachable_service() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = AppConfig {
        api_url: format!("http://127.0.0.1:{}", port),
        request_timeout_secs: 5,
        ..Default::default()
    };
    let state = AppState::new(config).unwrap();

    let response = analyze_message(&state, "hello").await;
    let message = response.error.unwrap();
    assert!(message.contains("Could not reach the analysis service"));
    assert!(message.contains(&format!("127.0.0.1:{}", port)));
}

#[tokio::test]
async fn test_error_then_success_replaces_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(503).set_body_string("warming up"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_analysis(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "score": 5,
            "level": "Low",
            "flags": []
        })),
    )
    .await;

    let state = state_for(&server);
    let first = analyze_message(&state, "hello").await;
    assert_eq!(first.data.unwrap().phase(), Phase::Error);

    let second = analyze_message(&state, "hello again").await;
    assert!(second.success);
    let orchestrator = state.orchestrator().lock().await;
    assert_eq!(orchestrator.phase(), Phase::Success);
    assert!(orchestrator.state().error_message().is_none());
    assert_eq!(orchestrator.invocations(), 2);
}

// ============================================================================
// Rejections
// ============================================================================

#[tokio::test]
async fn test_blank_submission_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let state = state_for(&server);
    let response = analyze_message(&state, "  ").await;
    assert!(response.data.is_none());
    assert_eq!(exit_code(&response), 2);
    assert_eq!(state.orchestrator().lock().await.phase(), Phase::Idle);
}

#[tokio::test]
async fn test_submission_while_busy_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let state = state_for(&server);
    let mut orchestrator = state.orchestrator().lock().await;
    let _pending = orchestrator.accept("first").unwrap();
    drop(orchestrator);

    let response = analyze_message(&state, "second").await;
    assert!(response.data.is_none());
    assert_eq!(
        response.error.as_deref(),
        Some("an analysis is already in progress")
    );
    let orchestrator = state.orchestrator().lock().await;
    assert_eq!(orchestrator.phase(), Phase::Loading);
    assert_eq!(orchestrator.invocations(), 0);
}
