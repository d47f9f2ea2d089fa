//! Interactive Session Integration Tests
//!
//! Feed a scripted stdin through `run_interactive` with the HTTP client
//! pointed at wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use recruiter_check::commands::{run_interactive, SessionOptions, SessionSummary};
use recruiter_check::view::Painter;
use recruiter_check::{AppConfig, AppState};

#[tokio::test]
async fn test_session_reports_each_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({ "text": "Send a deposit by Friday." })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "score": 88,
            "level": "High",
            "flags": ["Requests payment"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({ "text": "We liked your CV." })))
        .respond_with(ResponseTemplate::new(422).set_body_string("unprocessable"))
        .expect(1)
        .mount(&server)
        .await;

    let config = AppConfig {
        api_url: server.uri(),
        ..Default::default()
    };
    let state = AppState::new(config).unwrap();

    let input: &[u8] = b"Send a deposit by Friday.\n\nWe liked your CV.\n";
    let mut out = Vec::new();
    let options = SessionOptions {
        painter: Painter::plain(),
        json: false,
    };
    let summary = run_interactive(&state, input, &mut out, options)
        .await
        .unwrap();

    assert_eq!(
        summary,
        SessionSummary {
            submitted: 2,
            succeeded: 1,
            failed: 1,
        }
    );
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[High Risk]"));
    assert!(text.contains("⚠ Requests payment"));
    assert!(text.contains("⚠ API error 422: unprocessable"));
}
