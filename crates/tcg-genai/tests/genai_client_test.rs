//! # Integration Tests for the Generation Backend Client
//!
//! Exercises `GenAiClient` against a wiremock server to verify request
//! construction, reply extraction, and error handling without a live
//! backend credential.

use tcg_genai::{GenAiClient, GenAiConfig, GenAiError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> GenAiClient {
    let config = GenAiConfig::new("test-api-key").with_base_url(server.uri());
    GenAiClient::new(config).expect("client build")
}

fn candidate_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            {"content": {"parts": [{"text": text}]}}
        ]
    })
}

#[tokio::test]
async fn generate_content_returns_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .and(query_param("key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let text = client(&server).generate_content("prompt").await.expect("content");
    assert_eq!(text, "hello");
}

#[tokio::test]
async fn generate_test_cases_extracts_fenced_json() {
    let server = MockServer::start().await;

    let reply = "Here are your tests:\n```json\n{\"test_cases\": [{\"title\": \"T1\"}]}\n```";
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply(reply)))
        .mount(&server)
        .await;

    let value = client(&server)
        .generate_test_cases("reqs", "functional", "FDA", "FDA regulations")
        .await
        .expect("test cases");
    assert_eq!(value["test_cases"][0]["title"], "T1");
}

#[tokio::test]
async fn non_2xx_status_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let err = client(&server).generate_content("prompt").await.unwrap_err();
    match err {
        GenAiError::Api { status, body, .. } => {
            assert_eq!(status, 429);
            assert!(body.contains("quota"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidate_list_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = client(&server).generate_content("prompt").await.unwrap_err();
    assert!(matches!(err, GenAiError::EmptyResponse { .. }));
}

#[tokio::test]
async fn proseless_reply_without_json_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply("I cannot do that.")))
        .mount(&server)
        .await;

    let err = client(&server)
        .generate_test_cases("reqs", "functional", "FDA", "FDA regulations")
        .await
        .unwrap_err();
    assert!(matches!(err, GenAiError::MalformedResponse { .. }));
}

#[tokio::test]
async fn gap_analysis_maps_reply_fields() {
    let server = MockServer::start().await;

    let reply = r#"{"overall_compliance_score": 85, "covered_requirements": ["Design Controls"], "missing_coverage": ["Process Validation"], "recommendations": ["Add validation tests"]}"#;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply(reply)))
        .mount(&server)
        .await;

    let analysis = client(&server)
        .analyze_compliance_gaps("reqs", "[]", "FDA")
        .await
        .expect("analysis");
    assert_eq!(analysis.overall_compliance_score, 85.0);
    assert_eq!(analysis.covered_requirements, vec!["Design Controls"]);
    assert_eq!(analysis.missing_coverage, vec!["Process Validation"]);
}
