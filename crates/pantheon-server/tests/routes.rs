//! Router tests driven through `tower::ServiceExt::oneshot` against a mock
//! generation backend.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use pantheon_core::engine::{QuizEngine, QuizEngineConfig};
use pantheon_core::error::ProviderError;
use pantheon_providers::mock::MockProvider;
use pantheon_server::{app, AppState};

const FULL_SET_TEXT: &str = "\
질문1: 주말에 에너지를 얻는 방법은? | 답변A: 친구들과 만난다 | 유형: E | 답변B: 혼자 쉰다 | 유형: I
질문2: 새 기기를 사면? | 답변A: 설명서부터 읽는다 | 유형: S | 답변B: 일단 눌러본다 | 유형: N";

fn router_with(provider: MockProvider) -> Router {
    let engine = QuizEngine::new(Arc::new(provider), QuizEngineConfig::default());
    app(AppState::new(engine))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request should succeed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, body)
}

#[tokio::test]
async fn health_reports_version() {
    let app = router_with(MockProvider::with_fixed_response(""));
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request should build");

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn start_returns_twenty_questions() {
    let app = router_with(MockProvider::with_fixed_response(FULL_SET_TEXT));
    let request = Request::builder()
        .method("POST")
        .uri("/api/mbti/start")
        .body(Body::empty())
        .expect("request should build");

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);

    let questions = body["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 20);
    assert_eq!(questions[0]["question"], "주말에 에너지를 얻는 방법은?");
    assert_eq!(
        questions[0]["answers"],
        json!([
            {"text": "친구들과 만난다", "type": "E"},
            {"text": "혼자 쉰다", "type": "I"}
        ])
    );
    assert_eq!(questions[2]["question"], "질문 3");
    assert_eq!(questions[2]["answers"][0]["type"], "T");
    assert_eq!(questions[2]["answers"][1]["type"], "F");
}

#[tokio::test]
async fn question_repairs_missing_trait_letters() {
    let app = router_with(MockProvider::with_fixed_response(
        "질문: 여행 준비는?\n답변A: 일정표를 만든다\n답변B: 가서 정한다",
    ));

    let (status, body) = send(
        app,
        post_json(
            "/api/mbti/question",
            json!({"questionNumber": 4, "category": "JP"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], "여행 준비는?");
    assert_eq!(body["answers"][0]["type"], "J");
    assert_eq!(body["answers"][1]["type"], "P");
}

#[tokio::test]
async fn question_rejects_unknown_category() {
    let provider = Arc::new(MockProvider::with_fixed_response(""));
    let engine = QuizEngine::new(provider.clone(), QuizEngineConfig::default());
    let app = app(AppState::new(engine));

    let (status, body) = send(
        app,
        post_json(
            "/api/mbti/question",
            json!({"questionNumber": 1, "category": "XY"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn question_rejects_malformed_body() {
    let app = router_with(MockProvider::with_fixed_response(""));
    let (status, body) = send(
        app,
        post_json("/api/mbti/question", json!({"category": "EI"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("questionNumber"));
}

#[tokio::test]
async fn result_scores_tally() {
    let app = router_with(MockProvider::with_fixed_response(""));
    let (status, body) = send(
        app,
        post_json(
            "/api/mbti/result",
            json!({"answers": {"E": 1, "I": 4, "S": 0, "N": 5, "T": 2, "F": 2, "J": 1, "P": 3}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mbtiType"], "INFP");
    assert_eq!(body["characterName"], "페르세포네 (Persephone)");
    assert_eq!(body["traits"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn result_with_empty_tally_ties_to_second_letters() {
    let app = router_with(MockProvider::with_fixed_response(""));
    let (status, body) = send(app, post_json("/api/mbti/result", json!({"answers": {}}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mbtiType"], "INFP");
}

#[tokio::test]
async fn result_ignores_lowercase_tally_keys() {
    for _ in 0..20 {
        let app = router_with(MockProvider::with_fixed_response(""));
        let (status, body) = send(
            app,
            post_json("/api/mbti/result", json!({"answers": {"E": 1, "e": 5, "I": 3}})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mbtiType"], "INFP");
    }
}

#[tokio::test]
async fn generation_failure_is_bad_gateway() {
    let app = router_with(MockProvider::failing(|| ProviderError::Timeout(120)));
    let request = Request::builder()
        .method("POST")
        .uri("/api/mbti/start")
        .body(Body::empty())
        .expect("request should build");

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "generation_failed");
}
