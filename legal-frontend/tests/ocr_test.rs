mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

const SCANNED: &str = "The tenant shall pay rent by the 5th. The landlord may enter at any time.";

#[tokio::test]
async fn stored_text_is_analyzed() {
    let mut app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/clauses/analyze-clauses"))
        .and(body_json(json!({"legal_text": SCANNED})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "good_clausess": ["The tenant shall pay rent by the 5th."],
            "bad_clausess": ["The landlord may enter at any time."]
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let updated = app.put_json("/ocr/text", json!({"text": SCANNED})).await;
    assert_eq!(
        updated.body,
        json!({"extracted_text": SCANNED, "state": "idle"})
    );

    let response = app.post_json("/ocr/analyze", json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["state"], "success");
    assert_eq!(
        response.body["data"]["bad_clauses"],
        json!(["The landlord may enter at any time."])
    );
    assert_eq!(response.body["extracted_text"], SCANNED);
}

#[tokio::test]
async fn edited_text_replaces_stored_text() {
    let mut app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/clauses/analyze-clauses"))
        .and(body_json(json!({"legal_text": "Edited clause"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "good_clauses": ["Edited clause"],
            "bad_clauses": []
        })))
        .expect(1)
        .mount(&app.backend)
        .await;
    app.put_json("/ocr/text", json!({"text": SCANNED})).await;

    let response = app
        .post_json("/ocr/analyze", json!({"text": "Edited clause"}))
        .await;

    assert_eq!(response.body["extracted_text"], "Edited clause");
    assert_eq!(response.body["data"]["good_clauses"], json!(["Edited clause"]));
}

#[tokio::test]
async fn blank_text_is_rejected() {
    let mut app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let response = app.post_json("/ocr/analyze", json!({"text": "  "})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "No text to analyze");
}

#[tokio::test]
async fn backend_error_keeps_extracted_text() {
    let mut app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/clauses/analyze-clauses"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.backend)
        .await;

    let response = app.post_json("/ocr/analyze", json!({"text": SCANNED})).await;

    assert_eq!(
        response.body,
        json!({
            "extracted_text": SCANNED,
            "state": "error",
            "message": "API error: 404 - Not Found"
        })
    );

    let reset = app.delete("/ocr").await;
    assert_eq!(reset.body, json!({"extracted_text": "", "state": "idle"}));
}
