//! Summary page API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestContext;

/// Test the summary page content and initial card.
#[tokio::test]
async fn test_get_summary() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/summary").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["summary"]["key_points"].as_array().unwrap().len(), 4);
    assert_eq!(body["summary"]["main_concepts"][0], "Chloroplasts");
    assert_eq!(body["flashcard"]["total"], 3);
    assert_eq!(body["flashcard"]["card"]["card"]["category"], "Biology");
    assert!(body["flashcard"]["card"]["card"].get("difficulty").is_none());
    assert_eq!(body["stats"]["total_cards"], 3);
}

/// Test reveal and hide on the summary viewer.
#[tokio::test]
async fn test_reveal_and_hide() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let shown: serde_json::Value = server.post(&fixtures::summary_action("reveal")).await.json();
    assert_eq!(shown["card"]["face"], "answer");

    let hidden: serde_json::Value = server.post(&fixtures::summary_action("hide")).await.json();
    assert_eq!(hidden["applied"], true);
    assert_eq!(hidden["card"]["face"], "question");

    let again: serde_json::Value = server.post(&fixtures::summary_action("hide")).await.json();
    assert_eq!(again["applied"], false);
}

/// Test navigation wraps and reset returns to the first card.
#[tokio::test]
async fn test_navigation_and_reset() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let last: serde_json::Value = server.post(&fixtures::summary_action("previous")).await.json();
    assert_eq!(last["card"]["position"], 3);

    let first: serde_json::Value = server.post(&fixtures::summary_action("next")).await.json();
    assert_eq!(first["card"]["position"], 1);

    server.post(&fixtures::summary_action("next")).await.assert_status_ok();
    let reset: serde_json::Value = server.post(&fixtures::summary_action("reset")).await.json();
    assert_eq!(reset["card"]["position"], 1);

    let summary: serde_json::Value = server.get("/api/summary").await.json();
    assert_eq!(summary["stats"]["cards_reviewed"], 0);
}

/// Test the summary viewer has no correct/incorrect actions.
#[tokio::test]
async fn test_unknown_summary_action() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post(&fixtures::summary_action("correct"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
