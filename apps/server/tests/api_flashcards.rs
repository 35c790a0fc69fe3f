//! Flashcards page API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

async fn enable_study_mode(server: &TestServer) {
    let body: serde_json::Value = server.post("/api/flashcards/study-mode").await.json();
    assert_eq!(body["study_mode"], true);
}

/// Test the browse view lists the seeded deck.
#[tokio::test]
async fn test_list_seeded_cards() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/flashcards").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["cards"].as_array().unwrap().len(), 4);
    assert_eq!(body["empty"], false);
    assert_eq!(body["study_mode"], false);
    assert_eq!(body["categories"], serde_json::json!(["Biology", "Physics"]));
    assert_eq!(body["cards"][2]["difficulty"], "hard");
}

/// Test creating a card assigns the next ID and appends it.
#[tokio::test]
async fn test_create_card() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/flashcards")
        .json(&fixtures::new_card_request("What is ATP?", "Energy currency", "Biology", "easy"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], 5);
    assert_eq!(body["difficulty"], "easy");

    let list: serde_json::Value = server.get("/api/flashcards").await.json();
    assert_eq!(list["cards"].as_array().unwrap().len(), 5);
    assert_eq!(list["cards"][4]["question"], "What is ATP?");
}

/// Test an empty question is rejected and the deck is unchanged.
#[tokio::test]
async fn test_create_card_empty_question_rejected() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/flashcards")
        .json(&fixtures::new_card_request("", "x", "Biology", "medium"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");

    let list: serde_json::Value = server.get("/api/flashcards").await.json();
    assert_eq!(list["cards"].as_array().unwrap().len(), 4);
}

/// Test deleting a card and then an unknown card.
#[tokio::test]
async fn test_delete_card() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.delete("/api/flashcards/2").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], 2);
    assert_eq!(body["total"], 3);

    server
        .delete("/api/flashcards/2")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// Test deleting every card leaves an empty, still-usable session.
#[tokio::test]
async fn test_delete_all_cards_then_study() {
    let ctx = TestContext::new();
    let server = ctx.server();
    enable_study_mode(&server).await;

    for id in 1..=4 {
        server.delete(&format!("/api/flashcards/{}", id)).await.assert_status_ok();
    }

    let list: serde_json::Value = server.get("/api/flashcards").await.json();
    assert_eq!(list["empty"], true);

    for action in ["reveal", "correct", "next", "previous"] {
        let response = server.post(&fixtures::study_action(action)).await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["applied"], false);
        assert!(body["card"].is_null());
    }
}

/// Test study mode toggles on and off.
#[tokio::test]
async fn test_toggle_study_mode() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let on: serde_json::Value = server.post("/api/flashcards/study-mode").await.json();
    assert_eq!(on["study_mode"], true);
    let off: serde_json::Value = server.post("/api/flashcards/study-mode").await.json();
    assert_eq!(off["study_mode"], false);
}

/// Test a full study round: reveal, mark, and wrap around.
#[tokio::test]
async fn test_study_session_flow() {
    let ctx = TestContext::new();
    let server = ctx.server();
    enable_study_mode(&server).await;

    let start: serde_json::Value = server.get("/api/flashcards/study").await.json();
    assert_eq!(start["card"]["position"], 1);
    assert_eq!(start["card"]["face"], "question");
    assert_eq!(start["card"]["text"], "What is photosynthesis?");

    let revealed: serde_json::Value = server.post(&fixtures::study_action("reveal")).await.json();
    assert_eq!(revealed["applied"], true);
    assert_eq!(revealed["card"]["face"], "answer");
    assert_eq!(revealed["reviewed"], 1);

    let correct: serde_json::Value = server.post(&fixtures::study_action("correct")).await.json();
    assert_eq!(correct["correct_count"], 1);
    assert_eq!(correct["revealed"], false);
    assert_eq!(correct["card"]["position"], 2);

    // marking without revealing first does nothing
    let ignored: serde_json::Value = server.post(&fixtures::study_action("incorrect")).await.json();
    assert_eq!(ignored["applied"], false);
    assert_eq!(ignored["card"]["position"], 2);

    let wrapped: serde_json::Value = server.post(&fixtures::study_action("previous")).await.json();
    assert_eq!(wrapped["card"]["position"], 1);
    let wrapped: serde_json::Value = server.post(&fixtures::study_action("previous")).await.json();
    assert_eq!(wrapped["card"]["position"], 4);

    let reset: serde_json::Value = server.post(&fixtures::study_action("reset")).await.json();
    assert_eq!(reset["correct_count"], 0);
    assert_eq!(reset["card"]["position"], 1);
}

/// Test an unknown study action is a bad request.
#[tokio::test]
async fn test_unknown_study_action() {
    let ctx = TestContext::new();
    let server = ctx.server();
    enable_study_mode(&server).await;

    server
        .post(&fixtures::study_action("skip"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

/// Test deleting the card under the cursor keeps the reveal flag.
#[tokio::test]
async fn test_delete_current_card_keeps_reveal_flag() {
    let ctx = TestContext::new();
    let server = ctx.server();
    enable_study_mode(&server).await;

    server.post(&fixtures::study_action("previous")).await.assert_status_ok();
    server.post(&fixtures::study_action("reveal")).await.assert_status_ok();

    let body: serde_json::Value = server.delete("/api/flashcards/4").await.json();
    assert_eq!(body["card"]["position"], 1);
    assert_eq!(body["revealed"], true);
}

/// Test study actions are refused while study mode is off.
#[tokio::test]
async fn test_study_actions_require_study_mode() {
    let ctx = TestContext::new();
    let server = ctx.server();

    for action in ["reveal", "correct", "incorrect", "next", "previous", "reset"] {
        server
            .post(&fixtures::study_action(action))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    let view: serde_json::Value = server.get("/api/flashcards/study").await.json();
    assert_eq!(view["revealed"], false);
    assert_eq!(view["card"]["position"], 1);

    enable_study_mode(&server).await;
    let revealed: serde_json::Value = server.post(&fixtures::study_action("reveal")).await.json();
    assert_eq!(revealed["applied"], true);
}
