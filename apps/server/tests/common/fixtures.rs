//! Test fixtures and factory functions for creating request bodies.

use serde_json::json;

/// Create a new-card request body.
pub fn new_card_request(question: &str, answer: &str, category: &str, difficulty: &str) -> serde_json::Value {
    json!({
        "question": question,
        "answer": answer,
        "category": category,
        "difficulty": difficulty,
    })
}

/// Create an upload request body.
pub fn upload_request(name: &str, size: u64) -> serde_json::Value {
    json!({ "name": name, "size": size })
}

/// Path for a flashcards study action.
pub fn study_action(action: &str) -> String {
    format!("/api/flashcards/study/{}", action)
}

/// Path for a summary flashcard action.
pub fn summary_action(action: &str) -> String {
    format!("/api/summary/flashcard/{}", action)
}
