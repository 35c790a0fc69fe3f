//! Core types for the study tools.

use serde::{Deserialize, Serialize};

/// Card difficulty shown as a badge in the browse view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// A single flashcard.
///
/// Cards from the summary page carry no difficulty; cards created in the
/// browse view always do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl Card {
    pub fn new(
        id: i64,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        difficulty: Option<Difficulty>,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            difficulty,
        }
    }
}

/// Card fields submitted from the create dialog (no ID yet).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCard {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Which side of the current card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFace {
    Question,
    Answer,
}

impl CardFace {
    pub fn from_revealed(revealed: bool) -> Self {
        if revealed {
            Self::Answer
        } else {
            Self::Question
        }
    }
}

/// Read model of the current study position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub card: Card,
    pub face: CardFace,
    /// Text on the showing face.
    pub text: String,
    /// 1-based position in the deck.
    pub position: usize,
    pub total: usize,
    pub progress_percent: f64,
}
