//! Ordered card deck.
//!
//! Insertion order is display order. IDs are unique within a deck; new
//! cards get `max(id) + 1`, or 1 for an empty deck.

use crate::error::{DeckError, Result};
use crate::types::{Card, NewCard};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from existing cards, rejecting duplicate IDs.
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(DeckError::DuplicateId { id: card.id });
            }
        }
        Ok(Self { cards })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn find(&self, id: i64) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// ID the next added card will receive.
    pub fn next_id(&self) -> i64 {
        self.cards.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
    }

    /// Append a new card. The deck is left untouched when question or
    /// answer is empty.
    pub fn add(&mut self, new_card: NewCard) -> Result<i64> {
        if new_card.question.is_empty() {
            return Err(DeckError::EmptyQuestion);
        }
        if new_card.answer.is_empty() {
            return Err(DeckError::EmptyAnswer);
        }

        let id = self.next_id();
        self.cards.push(Card {
            id,
            question: new_card.question,
            answer: new_card.answer,
            category: new_card.category,
            difficulty: Some(new_card.difficulty),
        });
        Ok(id)
    }

    /// Remove the card with the given ID, returning it if present.
    pub fn remove(&mut self, id: i64) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.cards
            .iter()
            .map(|c| c.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}
