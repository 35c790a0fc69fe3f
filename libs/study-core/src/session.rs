//! Flashcard study session.
//!
//! Each card is in one of two states: question shown (`revealed == false`)
//! or answer shown (`revealed == true`). Navigation wraps in both
//! directions. Every transition on an empty deck is ignored.

use crate::deck::Deck;
use crate::error::DeckError;
use crate::types::{Card, CardFace, CardView, NewCard};
use serde::{Deserialize, Serialize};

/// Cursor, reveal flag and correct counter for one study session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub cursor: usize,
    pub revealed: bool,
    pub correct_count: u32,
}

/// Input events handled by the reducer.
#[derive(Debug, Clone)]
pub enum Action {
    Reveal,
    Hide,
    Toggle,
    MarkCorrect,
    MarkIncorrect,
    Advance,
    Retreat,
    Reset,
    AddCard(NewCard),
    DeleteCard(i64),
}

/// What the reducer did with an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The action was not valid in the current state.
    Ignored,
    /// Card creation refused; deck unchanged.
    Rejected(DeckError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Apply one action to a deck and its session state.
pub fn reduce(deck: &mut Deck, state: &mut SessionState, action: Action) -> Outcome {
    match action {
        Action::AddCard(new_card) => match deck.add(new_card) {
            Ok(_) => Outcome::Applied,
            Err(e) => Outcome::Rejected(e),
        },
        Action::DeleteCard(id) => {
            if deck.remove(id).is_none() {
                return Outcome::Ignored;
            }
            // revealed is intentionally left as-is here
            if deck.is_empty() || state.cursor > deck.len() - 1 {
                state.cursor = 0;
            }
            Outcome::Applied
        }
        Action::Reset => {
            *state = SessionState::default();
            Outcome::Applied
        }
        _ if deck.is_empty() => Outcome::Ignored,
        Action::Reveal => {
            if state.revealed {
                return Outcome::Ignored;
            }
            state.revealed = true;
            Outcome::Applied
        }
        Action::Hide => {
            if !state.revealed {
                return Outcome::Ignored;
            }
            state.revealed = false;
            Outcome::Applied
        }
        Action::Toggle => {
            state.revealed = !state.revealed;
            Outcome::Applied
        }
        Action::MarkCorrect => {
            if !state.revealed {
                return Outcome::Ignored;
            }
            state.correct_count += 1;
            advance(deck.len(), state);
            Outcome::Applied
        }
        Action::MarkIncorrect => {
            if !state.revealed {
                return Outcome::Ignored;
            }
            advance(deck.len(), state);
            Outcome::Applied
        }
        Action::Advance => {
            advance(deck.len(), state);
            Outcome::Applied
        }
        Action::Retreat => {
            let len = deck.len();
            state.cursor = (state.cursor + len - 1) % len;
            state.revealed = false;
            Outcome::Applied
        }
    }
}

fn advance(len: usize, state: &mut SessionState) {
    state.cursor = (state.cursor + 1) % len;
    state.revealed = false;
}

/// A deck together with its session state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudySession {
    deck: Deck,
    state: SessionState,
}

impl StudySession {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            state: SessionState::default(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        reduce(&mut self.deck, &mut self.state, action)
    }

    pub fn reveal(&mut self) -> Outcome {
        self.apply(Action::Reveal)
    }

    pub fn hide(&mut self) -> Outcome {
        self.apply(Action::Hide)
    }

    pub fn toggle(&mut self) -> Outcome {
        self.apply(Action::Toggle)
    }

    pub fn mark_correct(&mut self) -> Outcome {
        self.apply(Action::MarkCorrect)
    }

    pub fn mark_incorrect(&mut self) -> Outcome {
        self.apply(Action::MarkIncorrect)
    }

    pub fn advance(&mut self) -> Outcome {
        self.apply(Action::Advance)
    }

    pub fn retreat(&mut self) -> Outcome {
        self.apply(Action::Retreat)
    }

    pub fn reset(&mut self) -> Outcome {
        self.apply(Action::Reset)
    }

    pub fn add_card(&mut self, new_card: NewCard) -> Outcome {
        self.apply(Action::AddCard(new_card))
    }

    pub fn delete_card(&mut self, id: i64) -> Outcome {
        self.apply(Action::DeleteCard(id))
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.state.cursor)
    }

    /// Cards seen so far, counting the current one once its answer is shown.
    pub fn reviewed(&self) -> usize {
        self.state.cursor + usize::from(self.state.revealed)
    }

    pub fn progress_percent(&self) -> f64 {
        if self.deck.is_empty() {
            return 0.0;
        }
        (self.state.cursor + 1) as f64 / self.deck.len() as f64 * 100.0
    }

    /// Current card with the showing face, or `None` for an empty deck.
    pub fn view(&self) -> Option<CardView> {
        let card = self.current_card()?.clone();
        let face = CardFace::from_revealed(self.state.revealed);
        let text = match face {
            CardFace::Question => card.question.clone(),
            CardFace::Answer => card.answer.clone(),
        };
        Some(CardView {
            card,
            face,
            text,
            position: self.state.cursor + 1,
            total: self.deck.len(),
            progress_percent: self.progress_percent(),
        })
    }
}
