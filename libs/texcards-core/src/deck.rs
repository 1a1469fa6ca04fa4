//! Immutable snapshot of the loaded flashcards.

use crate::types::{Flashcard, LectureSummary};

/// Non-empty, read-only collection of transcoded flashcards in load order.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    cards: Vec<Flashcard>,
}

impl Deck {
    /// Wrap loaded cards. Returns `None` for an empty collection.
    pub fn new(cards: Vec<Flashcard>) -> Option<Self> {
        if cards.is_empty() {
            None
        } else {
            Some(Self { cards })
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards that came from `source`.
    pub fn cards_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Flashcard> + 'a {
        self.cards.iter().filter(move |card| card.source == source)
    }

    /// Per-lecture card counts, in load order.
    pub fn lectures(&self) -> Vec<LectureSummary> {
        let mut lectures: Vec<LectureSummary> = Vec::new();
        for card in &self.cards {
            match lectures.last_mut() {
                Some(last) if last.source == card.source => last.card_count += 1,
                _ => lectures.push(LectureSummary {
                    source: card.source.clone(),
                    card_count: 1,
                }),
            }
        }
        lectures
    }
}
