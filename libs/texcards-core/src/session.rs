//! Per-client quiz state over a deck snapshot.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::types::{Flashcard, Rating};

/// What a rating did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RateOutcome {
    /// The answer was hidden, so the rating only revealed it.
    Revealed,
    /// Points were added and the session moved on.
    Scored { points: f64 },
}

/// Snapshot of a session's counters for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based position of the current card.
    pub position: usize,
    pub total: usize,
    pub score: f64,
    pub answered: u32,
    pub showing_answer: bool,
}

/// One client's walk through a deck.
#[derive(Debug, Clone)]
pub struct QuizSession {
    deck: Arc<Deck>,
    order: Vec<usize>,
    position: usize,
    score: f64,
    answered: u32,
    showing_answer: bool,
}

impl QuizSession {
    /// Start a session over the cards from `sources`.
    ///
    /// An empty selection, or one that matches no card, selects the whole deck.
    pub fn new(deck: Arc<Deck>, sources: &[String]) -> Self {
        let mut order: Vec<usize> = deck
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, card)| sources.contains(&card.source))
            .map(|(idx, _)| idx)
            .collect();
        if order.is_empty() {
            order = (0..deck.len()).collect();
        }

        Self {
            deck,
            order,
            position: 0,
            score: 0.0,
            answered: 0,
            showing_answer: false,
        }
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.order
            .get(self.position)
            .and_then(|&idx| self.deck.get(idx))
    }

    pub fn is_showing_answer(&self) -> bool {
        self.showing_answer
    }

    pub fn toggle_answer(&mut self) {
        self.showing_answer = !self.showing_answer;
    }

    /// Move to the next card. Returns false at the end of the session.
    pub fn next(&mut self) -> bool {
        if self.position + 1 >= self.order.len() {
            return false;
        }
        self.position += 1;
        self.showing_answer = false;
        true
    }

    /// Move to the previous card. Returns false at the start of the session.
    pub fn previous(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        self.showing_answer = false;
        true
    }

    /// Grade the current card.
    pub fn rate(&mut self, rating: Rating) -> RateOutcome {
        if !self.showing_answer {
            self.showing_answer = true;
            return RateOutcome::Revealed;
        }

        let points = rating.points();
        self.score += points;
        self.answered += 1;
        self.next();
        RateOutcome::Scored { points }
    }

    /// Shuffle the selected cards and start over.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
        self.position = 0;
        self.score = 0.0;
        self.answered = 0;
        self.showing_answer = false;
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.position + 1,
            total: self.order.len(),
            score: self.score,
            answered: self.answered,
            showing_answer: self.showing_answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn deck() -> Arc<Deck> {
        let cards = [
            ("Q1", "lecture_01.tex"),
            ("Q2", "lecture_01.tex"),
            ("Q3", "lecture_02.tex"),
        ]
        .into_iter()
        .map(|(question, source)| Flashcard {
            question: question.to_string(),
            answer: format!("answer to {question}"),
            source: source.to_string(),
            line: 1,
        })
        .collect();
        Arc::new(Deck::new(cards).unwrap())
    }

    fn question(session: &QuizSession) -> &str {
        &session.current().unwrap().question
    }

    #[test]
    fn new_session_starts_hidden_at_first_card() {
        let session = QuizSession::new(deck(), &[]);
        assert_eq!(question(&session), "Q1");
        assert_eq!(
            session.progress(),
            Progress {
                position: 1,
                total: 3,
                score: 0.0,
                answered: 0,
                showing_answer: false,
            }
        );
    }

    #[test]
    fn select_by_source() {
        let session = QuizSession::new(deck(), &["lecture_02.tex".to_string()]);
        assert_eq!(session.progress().total, 1);
        assert_eq!(question(&session), "Q3");
    }

    #[test]
    fn unknown_selection_uses_whole_deck() {
        let session = QuizSession::new(deck(), &["lecture_09.tex".to_string()]);
        assert_eq!(session.progress().total, 3);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut session = QuizSession::new(deck(), &[]);
        assert!(!session.previous());
        assert!(session.next());
        assert!(session.next());
        assert!(!session.next());
        assert_eq!(question(&session), "Q3");
        assert!(session.previous());
        assert_eq!(question(&session), "Q2");
    }

    #[test]
    fn navigation_hides_answer() {
        let mut session = QuizSession::new(deck(), &[]);
        session.toggle_answer();
        assert!(session.is_showing_answer());
        session.next();
        assert!(!session.is_showing_answer());
    }

    #[test]
    fn rating_hidden_answer_only_reveals() {
        let mut session = QuizSession::new(deck(), &[]);
        assert_eq!(session.rate(Rating::Correct), RateOutcome::Revealed);
        assert!(session.is_showing_answer());
        assert_eq!(session.progress().answered, 0);
        assert_eq!(question(&session), "Q1");
    }

    #[test]
    fn rating_scores_and_advances() {
        let mut session = QuizSession::new(deck(), &[]);
        session.toggle_answer();
        assert_eq!(
            session.rate(Rating::Partial),
            RateOutcome::Scored { points: 0.5 }
        );
        session.toggle_answer();
        session.rate(Rating::Correct);

        let progress = session.progress();
        assert_eq!(progress.score, 1.5);
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.position, 3);
        assert!(!progress.showing_answer);
    }

    #[test]
    fn rating_last_card_stays_put() {
        let mut session = QuizSession::new(deck(), &["lecture_02.tex".to_string()]);
        session.toggle_answer();
        session.rate(Rating::Wrong);
        assert_eq!(question(&session), "Q3");
        assert_eq!(session.progress().answered, 1);
        assert!(session.is_showing_answer());
    }

    #[test]
    fn shuffle_resets_counters() {
        let mut session = QuizSession::new(deck(), &[]);
        session.toggle_answer();
        session.rate(Rating::Correct);

        let mut rng = StdRng::seed_from_u64(7);
        session.shuffle(&mut rng);

        let progress = session.progress();
        assert_eq!(progress.position, 1);
        assert_eq!(progress.score, 0.0);
        assert_eq!(progress.answered, 0);
        assert_eq!(progress.total, 3);

        let mut seen: Vec<String> = Vec::new();
        loop {
            seen.push(question(&session).to_string());
            if !session.next() {
                break;
            }
        }
        seen.sort();
        assert_eq!(seen, vec!["Q1", "Q2", "Q3"]);
    }
}
