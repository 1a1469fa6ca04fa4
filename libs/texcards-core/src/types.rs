//! Core types for the lecture flashcard quiz.

use serde::{Deserialize, Serialize};

use crate::transcode::transcode;

/// Question/answer pair cut out of one lecture document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    pub question: String,
    pub answer: String,
    /// 1-based line of the `\section` marker that opened this card.
    pub line_number: usize,
}

/// Position of a `\section{title}` marker in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBoundary {
    /// Title as written, untrimmed.
    pub title: String,
    /// Byte offset of the backslash that starts the marker.
    pub start: usize,
    /// Byte offset just past the closing brace, where the body begins.
    pub body_start: usize,
}

/// Flashcard tagged with the lecture file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    pub source: String,
    /// 1-based line of the `\section` marker in `source`.
    pub line: usize,
}

impl Flashcard {
    pub fn new(card: RawCard, source: impl Into<String>) -> Self {
        Self {
            question: card.question,
            answer: card.answer,
            source: source.into(),
            line: card.line_number,
        }
    }

    /// Copy of this card with question and answer rewritten to HTML.
    pub fn transcoded(&self) -> Self {
        Self {
            question: transcode(&self.question),
            answer: transcode(&self.answer),
            source: self.source.clone(),
            line: self.line,
        }
    }
}

/// Self-assessment given after revealing an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Wrong,
    Partial,
    Correct,
}

impl Rating {
    /// Points added to the session score.
    pub fn points(self) -> f64 {
        match self {
            Self::Wrong => 0.0,
            Self::Partial => 0.5,
            Self::Correct => 1.0,
        }
    }
}

/// Number of cards contributed by one lecture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureSummary {
    pub source: String,
    pub card_count: usize,
}
