//! Core library for the LaTeX lecture flashcard quiz.
//!
//! Provides:
//! - Section segmenter turning lecture files into question/answer pairs
//! - LaTeX to HTML transcoder for KaTeX rendering
//! - Lecture directory loader and immutable deck snapshots
//! - Per-client quiz sessions
//! - Shared types (Flashcard, RawCard, Rating, etc.)

pub mod deck;
pub mod error;
pub mod loader;
pub mod segmenter;
pub mod session;
pub mod transcode;
pub mod types;

pub use deck::Deck;
pub use error::{LoadError, ParseError, Result};
pub use loader::{is_lecture_file, list_lecture_files, load_all, load_deck, load_file};
pub use segmenter::{section_boundaries, segment, segment_bytes};
pub use session::{Progress, QuizSession, RateOutcome};
pub use transcode::transcode;
pub use types::{Flashcard, LectureSummary, Rating, RawCard, SectionBoundary};
