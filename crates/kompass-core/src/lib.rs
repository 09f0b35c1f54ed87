//! Quiz engine for Kompass: a twelve-question personality typology flow.
//!
//! Answers are collected one page at a time into an [`AnswerSheet`] kept in a
//! session-scoped store, then scored into a four-letter typology code plus a
//! binary stability trait. Navigation never happens here: every operation
//! returns a [`Page`] destination that a front-end follows.

/// Answer choices and the incrementally built answer sheet.
pub mod answer;
/// The four typology dimensions and their tallies.
pub mod dimension;
/// Error types used throughout the crate.
pub mod error;
/// Quiz flow: recording, scoring, and restart operations.
pub mod flow;
/// Navigation destinations handed to the presentation layer.
pub mod page;
/// Scoring: tally pass, adaptive points, and the score report.
pub mod score;
/// Session-scoped storage boundary for the answer sheet.
pub mod store;
/// Typology codes and the stability label.
pub mod typology;

pub use answer::{AnswerSheet, Choice};
pub use dimension::{Dimension, Tally, TallyBoard};
pub use error::{QuizError, QuizResult};
pub use flow::{QUESTION_COUNT, QuizFlow};
pub use page::Page;
pub use score::{ScoreReport, score};
pub use store::{MemoryStore, SessionStore};
pub use typology::{ADAPTIVE_THRESHOLD, Stability, Typology};
