//! Answer choices and the incrementally built answer sheet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the two options offered by every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    /// The first option.
    A,
    /// The second option.
    B,
}

impl Choice {
    /// Parse a choice from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// The answers recorded so far, keyed by question number.
///
/// Built one entry per navigation step. Recording the same question again
/// overwrites the earlier answer; every other entry is untouched. The JSON
/// form is an object mapping question-id strings to `"A"` / `"B"`, the shape
/// the sheet has in session storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<u8, Choice>,
}

impl AnswerSheet {
    /// An empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from answers in question order, starting at q1.
    pub fn from_sequence(choices: impl IntoIterator<Item = Choice>) -> Self {
        let mut sheet = Self::new();
        for (i, choice) in choices.into_iter().enumerate() {
            sheet.record(i as u8 + 1, choice);
        }
        sheet
    }

    /// Record an answer, overwriting any earlier answer to the same question.
    pub fn record(&mut self, question: u8, choice: Choice) {
        self.answers.insert(question, choice);
    }

    /// The recorded answer for a question.
    pub fn get(&self, question: u8) -> Option<Choice> {
        self.answers.get(&question).copied()
    }

    /// Number of recorded answers.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// All recorded `(question, choice)` pairs in question order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Choice)> + '_ {
        self.answers.iter().map(|(&q, &c)| (q, c))
    }
}
