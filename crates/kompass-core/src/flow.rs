//! Quiz flow: recording, scoring, and restart operations.
//!
//! [`QuizFlow`] owns the session store and walks one quiz instance through
//! `Empty → Collecting → Scored → Empty`. Every operation runs to completion
//! and hands the next destination back to the caller; the only state carried
//! between operations is the sheet in the store.

use crate::answer::Choice;
use crate::error::{QuizError, QuizResult};
use crate::page::Page;
use crate::score::{ScoreReport, score};
use crate::store::SessionStore;

/// Number of questions in the fixed set.
pub const QUESTION_COUNT: u8 = 12;

/// One quiz instance bound to a session store.
pub struct QuizFlow<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> QuizFlow<S> {
    /// Bind a flow to a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record one answer and return the next destination.
    ///
    /// Loads the sheet (empty if absent), overwrites the entry for
    /// `question` and saves the sheet back. Questions before the last
    /// advance to the next question page; the last advances to scoring.
    /// Question ids are taken as given and not range-checked.
    pub fn record_and_advance(&mut self, question: u8, choice: Choice) -> QuizResult<Page> {
        let mut sheet = self.store.load()?.unwrap_or_default();
        sheet.record(question, choice);
        self.store.save(&sheet)?;

        if question < QUESTION_COUNT {
            Ok(Page::Question(question + 1))
        } else {
            Ok(Page::Scoring)
        }
    }

    /// Score the stored sheet and return the report with its destination.
    ///
    /// Fails with [`QuizError::MissingAnswers`] when nothing is stored; the
    /// caller owns the user-facing message and the redirect to
    /// [`Page::Start`]. On success the sheet is cleared before the
    /// destination is returned, so a second call without fresh answers takes
    /// the missing-answers path.
    pub fn score_and_redirect(&mut self) -> QuizResult<(ScoreReport, Page)> {
        let sheet = self.store.load()?.ok_or(QuizError::MissingAnswers)?;

        let report = score(&sheet);
        let destination = report.destination();

        self.store.clear();
        Ok((report, destination))
    }

    /// Clear any stored answers and return to the first question.
    pub fn restart(&mut self) -> Page {
        self.store.clear();
        Page::Question(1)
    }
}
