//! Session-scoped storage boundary for the answer sheet.
//!
//! The sheet lives in a single slot in serialized form; load and save are the
//! only way state crosses between operations.

use crate::answer::AnswerSheet;
use crate::error::QuizResult;

/// Where the serialized answer sheet lives between operations.
///
/// `load` returns `None` when nothing has been saved or the slot was cleared.
/// It never invents an empty sheet — callers decide what absence means.
pub trait SessionStore {
    /// Read the stored sheet, if any.
    fn load(&self) -> QuizResult<Option<AnswerSheet>>;

    /// Write the sheet, replacing any previous value.
    fn save(&mut self, sheet: &AnswerSheet) -> QuizResult<()>;

    /// Delete the stored sheet.
    fn clear(&mut self);
}

/// An in-memory store holding one serialized slot.
///
/// Scoped to the value's lifetime the way session storage is scoped to a
/// browsing session. The slot keeps the JSON string rather than the live
/// map, so every load goes through deserialization just as a page load would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// A store with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store currently holds a sheet.
    pub fn is_vacant(&self) -> bool {
        self.slot.is_none()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> QuizResult<Option<AnswerSheet>> {
        match &self.slot {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, sheet: &AnswerSheet) -> QuizResult<()> {
        self.slot = Some(serde_json::to_string(sheet)?);
        Ok(())
    }

    fn clear(&mut self) {
        self.slot = None;
    }
}
