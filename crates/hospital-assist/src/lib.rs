//! Hospital Desk Assistant
//!
//! Keyword-routed question answering over the hospital store. A fixed,
//! ordered table of intents maps phrases like "how many patients" or
//! "pending bills" onto the store's typed aggregates; everything else gets
//! a help message listing what can be asked.
//!
//! There is no language model here. Matching is plain substring checks on
//! the lowercased input, which keeps answers deterministic and instant.

pub mod intents;

mod format;

pub use intents::{Assistant, HELP_TEXT};

use hospital_core::Database;

/// One user's chat session, remembering the last answer given.
#[derive(Debug, Default)]
pub struct AssistSession {
    last_response: Option<String>,
}

impl AssistSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` against `db` and remember the response.
    pub fn ask(&mut self, db: &Database, query: &str) -> &str {
        self.last_response.insert(Assistant::new(db).answer(query))
    }

    /// The answer from the most recent [`ask`](Self::ask), if any.
    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }
}
