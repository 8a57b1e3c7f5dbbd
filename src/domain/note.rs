use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single saved note.
///
/// `id` is unique and creation-ordered within a process lifetime;
/// `created_at` never changes once the note exists. The title of a
/// persisted note is always non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Short date label for list rows.
    pub fn created_at_label(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}
