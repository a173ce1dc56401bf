//! Note domain model.
//!
//! # Responsibility
//! - Define the title/content/timestamp record persisted to disk.
//! - Keep `last_updated` refresh rules in one place.
//!
//! # Invariants
//! - `last_updated` is stamped on creation and on every title/content edit.
//! - Deserialization restores the persisted stamp verbatim; reads never touch it.
//! - Missing keys in a persisted element load as empty text and the Unix
//!   epoch, so one incomplete element never invalidates the whole file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One short text note.
///
/// Field names double as the on-disk JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Free text; may be empty and need not be unique.
    #[serde(default)]
    pub title: String,
    /// Free text body.
    #[serde(default)]
    pub content: String,
    /// Time of creation or of the latest title/content edit.
    #[serde(default)]
    pub last_updated: DateTime<Utc>,
}

impl Note {
    /// Creates a note stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            last_updated: Utc::now(),
        }
    }

    /// Replaces the title and refreshes `last_updated`.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    /// Replaces the content and refreshes `last_updated`.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::Note;
    use chrono::{DateTime, Duration, Utc};

    #[test]
    fn set_title_keeps_content_and_refreshes_stamp() {
        let mut note = Note::new("draft", "body");
        note.last_updated = note.last_updated - Duration::seconds(60);
        let stale = note.last_updated;

        note.set_title("final");

        assert_eq!(note.title, "final");
        assert_eq!(note.content, "body");
        assert!(note.last_updated > stale);
    }

    #[test]
    fn missing_keys_deserialize_to_defaults() {
        let note: Note = serde_json::from_str(r#"{"content":"body only"}"#).unwrap();
        assert_eq!(note.title, "");
        assert_eq!(note.content, "body only");
        assert_eq!(note.last_updated, DateTime::<Utc>::default());
        assert_eq!(note.last_updated.timestamp(), 0);
    }

    #[test]
    fn new_note_is_stamped_with_now() {
        let before = Utc::now();
        let note = Note::new("", "");
        assert!(note.last_updated >= before);
        assert!(note.last_updated <= Utc::now());
    }
}
