//! Note façade service.
//!
//! # Responsibility
//! - Load the note sequence once at construction.
//! - Apply store operations and persist the full sequence after each one.
//! - Report persistence outcome without rolling back memory.
//!
//! # Invariants
//! - In-memory state is authoritative; a failed save never undoes a mutation.
//! - Every mutating call saves, including out-of-range no-ops.
//! - Load failures degrade to an empty store, never to an error state.

use crate::model::note::Note;
use crate::repo::note_repo::{NoteRepository, RepoError};
use crate::store::note_store;
use log::{debug, error, info};
use std::mem;

/// Persistence outcome of one mutating call.
///
/// The mutation itself has already been applied in memory either way.
#[derive(Debug)]
pub enum SaveStatus {
    /// Full sequence written to storage.
    Saved,
    /// Storage write failed; memory and disk have diverged.
    Failed(RepoError),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// Returns the save error, if any.
    pub fn error(&self) -> Option<&RepoError> {
        match self {
            Self::Saved => None,
            Self::Failed(err) => Some(err),
        }
    }
}

/// Application façade over one repository.
pub struct NoteService<R: NoteRepository> {
    repo: R,
    notes: Vec<Note>,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates the service and loads the persisted sequence.
    ///
    /// Missing or unreadable storage yields an empty sequence.
    pub fn open(repo: R) -> Self {
        let notes = repo.load();
        info!(
            "event=service_open module=service status=ok count={}",
            notes.len()
        );
        Self { repo, notes }
    }

    /// Creates the service around an explicit starting sequence. No load.
    pub fn with_notes(repo: R, notes: Vec<Note>) -> Self {
        Self { repo, notes }
    }

    /// Current ordered snapshot.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Appends a new note and persists.
    pub fn create_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> SaveStatus {
        let notes = mem::take(&mut self.notes);
        self.notes = note_store::create(notes, title, content);
        self.persist("note_create")
    }

    /// Removes the note at `index` and persists.
    pub fn delete_note(&mut self, index: i64) -> SaveStatus {
        self.apply_at("note_delete", index, note_store::delete)
    }

    /// Replaces the title of the note at `index` and persists.
    pub fn update_note_title(&mut self, index: i64, title: impl Into<String>) -> SaveStatus {
        let title = title.into();
        self.apply_at("note_update_title", index, |notes, position| {
            note_store::update_title(notes, position, title)
        })
    }

    /// Replaces the content of the note at `index` and persists.
    pub fn update_note_content(&mut self, index: i64, content: impl Into<String>) -> SaveStatus {
        let content = content.into();
        self.apply_at("note_update_content", index, |notes, position| {
            note_store::update_content(notes, position, content)
        })
    }

    fn apply_at(
        &mut self,
        event: &str,
        index: i64,
        op: impl FnOnce(Vec<Note>, usize) -> Vec<Note>,
    ) -> SaveStatus {
        match note_store::resolve_index(self.notes.len(), index) {
            Some(position) => {
                let notes = mem::take(&mut self.notes);
                self.notes = op(notes, position);
            }
            None => debug!(
                "event={} module=service status=ignored index={} len={}",
                event,
                index,
                self.notes.len()
            ),
        }
        self.persist(event)
    }

    fn persist(&self, event: &str) -> SaveStatus {
        match self.repo.save_notes(&self.notes) {
            Ok(()) => {
                debug!(
                    "event={} module=service status=ok count={}",
                    event,
                    self.notes.len()
                );
                SaveStatus::Saved
            }
            Err(err) => {
                error!(
                    "event={} module=service status=save_failed count={} error={}",
                    event,
                    self.notes.len(),
                    err
                );
                SaveStatus::Failed(err)
            }
        }
    }
}
