//! Position-addressed transformations over `Vec<Note>`.
//!
//! # Responsibility
//! - Own the bounds policy shared by delete and update operations.
//! - Hand the resulting sequence back to the caller as the new source of truth.
//!
//! # Invariants
//! - `create` always appends exactly one note at the end.
//! - `delete` removes exactly one note and preserves the order of the rest.
//! - Positions outside `[0, len)` are silent no-ops, never errors.
//! - Positions are not stable: deleting `i` shifts every later note down by one.

use crate::model::note::Note;

/// Maps a caller-supplied signed index onto a valid position.
///
/// Returns `None` for negative indices and for indices `>= len`.
pub fn resolve_index(len: usize, index: i64) -> Option<usize> {
    usize::try_from(index).ok().filter(|position| *position < len)
}

/// Appends a new note stamped with the current time.
pub fn create(
    mut notes: Vec<Note>,
    title: impl Into<String>,
    content: impl Into<String>,
) -> Vec<Note> {
    notes.push(Note::new(title, content));
    notes
}

/// Removes the note at `index`; out of range returns `notes` unchanged.
pub fn delete(mut notes: Vec<Note>, index: usize) -> Vec<Note> {
    if index < notes.len() {
        notes.remove(index);
    }
    notes
}

/// Replaces the title of the note at `index`; out of range is a no-op.
pub fn update_title(mut notes: Vec<Note>, index: usize, title: impl Into<String>) -> Vec<Note> {
    if let Some(note) = notes.get_mut(index) {
        note.set_title(title);
    }
    notes
}

/// Replaces the content of the note at `index`; out of range is a no-op.
pub fn update_content(
    mut notes: Vec<Note>,
    index: usize,
    content: impl Into<String>,
) -> Vec<Note> {
    if let Some(note) = notes.get_mut(index) {
        note.set_content(content);
    }
    notes
}
