//! Core domain logic for Espresso notes.
//! This crate is the single source of truth for note invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::Note;
pub use repo::json_file::{
    resolve_notes_path, JsonFileNoteRepository, DEFAULT_NOTES_PATH, NOTES_PATH_ENV,
};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult};
pub use service::note_service::{NoteService, SaveStatus};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
