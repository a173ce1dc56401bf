//! FFI use-case API for GUI-facing calls.
//!
//! # Responsibility
//! - Own the single process-wide note service used by the GUI.
//! - Expose the note façade as sync, non-panicking functions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The store binds to one notes file per process; rebinding is rejected.
//! - Out-of-range indices are silent no-ops, matching core semantics.

use espresso_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, JsonFileNoteRepository,
    Note, NoteService, SaveStatus,
};
use log::info;
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

type SharedService = Mutex<NoteService<JsonFileNoteRepository>>;

static NOTE_SERVICE: OnceLock<SharedService> = OnceLock::new();

/// Note projection handed to the GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub title: String,
    pub content: String,
    /// RFC3339 timestamp of the last title/content change.
    pub last_updated: String,
}

/// Result envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// `true` when the change reached disk. Memory is updated regardless.
    pub ok: bool,
    /// Human-readable outcome for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn from_status(action: &str, status: SaveStatus) -> Self {
        match status {
            SaveStatus::Saved => Self {
                ok: true,
                message: format!("{action}: saved."),
            },
            SaveStatus::Failed(err) => Self {
                ok: false,
                message: format!("{action}: not saved: {err}"),
            },
        }
    }
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Binds the process-wide note store to `notes_path` and loads it.
///
/// An empty `notes_path` binds to the default location.
///
/// # FFI contract
/// - Sync call; reads the notes file once.
/// - Idempotent for the same path; a different path returns an error message.
/// - Paths are compared lexically: `./` prefixes, repeated separators and
///   trailing separators are ignored; `..` and symlinks are not resolved.
/// - Returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_notes(notes_path: String) -> String {
    let trimmed = notes_path.trim();
    let requested = if trimmed.is_empty() {
        JsonFileNoteRepository::from_env()
    } else {
        JsonFileNoteRepository::new(trimmed)
    };

    let service = NOTE_SERVICE.get_or_init(|| open_service(requested.clone()));
    let guard = lock(service);
    let bound = guard.repository().path();
    let requested = requested.path();
    if same_store_path(bound, requested) {
        String::new()
    } else {
        format!(
            "notes store already bound to `{}`; refusing to switch to `{}`",
            bound.display(),
            requested.display()
        )
    }
}

/// Appends a note.
///
/// # FFI contract
/// - Sync call, file-backed.
/// - `ok=false` only when the save failed; the note is still in memory.
#[flutter_rust_bridge::frb(sync)]
pub fn create_note(title: String, content: String) -> NoteActionResponse {
    let status = lock(service()).create_note(title, content);
    NoteActionResponse::from_status("create_note", status)
}

/// Deletes the note at `index`; later notes shift down by one.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_note(index: i64) -> NoteActionResponse {
    let status = lock(service()).delete_note(index);
    NoteActionResponse::from_status("delete_note", status)
}

/// Replaces the title of the note at `index`.
#[flutter_rust_bridge::frb(sync)]
pub fn update_note_title(index: i64, new_title: String) -> NoteActionResponse {
    let status = lock(service()).update_note_title(index, new_title);
    NoteActionResponse::from_status("update_note_title", status)
}

/// Replaces the content of the note at `index`.
#[flutter_rust_bridge::frb(sync)]
pub fn update_note_content(index: i64, new_content: String) -> NoteActionResponse {
    let status = lock(service()).update_note_content(index, new_content);
    NoteActionResponse::from_status("update_note_content", status)
}

/// Returns the current ordered notes.
///
/// # FFI contract
/// - Sync call, memory only.
/// - Positions in the returned list are the indices mutating calls expect.
#[flutter_rust_bridge::frb(sync)]
pub fn get_notes() -> Vec<NoteItem> {
    lock(service()).notes().iter().map(to_note_item).collect()
}

fn service() -> &'static SharedService {
    NOTE_SERVICE.get_or_init(|| open_service(JsonFileNoteRepository::from_env()))
}

fn open_service(repo: JsonFileNoteRepository) -> SharedService {
    info!(
        "event=ffi_store_bind module=ffi status=ok path={}",
        repo.path().display()
    );
    Mutex::new(NoteService::open(repo))
}

fn same_store_path(bound: &Path, requested: &Path) -> bool {
    lexical(bound) == lexical(requested)
}

fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

// Poisoned state is still a complete note vector.
fn lock(service: &SharedService) -> MutexGuard<'_, NoteService<JsonFileNoteRepository>> {
    service
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_note_item(note: &Note) -> NoteItem {
    NoteItem {
        title: note.title.clone(),
        content: note.content.clone(),
        last_updated: note.last_updated.to_rfc3339(),
    }
}
