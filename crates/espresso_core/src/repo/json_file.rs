//! JSON file repository.
//!
//! # Responsibility
//! - Map the full note sequence to and from one pretty-printed JSON array.
//! - Resolve the on-disk location (default, env override, explicit path).
//!
//! # Invariants
//! - Files are written with two-space indentation and overwritten in full.
//! - File handles are scoped to a single load or save call.
//! - Log events carry counts and paths only, never note text.

use super::note_repo::{NoteRepository, RepoError, RepoResult};
use crate::model::note::Note;
use log::{debug, error, info};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Notes file location relative to the process working directory.
pub const DEFAULT_NOTES_PATH: &str = "notes/notes.json";
/// Environment variable that overrides [`DEFAULT_NOTES_PATH`].
pub const NOTES_PATH_ENV: &str = "ESPRESSO_NOTES_PATH";

/// Returns the notes file path, honouring `ESPRESSO_NOTES_PATH` when set.
pub fn resolve_notes_path() -> PathBuf {
    if let Ok(raw) = std::env::var(NOTES_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(DEFAULT_NOTES_PATH)
}

/// Repository persisting notes to a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileNoteRepository {
    path: PathBuf,
}

impl JsonFileNoteRepository {
    /// Creates a repository bound to `path`. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository bound to [`resolve_notes_path`].
    pub fn from_env() -> Self {
        Self::new(resolve_notes_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write_all(&self, notes: &[Note]) -> RepoResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let encoded = serde_json::to_string_pretty(notes)?;
        let file = File::create(&self.path).map_err(|err| self.io_error(err))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(encoded.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|err| self.io_error(err))
    }
}

impl NoteRepository for JsonFileNoteRepository {
    fn load_notes(&self) -> RepoResult<Vec<Note>> {
        let started_at = Instant::now();
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=notes_load module=repo status=missing path={}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let notes: Vec<Note> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| RepoError::Parse {
                path: self.path.clone(),
                source,
            })?;

        info!(
            "event=notes_load module=repo status=ok path={} count={} duration_ms={}",
            self.path.display(),
            notes.len(),
            started_at.elapsed().as_millis()
        );
        Ok(notes)
    }

    fn save_notes(&self, notes: &[Note]) -> RepoResult<()> {
        let started_at = Instant::now();
        match self.write_all(notes) {
            Ok(()) => {
                debug!(
                    "event=notes_save module=repo status=ok path={} count={} duration_ms={}",
                    self.path.display(),
                    notes.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=notes_save module=repo status=error path={} count={} duration_ms={} error={}",
                    self.path.display(),
                    notes.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
