//! Note repository contract and error type.

use crate::model::note::Note;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure for whole-collection load/save.
#[derive(Debug)]
pub enum RepoError {
    /// File could not be opened, read, created or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File exists but is not a JSON array of notes.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// In-memory notes could not be encoded.
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "notes file `{}`: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "malformed notes file `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to encode notes: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Whole-collection storage for the ordered note sequence.
pub trait NoteRepository {
    /// Reads the persisted sequence. A missing store yields `Ok(vec![])`.
    fn load_notes(&self) -> RepoResult<Vec<Note>>;
    /// Overwrites the persisted sequence with `notes`, order preserved.
    fn save_notes(&self, notes: &[Note]) -> RepoResult<()>;

    /// Loads notes, degrading any failure to an empty sequence.
    ///
    /// Missing and corrupt stores are indistinguishable to the caller; the
    /// distinction only shows up in the log.
    fn load(&self) -> Vec<Note> {
        self.load_notes().unwrap_or_else(|err| {
            warn!("event=notes_load module=repo status=degraded error={}", err);
            Vec::new()
        })
    }
}
