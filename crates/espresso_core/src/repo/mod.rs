//! Persistence contracts and the JSON file implementation.
//!
//! # Responsibility
//! - Define the load/save boundary between the note service and disk.
//! - Keep file-format details out of service orchestration.
//!
//! # Invariants
//! - Saves always write the full sequence; there is no partial update path.
//! - A missing file is an empty collection, not an error.

pub mod json_file;
pub mod note_repo;
