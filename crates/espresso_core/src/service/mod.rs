//! Core use-case services.
//!
//! # Responsibility
//! - Own the authoritative in-memory notes and pair every mutation with a save.
//! - Keep GUI/FFI callers decoupled from file-format details.

pub mod note_service;
