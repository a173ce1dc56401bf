//! Domain model for the notes collection.
//!
//! # Responsibility
//! - Define the note record shared by store, persistence and callers.
//!
//! # Invariants
//! - A note carries no identity of its own; callers address it by position.

pub mod note;
