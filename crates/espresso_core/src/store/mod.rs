//! In-memory note store operations.
//!
//! # Responsibility
//! - Apply create/delete/update transformations to an ordered note sequence.
//!
//! # Invariants
//! - Operations are pure: no I/O, no shared state.
//! - Out-of-range positions leave the sequence untouched.

pub mod note_store;
