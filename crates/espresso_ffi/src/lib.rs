//! Flutter-facing bridge over `espresso_core`.

pub mod api;
