//! Type-safe wrappers for NBA stats API parameters.

pub mod time;
