//! Terminal reporting
//!
//! Diagnostics written to stderr, gated by a verbosity level.

pub mod reporter;

pub use reporter::*;
