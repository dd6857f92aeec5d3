//! Command registry
//!
//! This module holds the declared commands, their positional arguments and
//! options, and the application-wide global options.

pub mod app;
pub mod command;
pub mod option;

// Re-export main types
pub use app::*;
pub use command::*;
pub use option::*;
