//! Exec handlers
//!
//! This module runs the shell commands attached to commands declared in an
//! application definition file.

pub mod command;
pub mod context;
pub mod interpolate;

// Re-export main types
pub use command::*;
pub use context::*;
pub use interpolate::*;
