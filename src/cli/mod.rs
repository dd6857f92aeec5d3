//! The rcli binary front-end
//!
//! This module loads an application definition and dispatches the process
//! arguments against it.

pub mod app;

// Re-export main types
pub use app::*;
