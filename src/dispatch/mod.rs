//! Argument parsing and dispatch
//!
//! This module turns a raw argument vector into a parsed invocation,
//! validates it against the registry, and either renders help or invokes
//! the resolved handler.

pub mod dispatcher;
pub mod tokenize;

// Re-export main types
pub use dispatcher::*;
pub use tokenize::*;
