//! Application definition files
//!
//! This module handles parsing of rcli.yml files, validation of their
//! structure, and building an [`App`](crate::registry::App) from them.

pub mod build;
pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use build::*;
pub use parse::*;
pub use schema::*;
pub use types::*;
