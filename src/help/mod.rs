//! Help text generation
//!
//! Renders application-level and command-level usage text, with word-wrapped
//! descriptions and column-aligned option listings.

pub mod render;
pub mod wrap;

// Re-export main types
pub use render::*;
pub use wrap::*;
