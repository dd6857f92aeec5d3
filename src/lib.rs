//! rcli - A declarative command registry and argument parser
//!
//! Register commands with positional arguments and options, then hand the
//! process arguments to [`App::run`] to validate them and dispatch to a
//! handler, or to print generated help.

// Public modules
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod registry;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use dispatch::{OptionSet, Outcome};
pub use error::{DispatchError, RcliError, Result};
pub use registry::{App, ArgSpec, Command, CommandOption};

/// Current version of rcli
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
