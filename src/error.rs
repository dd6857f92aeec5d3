//! Error types for rcli

use std::io;
use thiserror::Error;

/// Result type alias for rcli operations
pub type Result<T> = std::result::Result<T, RcliError>;

/// Main error type for rcli
#[derive(Error, Debug)]
pub enum RcliError {
    /// Registration errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Exec handler errors
    #[error("Execution error: {0}")]
    Run(#[from] RunError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while declaring commands and options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Command name must not be empty")]
    EmptyCommandName,

    #[error("Option key must not be empty")]
    EmptyOptionKey,

    #[error("Only the last argument of command '{0}' may be variadic")]
    VariadicNotLast(String),

    #[error("Command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("Option '{key}' is declared more than once for {scope}")]
    DuplicateOption { key: String, scope: String },
}

/// Errors detected while resolving an invocation.
///
/// The display text of each variant is the diagnostic line printed by
/// [`App::run`](crate::registry::App::run).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unrecognized command '{0}'")]
    UnrecognizedCommand(String),

    #[error("{given} arguments given, but {command} needs '{pattern}'")]
    ArityMismatch {
        command: String,
        given: usize,
        pattern: String,
    },

    #[error("Unrecognized option {0}")]
    UnrecognizedOption(String),

    #[error("Option {0} does not take a value. Simply use -{0}")]
    OptionTakesNoValue(String),

    #[error("Option {key} needs a value. Use -{key}={placeholder}")]
    OptionRequiresValue { key: String, placeholder: String },

    #[error("No handler specified for command '{0}'")]
    NoHandler(String),

    #[error("Invalid registry: {0}")]
    InvalidRegistry(#[from] RegistryError),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors running an exec handler's shell command
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Interpreter must not be empty")]
    EmptyInterpreter,

    #[error("Failed to start '{program}': {error}")]
    Spawn { program: String, error: String },
}

/// Specialized result type for registration operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Specialized result type for dispatch operations
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for exec handlers
pub type RunResult<T> = std::result::Result<T, RunError>;
