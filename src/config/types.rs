//! Application definition types
//!
//! This module defines the data structures that represent an rcli.yml file.

use serde::{Deserialize, Serialize};

/// Top-level application definition
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Help banner
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Interpreter for exec commands (e.g., ["sh", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,

    /// Reject duplicate command names and option keys
    #[serde(default)]
    pub strict: bool,

    /// Global options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionConfig>,

    /// Commands, in help listing order
    #[serde(default)]
    pub commands: Vec<CommandConfig>,
}

/// A command definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandConfig {
    pub name: String,

    /// First line is the summary; the rest shows in command help
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Positional arguments; the last may be written `...name`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Command-specific options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionConfig>,

    /// Shell command run on invocation, with `${name}` interpolation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec: Option<String>,
}

/// An option definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionConfig {
    pub key: String,

    /// Value placeholder; omitted for boolean options
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}
