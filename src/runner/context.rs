//! Execution context for exec templates

use crate::dispatch::OptionSet;
use crate::registry::ArgSpec;
use crate::ui::Reporter;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Settings shared by every exec handler of an application
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory for spawned commands
    pub working_dir: PathBuf,

    /// Interpreter the exec string is passed to (e.g., ["sh", "-c"])
    pub interpreter: Vec<String>,

    pub reporter: Reporter,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            interpreter: vec!["sh".to_string(), "-c".to_string()],
            reporter: Reporter::default(),
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

/// Variables available to an exec template for one invocation.
///
/// Each fixed argument binds its declared name; a variadic argument binds
/// the remaining values joined by spaces. Supplied options bind their value,
/// or `true` for boolean options.
pub fn invocation_vars(
    declared: &[ArgSpec],
    args: &[String],
    options: &OptionSet,
) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for (i, spec) in declared.iter().enumerate() {
        match spec {
            ArgSpec::Fixed(name) => {
                if let Some(value) = args.get(i) {
                    vars.insert(name.clone(), value.clone());
                }
            }
            ArgSpec::Variadic(name) => {
                let rest = args.get(i..).unwrap_or_default();
                vars.insert(name.clone(), rest.join(" "));
            }
        }
    }

    for (key, value) in options {
        let value = if value.is_empty() { "true" } else { value.as_str() };
        vars.insert(key.clone(), value.to_string());
    }

    vars
}
