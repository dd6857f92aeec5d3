//! Option declarations

use crate::error::{DispatchError, DispatchResult};

/// Whether an option is a presence-only switch or carries a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// Entered as `-key`
    Bool,
    /// Entered as `-key=value`; holds the placeholder shown in help
    Value(String),
}

/// A named option, either on a command or application-wide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub key: String,
    pub kind: OptionKind,
    pub description: String,
}

impl CommandOption {
    /// Create a boolean option
    pub fn bool(key: &str, description: &str) -> Self {
        CommandOption {
            key: key.to_string(),
            kind: OptionKind::Bool,
            description: description.to_string(),
        }
    }

    /// Create a value option. An empty placeholder declares a boolean option.
    pub fn value(key: &str, placeholder: &str, description: &str) -> Self {
        if placeholder.is_empty() {
            return Self::bool(key, description);
        }
        CommandOption {
            key: key.to_string(),
            kind: OptionKind::Value(placeholder.to_string()),
            description: description.to_string(),
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.kind, OptionKind::Bool)
    }

    /// The value placeholder, if this option carries a value
    pub fn placeholder(&self) -> Option<&str> {
        match &self.kind {
            OptionKind::Bool => None,
            OptionKind::Value(placeholder) => Some(placeholder),
        }
    }

    /// Key as listed in help: `key` or `key=placeholder`
    pub fn display_key(&self) -> String {
        match &self.kind {
            OptionKind::Bool => self.key.clone(),
            OptionKind::Value(placeholder) => format!("{}={}", self.key, placeholder),
        }
    }

    /// Check a supplied value against this option's cardinality
    pub fn check_value(&self, value: &str) -> DispatchResult<()> {
        match &self.kind {
            OptionKind::Bool if !value.is_empty() => {
                Err(DispatchError::OptionTakesNoValue(self.key.clone()))
            }
            OptionKind::Value(placeholder) if value.is_empty() => {
                Err(DispatchError::OptionRequiresValue {
                    key: self.key.clone(),
                    placeholder: placeholder.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// First option in `options` with the given key
pub fn find_option<'a, I>(options: I, key: &str) -> Option<&'a CommandOption>
where
    I: IntoIterator<Item = &'a CommandOption>,
{
    options.into_iter().find(|opt| opt.key == key)
}
