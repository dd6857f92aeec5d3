//! Command declarations

use crate::dispatch::OptionSet;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::option::{find_option, CommandOption};
use std::fmt;

/// Prefix that marks the last declared argument as variadic in string form
pub const VARIADIC_PREFIX: &str = "...";

/// Callback invoked for a resolved command.
///
/// Receives the command name, the positional arguments and the supplied
/// options, and returns the exit status (0 for success).
pub type Handler = Box<dyn Fn(&str, &[String], &OptionSet) -> i32>;

/// A declared positional argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgSpec {
    /// Exactly one token
    Fixed(String),
    /// Zero or more trailing tokens; only valid as the last argument
    Variadic(String),
}

impl ArgSpec {
    /// Parse the string convention, where a leading `...` marks a variadic argument
    pub fn parse(decl: &str) -> Self {
        match decl.strip_prefix(VARIADIC_PREFIX) {
            Some(name) => ArgSpec::Variadic(name.to_string()),
            None => ArgSpec::Fixed(decl.to_string()),
        }
    }

    /// Name without any variadic marker
    pub fn name(&self) -> &str {
        match self {
            ArgSpec::Fixed(name) | ArgSpec::Variadic(name) => name,
        }
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self, ArgSpec::Variadic(_))
    }
}

impl From<&str> for ArgSpec {
    fn from(decl: &str) -> Self {
        ArgSpec::parse(decl)
    }
}

/// A top-level command
pub struct Command {
    name: String,
    description: String,
    args: Vec<ArgSpec>,
    options: Vec<CommandOption>,
    handler: Option<Handler>,
    strict: bool,
}

impl Command {
    /// Create a command, checking the name and the variadic placement
    pub fn new(name: &str, description: &str, args: Vec<ArgSpec>) -> RegistryResult<Self> {
        if name.is_empty() {
            return Err(RegistryError::EmptyCommandName);
        }
        if let Some((_, leading)) = args.split_last() {
            if leading.iter().any(ArgSpec::is_variadic) {
                return Err(RegistryError::VariadicNotLast(name.to_string()));
            }
        }

        Ok(Command {
            name: name.to_string(),
            description: description.to_string(),
            args,
            options: Vec::new(),
            handler: None,
            strict: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }

    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    pub fn handler(&self) -> Option<&Handler> {
        self.handler.as_ref()
    }

    /// The contents of the description before the first newline
    pub fn short_description(&self) -> &str {
        self.description
            .split_once('\n')
            .map_or(self.description.as_str(), |(short, _)| short)
    }

    /// The contents of the description after the first newline
    pub fn extra_description(&self) -> &str {
        self.description
            .split_once('\n')
            .map_or("", |(_, extra)| extra)
    }

    /// Add a command-specific bool option (such as `-z`)
    pub fn add_bool_option(&mut self, key: &str, description: &str) -> &mut Self {
        self.options.push(CommandOption::bool(key, description));
        self
    }

    /// Add a command-specific value option (such as `-c=config_file`)
    pub fn add_value_option(&mut self, key: &str, placeholder: &str, description: &str) -> &mut Self {
        self.options.push(CommandOption::value(key, placeholder, description));
        self
    }

    /// Add a bool option, rejecting an empty key, or a key already declared
    /// on this command when the owning app is strict
    pub fn try_add_bool_option(&mut self, key: &str, description: &str) -> RegistryResult<&mut Self> {
        self.try_push_option(CommandOption::bool(key, description))
    }

    /// Add a value option with the same checks as [`Command::try_add_bool_option`]
    pub fn try_add_value_option(
        &mut self,
        key: &str,
        placeholder: &str,
        description: &str,
    ) -> RegistryResult<&mut Self> {
        self.try_push_option(CommandOption::value(key, placeholder, description))
    }

    fn try_push_option(&mut self, opt: CommandOption) -> RegistryResult<&mut Self> {
        check_new_option(&opt.key, self.strict.then_some(self.options.as_slice()), &self.name)?;
        self.options.push(opt);
        Ok(self)
    }

    pub(crate) fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Set the handler; without one the application's default handler is used
    pub fn set_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&str, &[String], &OptionSet) -> i32 + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn is_variadic(&self) -> bool {
        self.args.last().is_some_and(ArgSpec::is_variadic)
    }

    /// Whether `given` positional arguments satisfy the declared arity
    pub fn accepts_arg_count(&self, given: usize) -> bool {
        if self.is_variadic() {
            given >= self.args.len() - 1
        } else {
            given == self.args.len()
        }
    }

}

/// Reject an empty key, or a key already present in `existing`
pub(crate) fn check_new_option(
    key: &str,
    existing: Option<&[CommandOption]>,
    owner: &str,
) -> RegistryResult<()> {
    if key.is_empty() {
        return Err(RegistryError::EmptyOptionKey);
    }
    if let Some(options) = existing {
        if find_option(options, key).is_some() {
            return Err(RegistryError::DuplicateOption {
                key: key.to_string(),
                scope: format!("command '{}'", owner),
            });
        }
    }
    Ok(())
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("args", &self.args)
            .field("options", &self.options)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Command {
        Command::new("cmd", "Short\nExtra line", args.iter().map(|a| ArgSpec::parse(a)).collect())
            .unwrap()
    }

    #[test]
    fn test_arg_spec_parse() {
        assert_eq!(ArgSpec::parse("port"), ArgSpec::Fixed("port".to_string()));
        assert_eq!(
            ArgSpec::parse("...things"),
            ArgSpec::Variadic("things".to_string())
        );
        assert_eq!(ArgSpec::parse("...things").name(), "things");
    }

    #[test]
    fn test_descriptions() {
        let cmd = command(&[]);
        assert_eq!(cmd.short_description(), "Short");
        assert_eq!(cmd.extra_description(), "Extra line");

        let single = Command::new("x", "Only one line", vec![]).unwrap();
        assert_eq!(single.short_description(), "Only one line");
        assert_eq!(single.extra_description(), "");
    }

    #[test]
    fn test_exact_arity() {
        let cmd = command(&["port", "root-directory"]);
        assert!(!cmd.is_variadic());
        assert!(cmd.accepts_arg_count(2));
        assert!(!cmd.accepts_arg_count(1));
        assert!(!cmd.accepts_arg_count(3));
    }

    #[test]
    fn test_variadic_arity() {
        let cmd = command(&["a", "...items"]);
        assert!(cmd.is_variadic());
        assert!(!cmd.accepts_arg_count(0));
        assert!(cmd.accepts_arg_count(1));
        assert!(cmd.accepts_arg_count(2));
        assert!(cmd.accepts_arg_count(10));
    }

    #[test]
    fn test_rejects_bad_declarations() {
        assert_eq!(
            Command::new("", "", vec![]).unwrap_err(),
            RegistryError::EmptyCommandName
        );
        let args = vec![ArgSpec::parse("...rest"), ArgSpec::parse("last")];
        assert_eq!(
            Command::new("cmd", "", args).unwrap_err(),
            RegistryError::VariadicNotLast("cmd".to_string())
        );
    }

    #[test]
    fn test_add_options() {
        let mut cmd = command(&["root-directory"]);
        cmd.add_bool_option("clean", "Clean all files")
            .add_value_option("strength", "howstrong", "Strong values clean more files");
        assert_eq!(cmd.options().len(), 2);
        assert!(find_option(cmd.options(), "clean").unwrap().is_bool());
        assert_eq!(
            find_option(cmd.options(), "strength").unwrap().placeholder(),
            Some("howstrong")
        );
    }

    #[test]
    fn test_try_add_option_checks() {
        let mut cmd = command(&[]);
        assert_eq!(
            cmd.try_add_bool_option("", "Nothing").unwrap_err(),
            RegistryError::EmptyOptionKey
        );

        cmd.try_add_bool_option("clean", "First").unwrap();
        cmd.try_add_value_option("clean", "v", "Second").unwrap();
        assert_eq!(cmd.options().len(), 2);

        let mut strict = command(&[]);
        strict.set_strict(true);
        strict.try_add_bool_option("clean", "First").unwrap();
        assert!(matches!(
            strict.try_add_value_option("clean", "v", "Second"),
            Err(RegistryError::DuplicateOption { .. })
        ));
        assert_eq!(strict.options().len(), 1);
    }
}
