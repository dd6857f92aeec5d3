//! The application registry

use crate::dispatch::OptionSet;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::command::{ArgSpec, Command, Handler};
use crate::registry::option::{find_option, CommandOption};
use crate::ui::Reporter;
use std::collections::HashSet;
use std::fmt;

/// Application: the set of commands plus global options
pub struct App {
    /// Single-line description shown as the help banner
    pub description: String,
    /// Handler used when a command does not declare its own
    default_handler: Option<Handler>,
    /// Commands in registration order
    commands: Vec<Command>,
    /// Global options
    options: Vec<CommandOption>,
    /// Reject duplicate declarations instead of first-match-wins
    strict: bool,
    pub(crate) reporter: Reporter,
}

impl App {
    /// Create an empty application
    pub fn new(description: &str) -> Self {
        App {
            description: description.to_string(),
            default_handler: None,
            commands: Vec::new(),
            options: Vec::new(),
            strict: false,
            reporter: Reporter::default(),
        }
    }

    /// Set the reporter used for dispatch diagnostics on stderr
    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Enable or disable strict duplicate checking
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        for command in &mut self.commands {
            command.set_strict(strict);
        }
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Set the handler used by commands without their own
    pub fn set_default_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&str, &[String], &OptionSet) -> i32 + 'static,
    {
        self.default_handler = Some(Box::new(handler));
        self
    }

    pub fn default_handler(&self) -> Option<&Handler> {
        self.default_handler.as_ref()
    }

    /// Register a command. A last argument written as `...name` is variadic.
    ///
    /// # Panics
    ///
    /// Panics if the registration is rejected (empty name, misplaced variadic
    /// argument, or a duplicate name in strict mode). Use
    /// [`App::try_add_command`] to handle these as errors.
    pub fn add_command(&mut self, name: &str, description: &str, args: &[&str]) -> &mut Command {
        let args = args.iter().map(|arg| ArgSpec::parse(arg)).collect();
        match self.try_add_command(name, description, args) {
            Ok(command) => command,
            Err(e) => panic!("invalid command registration: {}", e),
        }
    }

    /// Register a command with explicit argument declarations
    pub fn try_add_command(
        &mut self,
        name: &str,
        description: &str,
        args: Vec<ArgSpec>,
    ) -> RegistryResult<&mut Command> {
        let mut command = Command::new(name, description, args)?;
        command.set_strict(self.strict);
        if self.strict && self.find_command(name).is_some() {
            return Err(RegistryError::DuplicateCommand(name.to_string()));
        }

        self.commands.push(command);
        let last = self.commands.len() - 1;
        Ok(&mut self.commands[last])
    }

    /// Add an application-wide bool option (such as `-z`)
    pub fn add_bool_option(&mut self, key: &str, description: &str) -> &mut Self {
        self.options.push(CommandOption::bool(key, description));
        self
    }

    /// Add an application-wide value option (such as `-c=config_file`)
    pub fn add_value_option(&mut self, key: &str, placeholder: &str, description: &str) -> &mut Self {
        self.options.push(CommandOption::value(key, placeholder, description));
        self
    }

    /// Add a global bool option, rejecting an empty key. In strict mode a key
    /// already declared globally or on any command is rejected too.
    pub fn try_add_bool_option(&mut self, key: &str, description: &str) -> RegistryResult<&mut Self> {
        self.try_push_option(CommandOption::bool(key, description))
    }

    /// Add a global value option with the same checks as [`App::try_add_bool_option`]
    pub fn try_add_value_option(
        &mut self,
        key: &str,
        placeholder: &str,
        description: &str,
    ) -> RegistryResult<&mut Self> {
        self.try_push_option(CommandOption::value(key, placeholder, description))
    }

    fn try_push_option(&mut self, opt: CommandOption) -> RegistryResult<&mut Self> {
        if opt.key.is_empty() {
            return Err(RegistryError::EmptyOptionKey);
        }
        if self.strict {
            if find_option(&self.options, &opt.key).is_some() {
                return Err(RegistryError::DuplicateOption {
                    key: opt.key,
                    scope: "global options".to_string(),
                });
            }
            if let Some(command) = self
                .commands
                .iter()
                .find(|c| find_option(c.options(), &opt.key).is_some())
            {
                return Err(RegistryError::DuplicateOption {
                    key: opt.key,
                    scope: format!("command '{}'", command.name()),
                });
            }
        }
        self.options.push(opt);
        Ok(self)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Global options
    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    /// Find a command by exact name; the first registration wins
    pub fn find_command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Global options followed by the command's own options
    pub fn effective_options<'a>(&'a self, command: &'a Command) -> Vec<&'a CommandOption> {
        self.options.iter().chain(command.options()).collect()
    }

    /// Check for empty keys and duplicate declarations.
    ///
    /// Duplicate option keys are detected within the global scope and within
    /// each command combined with the global scope.
    pub fn validate(&self) -> RegistryResult<()> {
        check_options(self.options.iter(), "global options")?;

        let mut names = HashSet::new();
        for command in &self.commands {
            if !names.insert(command.name()) {
                return Err(RegistryError::DuplicateCommand(command.name().to_string()));
            }
            let scope = format!("command '{}'", command.name());
            check_options(self.effective_options(command), &scope)?;
        }

        Ok(())
    }
}

fn check_options<'a, I>(options: I, scope: &str) -> RegistryResult<()>
where
    I: IntoIterator<Item = &'a CommandOption>,
{
    let mut seen = HashSet::new();
    for opt in options {
        if opt.key.is_empty() {
            return Err(RegistryError::EmptyOptionKey);
        }
        if !seen.insert(opt.key.as_str()) {
            return Err(RegistryError::DuplicateOption {
                key: opt.key.clone(),
                scope: scope.to_string(),
            });
        }
    }
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("description", &self.description)
            .field("commands", &self.commands)
            .field("options", &self.options)
            .field("default_handler", &self.default_handler.is_some())
            .field("strict", &self.strict)
            .finish()
    }
}
