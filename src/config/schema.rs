//! Definition validation

use crate::config::types::{AppConfig, CommandConfig, OptionConfig};
use crate::dispatch::HELP_KEYWORD;
use crate::error::{ConfigError, ConfigResult, RegistryError};
use crate::registry::VARIADIC_PREFIX;
use std::collections::HashSet;

/// Validate a complete definition
pub fn validate_config(config: &AppConfig) -> ConfigResult<()> {
    if let Some(interpreter) = &config.interpreter {
        if interpreter.is_empty() {
            return Err(ConfigError::Invalid("interpreter must not be empty".to_string()));
        }
    }

    validate_options(&config.options, "global options", config.strict)?;

    let mut names = HashSet::new();
    for command in &config.commands {
        validate_command(command, config)?;
        if !names.insert(command.name.as_str()) && config.strict {
            return Err(RegistryError::DuplicateCommand(command.name.clone()).into());
        }
    }

    Ok(())
}

/// Validate a single command
pub fn validate_command(command: &CommandConfig, config: &AppConfig) -> ConfigResult<()> {
    if command.name.is_empty() {
        return Err(RegistryError::EmptyCommandName.into());
    }
    if command.name == HELP_KEYWORD {
        return Err(reserved("a command"));
    }

    if let Some((_, leading)) = command.args.split_last() {
        if leading.iter().any(|arg| arg.starts_with(VARIADIC_PREFIX)) {
            return Err(RegistryError::VariadicNotLast(command.name.clone()).into());
        }
    }
    if command
        .args
        .iter()
        .any(|arg| arg.strip_prefix(VARIADIC_PREFIX).unwrap_or(arg).is_empty())
    {
        return Err(ConfigError::Invalid(format!(
            "command '{}' has an unnamed argument",
            command.name
        )));
    }

    let scope = format!("command '{}'", command.name);
    validate_options(&command.options, &scope, config.strict)?;

    if config.strict {
        let global: HashSet<&str> = config.options.iter().map(|o| o.key.as_str()).collect();
        if let Some(opt) = command.options.iter().find(|o| global.contains(o.key.as_str())) {
            return Err(RegistryError::DuplicateOption {
                key: opt.key.clone(),
                scope,
            }
            .into());
        }
    }

    Ok(())
}

fn validate_options(options: &[OptionConfig], scope: &str, strict: bool) -> ConfigResult<()> {
    let mut seen = HashSet::new();
    for opt in options {
        if opt.key.is_empty() {
            return Err(RegistryError::EmptyOptionKey.into());
        }
        if opt.key == HELP_KEYWORD {
            return Err(reserved("an option"));
        }
        if !seen.insert(opt.key.as_str()) && strict {
            return Err(RegistryError::DuplicateOption {
                key: opt.key.clone(),
                scope: scope.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

fn reserved(what: &str) -> ConfigError {
    ConfigError::Invalid(format!(
        "'{}' is reserved and cannot be used as {} name",
        HELP_KEYWORD, what
    ))
}
