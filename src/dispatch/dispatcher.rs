//! Command resolution, validation and handler invocation

use crate::dispatch::tokenize::{tokenize, ParsedInvocation};
use crate::error::{DispatchError, DispatchResult};
use crate::help::{format_arg_pattern, write_help};
use crate::registry::{find_option, App, Command};
use std::io::{self, Write};

/// Exit code returned for every failure detected by the dispatcher
pub const EXIT_FAILURE: i32 = 1;

/// What a successful dispatch did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Help text was written; no handler ran
    Help,
    /// A handler ran and returned this status
    Handled(i32),
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Help => 0,
            Outcome::Handled(code) => code,
        }
    }
}

impl App {
    /// Parse `argv`, validate it and invoke the resolved handler, printing
    /// help or diagnostics to standard output. Returns the exit code.
    pub fn run<S: AsRef<str>>(&self, argv: &[S]) -> i32 {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(argv, &mut out)
    }

    /// Like [`App::run`], writing to `out`
    pub fn run_with_output<S: AsRef<str>>(&self, argv: &[S], out: &mut dyn Write) -> i32 {
        match self.dispatch(argv, out) {
            Ok(outcome) => outcome.exit_code(),
            Err(e) => {
                if let Err(io_err) = writeln!(out, "{}", e) {
                    self.reporter.print_error(&format!("Failed to write output: {}", io_err));
                }
                EXIT_FAILURE
            }
        }
    }

    /// Parse and dispatch `argv`. Help is written to `out`; errors are returned
    /// without being printed.
    pub fn dispatch<S: AsRef<str>>(&self, argv: &[S], out: &mut dyn Write) -> DispatchResult<Outcome> {
        let parsed = tokenize(argv);
        self.reporter.print_debug(&format!(
            "Parsed command '{}' with args {:?} and options {:?}",
            parsed.command, parsed.args, parsed.options
        ));

        if parsed.wants_help() {
            let topic = parsed.help_topic();
            self.reporter.print_debug(&format!("Showing help for '{}'", topic));
            if let Err(e) = write_help(self, topic, out) {
                self.reporter.print_error(&format!("Failed to write help: {}", e));
            }
            return Ok(Outcome::Help);
        }

        // Help stays reachable even when the registry has collisions
        if self.is_strict() {
            self.validate()?;
        }

        let command = self.resolve(&parsed)?;
        let handler = command
            .handler()
            .or_else(|| self.default_handler())
            .ok_or_else(|| DispatchError::NoHandler(parsed.command.clone()))?;

        self.reporter
            .print_debug(&format!("Invoking handler for '{}'", command.name()));
        let code = handler(parsed.command.as_str(), parsed.args.as_slice(), &parsed.options);
        Ok(Outcome::Handled(code))
    }

    /// Find the command and check its arity and the supplied options
    fn resolve(&self, parsed: &ParsedInvocation) -> DispatchResult<&Command> {
        let command = self
            .find_command(&parsed.command)
            .ok_or_else(|| DispatchError::UnrecognizedCommand(parsed.command.clone()))?;

        if !command.accepts_arg_count(parsed.args.len()) {
            return Err(DispatchError::ArityMismatch {
                command: parsed.command.clone(),
                given: parsed.args.len(),
                pattern: format_arg_pattern(command.args()),
            });
        }

        let effective = self.effective_options(command);
        for (key, value) in &parsed.options {
            let opt = find_option(effective.iter().copied(), key)
                .ok_or_else(|| DispatchError::UnrecognizedOption(key.clone()))?;
            opt.check_value(value)?;
        }

        Ok(command)
    }
}
