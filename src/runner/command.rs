//! Command execution
//!
//! This module runs the shell command declared for a command in the
//! application definition.

use crate::dispatch::OptionSet;
use crate::error::{RunError, RunResult};
use crate::registry::ArgSpec;
use crate::runner::{interpolate, invocation_vars, Context};
use std::collections::HashMap;
use std::process::{Command as StdCommand, Stdio};

/// Execute an exec template with the given variables
pub fn execute(exec: &str, vars: &HashMap<String, String>, ctx: &Context) -> RunResult<i32> {
    let exec_str = interpolate(exec, vars);
    ctx.reporter.print_debug(&format!("Running: {}", exec_str));

    let (program, interpreter_args) = ctx
        .interpreter
        .split_first()
        .ok_or(RunError::EmptyInterpreter)?;

    let mut command = StdCommand::new(program);
    command.args(interpreter_args);
    command.arg(&exec_str);
    command.current_dir(&ctx.working_dir);

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = command.status().map_err(|e| RunError::Spawn {
        program: program.clone(),
        error: e.to_string(),
    })?;

    // Killed by a signal
    Ok(status.code().unwrap_or(1))
}

/// Build a handler that runs `exec` for each invocation
pub fn exec_handler(
    exec: String,
    declared: Vec<ArgSpec>,
    ctx: Context,
) -> impl Fn(&str, &[String], &OptionSet) -> i32 + 'static {
    move |name: &str, args: &[String], options: &OptionSet| {
        let vars = invocation_vars(&declared, args, options);
        match execute(&exec, &vars, &ctx) {
            Ok(code) => {
                if code != 0 {
                    ctx.reporter
                        .print_error(&format!("Command '{}' exited with code {}", name, code));
                }
                code
            }
            Err(e) => {
                ctx.reporter.print_error(&format!("Command '{}' failed: {}", name, e));
                1
            }
        }
    }
}
