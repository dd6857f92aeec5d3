//! Building an application from its definition

use crate::config::schema::validate_config;
use crate::config::types::AppConfig;
use crate::error::RcliError;
use crate::registry::{App, ArgSpec};
use crate::runner::{exec_handler, Context};

/// Validate `config` and register its options and commands on a new [`App`].
///
/// Commands with an `exec` entry get a handler that runs it through the
/// context's interpreter; others fall back to the app's default handler.
pub fn build_app(config: &AppConfig, ctx: Context) -> Result<App, RcliError> {
    validate_config(config)?;

    let ctx = match &config.interpreter {
        Some(interpreter) => ctx.with_interpreter(interpreter.clone()),
        None => ctx,
    };

    let mut app = App::new(&config.description)
        .strict(config.strict)
        .with_reporter(ctx.reporter);

    for opt in &config.options {
        app.try_add_value_option(&opt.key, &opt.value, &opt.description)?;
    }

    for cmd in &config.commands {
        let args: Vec<ArgSpec> = cmd.args.iter().map(|arg| ArgSpec::parse(arg)).collect();
        let command = app.try_add_command(&cmd.name, &cmd.description, args.clone())?;
        for opt in &cmd.options {
            command.try_add_value_option(&opt.key, &opt.value, &opt.description)?;
        }
        if let Some(exec) = &cmd.exec {
            command.set_handler(exec_handler(exec.clone(), args, ctx.clone()));
        }
    }

    Ok(app)
}
