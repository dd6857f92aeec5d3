//! Help rendering

use crate::help::wrap::{format_arg_pattern, wrap_words, WRAP_WIDTH};
use crate::registry::{App, Command, CommandOption};
use std::io::{self, Write};

/// Indent of the first description line after the padded option key
const OPTION_GAP: usize = 3;

/// Width of the `  -` lead-in before an option key, plus the gap
const OPTION_LEAD: usize = 3 + OPTION_GAP;

/// Write help for `topic`: the command's detailed help if such a command
/// exists, otherwise the application help.
pub fn write_help(app: &App, topic: &str, out: &mut dyn Write) -> io::Result<()> {
    match app.find_command(topic) {
        Some(command) => write_command_help(command, out),
        None => write_app_help(app, out),
    }
}

/// Render help for `topic` into a string
pub fn render_help(app: &App, topic: &str) -> String {
    let mut buf = Vec::new();
    write_help(app, topic, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the detailed help for one command
pub fn write_command_help(command: &Command, out: &mut dyn Write) -> io::Result<()> {
    let usage = format!("{} {}", command.name(), format_arg_pattern(command.args()));
    writeln!(out)?;
    writeln!(out, "{}", usage.trim_end())?;
    writeln!(out)?;

    let short = command.short_description();
    if !short.is_empty() {
        let sentence = if short.ends_with('.') {
            short.to_string()
        } else {
            format!("{}.", short)
        };
        write_body(out, &sentence, 2, 2)?;
    }
    for line in command.extra_description().lines() {
        if line.trim().is_empty() {
            writeln!(out)?;
        } else {
            write_body(out, line, 2, 2)?;
        }
    }

    if !command.options().is_empty() {
        write_options(command.options(), out)?;
    }
    Ok(())
}

/// Write the application help: banner, command list and global options
pub fn write_app_help(app: &App, out: &mut dyn Write) -> io::Result<()> {
    if !app.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", app.description)?;
        writeln!(out)?;
    }

    let width = app
        .commands()
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(0);
    for command in app.commands() {
        let row = format!(
            "  {:<width$}  {}",
            command.name(),
            command.short_description(),
            width = width
        );
        writeln!(out, "{}", row.trim_end())?;
    }

    if !app.options().is_empty() {
        write_options(app.options(), out)?;
    }
    Ok(())
}

/// Write an option listing preceded by a blank line.
///
/// Keys are padded to the longest display key in `options`, and descriptions
/// wrap under their own column.
pub fn write_options(options: &[CommandOption], out: &mut dyn Write) -> io::Result<()> {
    let keys: Vec<String> = options.iter().map(CommandOption::display_key).collect();
    let width = keys.iter().map(|k| k.chars().count()).max().unwrap_or(0);

    writeln!(out)?;
    for (opt, key) in options.iter().zip(&keys) {
        let lead = format!("  -{:<width$}", key, width = width);
        let lines = wrap_words(&opt.description, WRAP_WIDTH);
        match lines.split_first() {
            Some((first, rest)) => {
                writeln!(out, "{}{}{}", lead, " ".repeat(OPTION_GAP), first)?;
                for line in rest {
                    writeln!(out, "{}{}", " ".repeat(width + OPTION_LEAD), line)?;
                }
            }
            None => writeln!(out, "{}", lead.trim_end())?,
        }
    }
    Ok(())
}

fn write_body(out: &mut dyn Write, text: &str, first_indent: usize, other_indent: usize) -> io::Result<()> {
    for (i, line) in wrap_words(text, WRAP_WIDTH).iter().enumerate() {
        let indent = if i == 0 { first_indent } else { other_indent };
        writeln!(out, "{}{}", " ".repeat(indent), line)?;
    }
    Ok(())
}
