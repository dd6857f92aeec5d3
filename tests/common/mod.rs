//! Common test utilities

#![allow(dead_code)]

use rcli::{App, OptionSet};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

/// One recorded handler call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub command: String,
    pub args: Vec<String>,
    pub options: OptionSet,
}

pub type Calls = Rc<RefCell<Vec<Call>>>;

/// The example application: start, initialize and varargs, with a default
/// handler that records every call
pub fn example_app() -> (App, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);

    let mut app = App::new("myapp [options] command");
    app.set_default_handler(move |name, args, options| {
        sink.borrow_mut().push(Call {
            command: name.to_string(),
            args: args.to_vec(),
            options: options.clone(),
        });
        0
    });

    app.add_command("start", "Start the application", &["port", "root-directory"]);

    app.add_command(
        "initialize",
        "Initialize a directory\nThis will setup the necessary structures in 'directory'.",
        &["root-directory"],
    )
    .add_bool_option("clean", "Clean all files")
    .add_value_option("strength", "howstrong", "Strong values clean more files");

    app.add_command("varargs", "Demonstrate variable number of arguments", &["param1", "...things"]);

    (app, calls)
}

/// Run `argv` and capture the output channel
pub fn run_captured(app: &App, argv: &[&str]) -> (i32, String) {
    let mut out = Vec::new();
    let code = app.run_with_output(argv, &mut out);
    (code, String::from_utf8(out).unwrap())
}

/// Create a temporary directory with an rcli.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("rcli.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}
