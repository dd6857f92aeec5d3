//! Integration tests for application definition files

mod common;

use common::{create_test_config, run_captured};
use rcli::config::{build_app, parse_config, parse_config_file, validate_config};
use rcli::runner::Context;
use rcli::ui::Reporter;

const DEFINITION: &str = r#"
description: myapp [options] command
options:
  - key: config
    value: file
    description: Configuration file
commands:
  - name: start
    description: Start the application
    args: [port, root-directory]
    exec: test "${port}" = 8669
  - name: initialize
    description: "Initialize a directory\nThis will setup the necessary structures in 'directory'."
    args: [root-directory]
    options:
      - key: clean
        description: Clean all files
      - key: strength
        value: howstrong
        description: Strong values clean more files
    exec: test "${clean}" = true
  - name: varargs
    description: Demonstrate variable number of arguments
    args: [param1, ...things]
    exec: test "${things}" = "b c"
"#;

fn quiet() -> Context {
    Context::new().with_reporter(Reporter::silent())
}

#[test]
fn test_parse_and_validate_file() {
    let (_dir, path) = create_test_config(DEFINITION);
    let config = parse_config_file(&path).unwrap();
    validate_config(&config).unwrap();

    assert_eq!(config.commands.len(), 3);
    assert_eq!(config.commands[1].options.len(), 2);
    assert_eq!(config.options[0].key, "config");
}

#[test]
fn test_exec_commands_receive_bound_values() {
    let app = build_app(&parse_config(DEFINITION).unwrap(), quiet()).unwrap();

    assert_eq!(run_captured(&app, &["myapp", "start", "8669", "/srv"]).0, 0);
    assert_eq!(run_captured(&app, &["myapp", "start", "80", "/srv"]).0, 1);

    assert_eq!(run_captured(&app, &["myapp", "initialize", "dir", "-clean"]).0, 0);
    assert_eq!(run_captured(&app, &["myapp", "initialize", "dir"]).0, 1);

    assert_eq!(run_captured(&app, &["myapp", "varargs", "a", "b", "c"]).0, 0);
}

#[test]
fn test_definition_help_matches_registration_order() {
    let app = build_app(&parse_config(DEFINITION).unwrap(), quiet()).unwrap();
    let (code, out) = run_captured(&app, &["myapp"]);
    assert_eq!(code, 0);

    let names: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("  ") && !l.starts_with("  -"))
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(names, vec!["start", "initialize", "varargs"]);
    assert!(out.contains("  -config=file   Configuration file"));
}

#[test]
fn test_interpreter_override() {
    let yaml = r#"
interpreter: [sh, -c]
commands:
  - name: ok
    exec: exit 0
"#;
    let app = build_app(&parse_config(yaml).unwrap(), quiet()).unwrap();
    assert_eq!(run_captured(&app, &["myapp", "ok"]).0, 0);
}
