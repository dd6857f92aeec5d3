//! Integration tests for generated help

mod common;

use common::{example_app, run_captured};
use rcli::help::render_help;
use rcli::App;

#[test]
fn test_application_help() {
    let (app, _) = example_app();
    let (_, out) = run_captured(&app, &["myapp"]);

    let expected = [
        "",
        "myapp [options] command",
        "",
        "  start       Start the application",
        "  initialize  Initialize a directory",
        "  varargs     Demonstrate variable number of arguments",
    ];
    assert_eq!(out, expected.join("\n") + "\n");
}

#[test]
fn test_help_keyword_and_option_agree() {
    let (app, _) = example_app();
    let (_, by_keyword) = run_captured(&app, &["myapp", "help", "initialize"]);
    let (_, by_option) = run_captured(&app, &["myapp", "initialize", "-help"]);
    let (_, by_leading_option) = run_captured(&app, &["myapp", "-help", "initialize"]);
    assert_eq!(by_keyword, by_option);
    assert_eq!(by_keyword, by_leading_option);
    assert_eq!(by_keyword, render_help(&app, "initialize"));
}

#[test]
fn test_command_help() {
    let (app, _) = example_app();
    let (_, out) = run_captured(&app, &["myapp", "help", "initialize"]);

    let expected = [
        "",
        "initialize root-directory",
        "",
        "  Initialize a directory.",
        "  This will setup the necessary structures in 'directory'.",
        "",
        "  -clean                Clean all files",
        "  -strength=howstrong   Strong values clean more files",
    ];
    assert_eq!(out, expected.join("\n") + "\n");
}

#[test]
fn test_command_help_without_options() {
    let (app, _) = example_app();
    let (_, out) = run_captured(&app, &["myapp", "help", "start"]);
    assert_eq!(out, "\nstart port root-directory\n\n  Start the application.\n");
}

#[test]
fn test_global_option_listing_wraps() {
    let mut app = App::new("imqsauth -c=configfile [options] command");
    app.add_command("createdb", "Create the postgres database", &[]);
    app.add_command("resetauthgroups", "Reset the [admin,enabled] groups", &[]);
    app.add_value_option(
        "c",
        "configfile",
        "Specify the authaus config file. A pseudo file called !TESTCONFIG1 \
         is used by the REST test suite to load a test configuration. \
         This option is mandatory.",
    );
    app.add_bool_option("z", "Short flag");

    let text = render_help(&app, "");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[3], "  createdb         Create the postgres database");
    assert_eq!(lines[4], "  resetauthgroups  Reset the [admin,enabled] groups");
    assert_eq!(lines[5], "");
    assert_eq!(
        lines[6],
        "  -c=configfile   Specify the authaus config file. A pseudo file called"
    );
    assert_eq!(
        lines[7],
        "                  !TESTCONFIG1 is used by the REST test suite to load a"
    );
    assert_eq!(
        lines[8],
        "                  test configuration. This option is mandatory."
    );
    assert_eq!(lines[9], "  -z              Short flag");
}
