//! Main CLI application

use crate::config::{build_app, parse_config_auto, parse_config_file};
use crate::dispatch::OptionSet;
use crate::registry::App;
use crate::runner::Context;
use crate::ui::{Reporter, Verbosity};
use anyhow::Context as _;
use std::path::PathBuf;

/// Options the launcher reads before the definition is loaded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Definition file given with `-file=path`
    pub file: Option<PathBuf>,
    pub verbosity: Verbosity,
}

/// Extract `-file=`, `-quiet` and `-verbose` before dispatch
pub fn extract_launch_options(args: &[String]) -> LaunchOptions {
    let mut launch = LaunchOptions::default();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-quiet" => launch.verbosity = Verbosity::Quiet,
            "-verbose" => launch.verbosity = Verbosity::Verbose,
            other => {
                if let Some(path) = other.strip_prefix("-file=") {
                    if !path.is_empty() {
                        launch.file = Some(PathBuf::from(path));
                    }
                }
            }
        }
    }
    launch
}

/// Load the definition and build the application, including the launcher's
/// own global options and the default handler
pub fn load_app(launch: &LaunchOptions) -> anyhow::Result<App> {
    let reporter = Reporter::new(launch.verbosity);

    let (config, path) = match &launch.file {
        Some(path) => {
            let config = parse_config_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            (config, path.clone())
        }
        None => parse_config_auto().context("Failed to load application definition")?,
    };
    reporter.print_debug(&format!("Loaded definition from {}", path.display()));

    let mut ctx = Context::new().with_reporter(reporter);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        ctx = ctx.with_working_dir(dir.to_path_buf());
    }

    let mut app = build_app(&config, ctx)
        .with_context(|| format!("Invalid definition in {}", path.display()))?;
    add_launcher_options(&mut app);
    app.set_default_handler(echo_handler);

    Ok(app)
}

fn add_launcher_options(app: &mut App) {
    let declared = |app: &App, key: &str| app.options().iter().any(|o| o.key == key);
    if !declared(app, "file") {
        app.add_value_option("file", "path", "Path to the rcli.yml definition file");
    }
    if !declared(app, "quiet") {
        app.add_bool_option("quiet", "Only print command output and errors");
    }
    if !declared(app, "verbose") {
        app.add_bool_option("verbose", "Print debug output");
    }
}

/// Default handler: print the resolved invocation
fn echo_handler(name: &str, args: &[String], options: &OptionSet) -> i32 {
    println!("{}", format_invocation(name, args, options));
    0
}

/// `name arg1 arg2 {key=value, flag}`
pub fn format_invocation(name: &str, args: &[String], options: &OptionSet) -> String {
    let mut parts = vec![name.to_string()];
    parts.extend(args.iter().cloned());

    let opts: Vec<String> = options
        .iter()
        .map(|(k, v)| if v.is_empty() { k.clone() } else { format!("{}={}", k, v) })
        .collect();
    parts.push(format!("{{{}}}", opts.join(", ")));

    parts.join(" ")
}

/// Run the CLI application with the process arguments
pub fn run() -> anyhow::Result<i32> {
    let args: Vec<String> = std::env::args().collect();
    let launch = extract_launch_options(&args);
    let app = load_app(&launch)?;
    Ok(app.run(&args[..]))
}
