//! Command-line interface for rendercheck
//!
//! Usage:
//!   rendercheck run `<suite>` [--format text|json] [--config `<file>`]    - Run every case in a suite file
//!   rendercheck show `<suite>` --component `<name>` [--format `<format>`] - Render one component and print it
//!   rendercheck list-formats                                          - List tree output formats
//!
//! `run` exits with status 1 when any case fails and 2 when the suite or the
//! configuration cannot be loaded.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::process;
use tracing_subscriber::EnvFilter;

use rendercheck::config::{Loader, RenderCheckConfig, ReportFormat};
use rendercheck::formats::FormatRegistry;
use rendercheck::render;
use rendercheck::suite::SuiteFile;

fn main() {
    let matches = Command::new("rendercheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render components and check the text of their elements")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log render, find and assert steps"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults and any rendercheck.toml beside the suite"),
        )
        .subcommand(
            Command::new("run")
                .about("Run every case in a suite file")
                .arg(
                    Arg::new("path")
                        .help("Path to the suite YAML file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_parser(["text", "json"])
                        .help("Report format (overrides report.format)"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Render one component of a suite file and print its tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the suite YAML file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("component")
                        .long("component")
                        .help("Name of the component to render")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'json', 'markup')")
                        .default_value("treeviz"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available tree formats"))
        .get_matches();

    // Global args propagate down to the subcommand matches
    let Some((name, sub_matches)) = matches.subcommand() else {
        unreachable!()
    };
    init_logging(sub_matches.get_flag("verbose"));

    match name {
        "run" => handle_run_command(sub_matches),
        "show" => handle_show_command(sub_matches),
        "list-formats" => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(
    matches: &ArgMatches,
    suite_path: &str,
    format_override: Option<&String>,
) -> RenderCheckConfig {
    let mut loader = Loader::for_suite(suite_path);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = format_override {
        loader = loader
            .set_override("report.format", format.as_str())
            .unwrap_or_else(|e| fail(2, &format!("Invalid format override: {e}")));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(2, &format!("Error loading configuration: {e}")))
}

fn load_suite_file(path: &str) -> SuiteFile {
    SuiteFile::load(path).unwrap_or_else(|e| fail(2, &format!("Error: {e}")))
}

fn handle_run_command(run_matches: &ArgMatches) {
    let path = run_matches
        .get_one::<String>("path")
        .unwrap_or_else(|| fail(2, "missing suite path"));
    let config = load_config(run_matches, path, run_matches.get_one::<String>("format"));

    let suite = load_suite_file(path)
        .into_suite()
        .unwrap_or_else(|e| fail(2, &format!("Error: {e}")));

    let report = suite.run_with(config.run_options());

    match config.report.format {
        ReportFormat::Text => print!("{}", report.to_text()),
        ReportFormat::Json => {
            let json = report
                .to_json()
                .unwrap_or_else(|e| fail(2, &format!("Error writing report: {e}")));
            println!("{json}");
        }
    }

    if !report.all_passed() {
        process::exit(1);
    }
}

fn handle_show_command(show_matches: &ArgMatches) {
    let (Some(path), Some(name), Some(format)) = (
        show_matches.get_one::<String>("path"),
        show_matches.get_one::<String>("component"),
        show_matches.get_one::<String>("format"),
    ) else {
        fail(2, "missing arguments");
    };
    let config = load_config(show_matches, path, None);

    let component = load_suite_file(path)
        .component(name)
        .unwrap_or_else(|| fail(2, &format!("Error: no component named '{name}'")));

    let tree = render(&component).unwrap_or_else(|e| fail(1, &format!("Error: {e}")));

    let registry = FormatRegistry::with_label_width(config.treeviz.max_label_chars);
    let output = registry
        .serialize(&tree, format)
        .unwrap_or_else(|e| fail(2, &format!("Error: {e}")));
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {name}");
            println!("    {}", formatter.description());
        }
    }
}

fn fail(code: i32, message: &str) -> ! {
    eprintln!("{message}");
    process::exit(code)
}
