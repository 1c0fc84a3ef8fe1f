//! Command-line argument parsing and help for lode.
//!
//! With no arguments lode opens the configured root. A single path argument
//! overrides the root; flags print information or run the project overview.

use crate::config::Config;

/// What `main` should do after argument parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    ListProjects(Option<String>),
    Exit,
    Fail,
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let action = parse_args(&args);

    match &action {
        CliAction::Exit => match args.first().map(String::as_str) {
            Some("--version" | "-v") => print_version(),
            Some("-h" | "--help") => print_help(),
            Some("--init") => {
                if let Err(e) = Config::generate_default(&Config::default_path()) {
                    eprintln!("Error: {}", e);
                }
            }
            _ => {}
        },
        CliAction::Fail => {
            eprintln!("Usage: lode [PATH] | lode --projects [PATH] | lode [OPTION]");
            eprintln!("Try --help for available options");
        }
        _ => {}
    }
    action
}

/// Pure argument classification, `args` excludes the program name.
pub fn parse_args(args: &[String]) -> CliAction {
    match args {
        [] => CliAction::RunApp,
        [flag, rest @ ..] if flag == "--projects" => match rest {
            [] => CliAction::ListProjects(None),
            [path] if !path.starts_with('-') => CliAction::ListProjects(Some(path.clone())),
            _ => CliAction::Fail,
        },
        [arg] => match arg.as_str() {
            "--version" | "-v" | "-h" | "--help" | "--init" => CliAction::Exit,
            a if !a.starts_with('-') && !a.trim().is_empty() => {
                CliAction::RunAppAtPath(a.to_string())
            }
            _ => CliAction::Fail,
        },
        _ => CliAction::Fail,
    }
}

fn print_version() {
    println!("lode {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"lode - browse project directories, read files, hand off to an editor

USAGE:
  lode [PATH]
  lode --projects [PATH]

PATH:
  Directory to open (defaults to [general].root, then ~/Projects, then the current directory)

OPTIONS:
      --projects [PATH]   Print every project under PATH and the files inside it
      --init              Generate a default configuration file
  -h, --help              Print help information
  -v, --version           Display the installed version

KEYS (defaults):
  enter                   Open directory / view file / launch selected editor
  ctrl+b, backspace       Go back
  ctrl+o, ctrl+g          Choose an editor for the selected path
  esc                     Close the file view or editor list
  j/k, up/down            Move selection or scroll
  q, ctrl+c               Quit

ENVIRONMENT:
  LODE_CONFIG             Override the default config path
  LODE_LOG                Log filter (e.g. "debug"), written to the lode state directory
"#
    );
}
