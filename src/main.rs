//! main.rs
//! Entry point for lode

use lode_tui::app::{AppState, KeypressResult};
use lode_tui::config::Config;
use lode_tui::core::{ProcessLauncher, SyntectRenderer, list_projects, run_terminal};
use lode_tui::logging;
use lode_tui::utils::cli::{CliAction, handle_args};
use lode_tui::utils::expand_home_path;

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[lode] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let action = handle_args();
    match action {
        CliAction::Exit => return ExitCode::SUCCESS,
        CliAction::Fail => return ExitCode::FAILURE,
        _ => {}
    }

    let _guard = match logging::init_tracing() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("[lode] Logging disabled: {}", e);
            None
        }
    };

    let config = Config::load();

    let config = match action {
        CliAction::RunAppAtPath(path_arg) => config.with_root(expand_home_path(&path_arg)),
        CliAction::ListProjects(path_arg) => {
            let root = path_arg
                .map(|p| expand_home_path(&p))
                .unwrap_or_else(|| config.general().root().to_path_buf());
            return print_projects(root);
        }
        _ => config,
    };

    let root = config.general().root();
    if !root.is_dir() {
        eprintln!("\n[lode] Error: Path '{}' cannot be opened.", root.display());
        tracing::error!(root = %root.display(), "root is not a directory");
        return ExitCode::FAILURE;
    }

    let renderer = SyntectRenderer::new(config.theme().syntax());
    let mut app = match AppState::new(&config, Box::new(renderer), Box::new(ProcessLauncher)) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("\n[lode] Error: {}", e);
            tracing::error!(error = %e, "cannot start");
            return ExitCode::FAILURE;
        }
    };

    match run_terminal(&mut app) {
        Ok(KeypressResult::Launched) => {
            tracing::info!("session ended by editor launch");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n[lode] Error: {}", e);
            tracing::error!(error = %e, "session ended with error");
            ExitCode::FAILURE
        }
    }
}

fn print_projects(root: PathBuf) -> ExitCode {
    match list_projects(&root) {
        Ok(projects) => {
            for project in projects {
                println!("{}", project);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[lode] Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
