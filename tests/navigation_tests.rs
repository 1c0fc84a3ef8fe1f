//! Navigation tests for lode
//!
//! These tests drive the state machine through whole browsing sessions on
//! temporary project trees, with a recording launcher standing in for real
//! editors and a marker renderer standing in for the highlighter.

use lode_tui::app::{AppState, EDITORS, InputEvent, KeypressResult, ListRow, Mode};
use lode_tui::config::Config;
use lode_tui::core::{self, ContentRenderer, EditorLauncher, EntryKind, SyntectRenderer};
use lode_tui::error;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::{TempDir, tempdir};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Default, Clone)]
struct RecordingLauncher {
    calls: Rc<RefCell<Vec<(String, PathBuf)>>>,
}

impl EditorLauncher for RecordingLauncher {
    fn launch(&mut self, tool: &str, target: &Path) -> error::Result<()> {
        self.calls
            .borrow_mut()
            .push((tool.to_string(), target.to_path_buf()));
        Ok(())
    }
}

struct MarkerRenderer;

impl ContentRenderer for MarkerRenderer {
    fn render(&self, content: &[u8], extension: &str) -> String {
        format!("<{}:{}>", extension, content.len())
    }
}

/// `proj/` with `src/main.go` and `readme.md`.
fn project() -> Result<TempDir, std::io::Error> {
    let tmp = tempdir()?;
    fs::create_dir(tmp.path().join("src"))?;
    fs::write(tmp.path().join("src").join("main.go"), "package main\n")?;
    fs::write(tmp.path().join("readme.md"), "# Proj\n\nSome *notes*.\n")?;
    Ok(tmp)
}

fn select(app: &mut AppState, name: &str) -> TestResult {
    for _ in 0..app.nav().entries().len() {
        if app.nav().selected_entry().map(|e| e.name()) == Some(name) {
            return Ok(());
        }
        app.handle_event(InputEvent::NavigateDown)?;
    }
    Err(format!("{} is not listed", name).into())
}

fn names(app: &AppState) -> BTreeSet<String> {
    app.nav()
        .entries()
        .iter()
        .map(|e| e.name().to_string())
        .collect()
}

#[test]
fn test_initial_listing_of_project() -> TestResult {
    let tmp = project()?;
    let config = Config::default().with_root(tmp.path().to_path_buf());
    let app = AppState::new(
        &config,
        Box::new(MarkerRenderer),
        Box::new(RecordingLauncher::default()),
    )?;

    assert_eq!(app.mode(), Mode::Listing);
    assert_eq!(app.nav().entries().len(), 2);

    let readme = app
        .nav()
        .entries()
        .iter()
        .find(|e| e.name() == "readme.md")
        .ok_or("readme.md missing")?;
    assert_eq!(readme.language(), "markdown");
    assert_eq!(readme.kind(), EntryKind::File);
    Ok(())
}

#[test]
fn test_descend_and_go_back_restores_listing() -> TestResult {
    let tmp = project()?;
    let config = Config::default().with_root(tmp.path().to_path_buf());
    let mut app = AppState::new(
        &config,
        Box::new(MarkerRenderer),
        Box::new(RecordingLauncher::default()),
    )?;
    let before = names(&app);

    select(&mut app, "src")?;
    app.handle_event(InputEvent::Activate)?;
    assert_eq!(app.nav().current_dir(), tmp.path().join("src"));
    assert_eq!(app.nav().previous_dir(), Some(tmp.path()));
    assert_eq!(app.nav().selected_path(), Some(tmp.path().join("src").as_path()));
    assert_eq!(app.nav().selected_idx(), 0);

    app.handle_event(InputEvent::GoBack)?;
    assert_eq!(app.mode(), Mode::Listing);
    assert_eq!(app.nav().current_dir(), tmp.path());
    assert_eq!(names(&app), before);
    Ok(())
}

#[test]
fn test_go_back_without_history_goes_to_parent() -> TestResult {
    let tmp = project()?;
    let config = Config::default().with_root(tmp.path().join("src"));
    let mut app = AppState::new(
        &config,
        Box::new(MarkerRenderer),
        Box::new(RecordingLauncher::default()),
    )?;

    app.handle_event(InputEvent::GoBack)?;
    assert_eq!(app.nav().current_dir(), tmp.path());
    assert!(names(&app).contains("readme.md"));
    Ok(())
}

#[test]
fn test_go_back_unwinds_nested_history_in_order() -> TestResult {
    let tmp = tempdir()?;
    fs::create_dir_all(tmp.path().join("b").join("c"))?;
    let config = Config::default().with_root(tmp.path().to_path_buf());
    let mut app = AppState::new(
        &config,
        Box::new(MarkerRenderer),
        Box::new(RecordingLauncher::default()),
    )?;

    select(&mut app, "b")?;
    app.handle_event(InputEvent::Activate)?;
    select(&mut app, "c")?;
    app.handle_event(InputEvent::Activate)?;
    assert_eq!(app.nav().current_dir(), tmp.path().join("b").join("c"));
    assert_eq!(
        app.nav().history(),
        [tmp.path().to_path_buf(), tmp.path().join("b")]
    );

    app.handle_event(InputEvent::GoBack)?;
    assert_eq!(app.nav().current_dir(), tmp.path().join("b"));
    assert_eq!(app.nav().history(), [tmp.path().to_path_buf()]);

    app.handle_event(InputEvent::GoBack)?;
    assert_eq!(app.nav().current_dir(), tmp.path());
    assert!(app.nav().history().is_empty());

    // history exhausted: the filesystem parent
    app.handle_event(InputEvent::GoBack)?;
    let parent = tmp.path().parent().ok_or("tempdir has no parent")?;
    assert_eq!(app.nav().current_dir(), parent);
    assert!(app.notice().is_none());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_go_back_at_filesystem_root_is_a_noop() -> TestResult {
    let config = Config::default().with_root(PathBuf::from("/"));
    let mut app = AppState::new(
        &config,
        Box::new(MarkerRenderer),
        Box::new(RecordingLauncher::default()),
    )?;
    let before = names(&app);

    let result = app.handle_event(InputEvent::GoBack)?;
    assert_eq!(result, KeypressResult::Continue);
    assert_eq!(app.mode(), Mode::Listing);
    assert_eq!(app.nav().current_dir(), Path::new("/"));
    assert_eq!(names(&app), before);
    assert!(app.notice().is_none());
    Ok(())
}

#[test]
fn test_view_file_then_cancel_keeps_listing() -> TestResult {
    let tmp = project()?;
    let config = Config::default().with_root(tmp.path().to_path_buf());
    let mut app = AppState::new(
        &config,
        Box::new(MarkerRenderer),
        Box::new(RecordingLauncher::default()),
    )?;

    select(&mut app, "readme.md")?;
    let idx = app.nav().selected_idx();
    let before = names(&app);

    app.handle_event(InputEvent::Activate)?;
    assert_eq!(app.mode(), Mode::ContentView);
    assert!(!app.content().rendered().is_empty());
    assert!(app.content().rendered().starts_with("<md:"));
    assert_eq!(
        app.nav().selected_path(),
        Some(tmp.path().join("readme.md").as_path())
    );

    app.handle_event(InputEvent::Cancel)?;
    assert_eq!(app.mode(), Mode::Listing);
    assert_eq!(app.nav().current_dir(), tmp.path());
    assert_eq!(app.nav().selected_idx(), idx);
    assert_eq!(names(&app), before);
    Ok(())
}

#[test]
fn test_real_renderer_styles_markdown_view() -> TestResult {
    let tmp = project()?;
    let config = Config::default().with_root(tmp.path().to_path_buf());
    let mut app = AppState::new(
        &config,
        Box::new(SyntectRenderer::new(config.theme().syntax())),
        Box::new(RecordingLauncher::default()),
    )?;

    select(&mut app, "readme.md")?;
    app.handle_event(InputEvent::Activate)?;
    let rendered = app.content().rendered();
    assert!(rendered.contains("Proj"));
    assert!(rendered.contains('\x1b'));
    Ok(())
}

#[test]
fn test_editor_selection_launches_code_on_selected_path() -> TestResult {
    let tmp = project()?;
    let config = Config::default().with_root(tmp.path().to_path_buf());
    let launcher = RecordingLauncher::default();
    let calls = Rc::clone(&launcher.calls);
    let mut app = AppState::new(&config, Box::new(MarkerRenderer), Box::new(launcher))?;

    select(&mut app, "src")?;
    app.handle_event(InputEvent::Activate)?;
    app.handle_event(InputEvent::RequestEditorSelection)?;
    assert_eq!(app.mode(), Mode::IdeSelection);

    let rows = app.rows();
    assert_eq!(rows.len(), EDITORS.len());
    assert!(rows.iter().all(|r| matches!(r, ListRow::Editor(_))));
    assert_eq!(rows[app.selected_row()].title(), "VSCode");

    let result = app.handle_event(InputEvent::Activate)?;
    assert_eq!(result, KeypressResult::Launched);
    assert_eq!(
        calls.borrow().as_slice(),
        &[("code".to_string(), tmp.path().join("src"))]
    );
    Ok(())
}

#[test]
fn test_editor_selection_after_viewing_file() -> TestResult {
    let tmp = project()?;
    let config = Config::default().with_root(tmp.path().to_path_buf());
    let launcher = RecordingLauncher::default();
    let calls = Rc::clone(&launcher.calls);
    let mut app = AppState::new(&config, Box::new(MarkerRenderer), Box::new(launcher))?;

    select(&mut app, "readme.md")?;
    app.handle_event(InputEvent::Activate)?;
    app.handle_event(InputEvent::Cancel)?;
    app.handle_event(InputEvent::RequestEditorSelection)?;
    app.handle_event(InputEvent::NavigateDown)?;
    app.handle_event(InputEvent::Activate)?;

    assert_eq!(
        calls.borrow().as_slice(),
        &[("nvim".to_string(), tmp.path().join("readme.md"))]
    );
    Ok(())
}

#[test]
fn test_resize_keeps_mode_and_selection() -> TestResult {
    let tmp = project()?;
    let config = Config::default().with_root(tmp.path().to_path_buf());
    let mut app = AppState::new(
        &config,
        Box::new(MarkerRenderer),
        Box::new(RecordingLauncher::default()),
    )?;

    app.handle_event(InputEvent::NavigateDown)?;
    let idx = app.nav().selected_idx();
    app.handle_event(InputEvent::Resize(120, 40))?;

    assert_eq!(app.viewport(), (120, 40));
    assert_eq!(app.mode(), Mode::Listing);
    assert_eq!(app.nav().selected_idx(), idx);
    Ok(())
}

#[test]
fn test_list_dir_paths_and_kinds() -> TestResult {
    let tmp = tempdir()?;
    for name in ["a.rs", "b.PY", "notes", ".env"] {
        File::create(tmp.path().join(name))?;
    }
    fs::create_dir(tmp.path().join("pkg"))?;

    let entries = core::list_dir(tmp.path())?;
    assert_eq!(entries.len(), 5);
    for entry in &entries {
        assert_eq!(entry.path(), tmp.path().join(entry.name()));
        assert_eq!(entry.is_dir(), entry.name() == "pkg");
    }
    Ok(())
}

#[test]
fn test_classify_is_case_insensitive_and_total() {
    let recognized = [
        ("main.go", "go"),
        ("x.CPP", "cpp"),
        ("x.Hpp", "cpp"),
        ("x.h", "c"),
        ("x.PY", "python"),
        ("x.tsx", "typescript"),
        ("x.cs", "csharp"),
        ("x.RS", "rust"),
        ("x.scss", "css"),
        ("README.Markdown", "markdown"),
    ];
    for (name, tag) in recognized {
        let (icon, language) = core::classify(name);
        assert_eq!(language, tag, "{}", name);
        assert_ne!(icon, core::FILE_ICON, "{}", name);
    }

    for name in ["Makefile", "data.bin", ".gitignore", "archive.tar.gz"] {
        assert_eq!(core::classify(name), (core::FILE_ICON, ""), "{}", name);
    }
    assert_eq!(core::classify_dir(), (core::FOLDER_ICON, ""));
}

#[test]
fn test_project_overview() -> TestResult {
    let tmp = project()?;
    fs::create_dir(tmp.path().join("docs"))?;
    File::create(tmp.path().join("docs").join("plan.md"))?;

    let projects = core::list_projects(tmp.path())?;
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["docs", "src"]);
    assert_eq!(projects[1].tasks, ["main.go"]);
    assert_eq!(
        projects[0].to_string(),
        "Project: docs\nTasks:\n- plan.md\n"
    );
    Ok(())
}
