//! Project overview used by `lode --projects`.
//!
//! Every immediate subdirectory of the root is a project; the regular files
//! directly inside it are its tasks.

use crate::core::fm::list_dir;
use crate::error::Result;

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub tasks: Vec<String>,
}

/// Collects the projects under `root`, sorted by name.
///
/// Task names are sorted as well. Fails on the first unreadable directory.
pub fn list_projects(root: &Path) -> Result<Vec<Project>> {
    let mut projects = Vec::new();

    for entry in list_dir(root)?.into_iter().filter(|e| e.is_dir()) {
        let mut tasks: Vec<String> = list_dir(entry.path())?
            .into_iter()
            .filter(|e| !e.is_dir())
            .map(|e| e.name().to_string())
            .collect();
        tasks.sort();
        projects.push(Project {
            name: entry.name().to_string(),
            tasks,
        });
    }

    projects.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(projects)
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project: {}", self.name)?;
        writeln!(f, "Tasks:")?;
        for task in &self.tasks {
            writeln!(f, "- {}", task)?;
        }
        Ok(())
    }
}
