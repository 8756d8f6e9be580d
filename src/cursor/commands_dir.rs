//! Command file installation
//!
//! The source tree has one directory per category; the destination
//! (`.cursor/commands/`) is flat. Existing destination files are never
//! replaced, so re-running an install only fills in what is missing.

use anyhow::{Context, Result};
use fs_extra::file::{self, CopyOptions};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::ui;

const COMMAND_EXT: &str = "md";

/// Outcome of one install run, file names in install order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<String>,
    pub skipped: Vec<String>,
}

impl InstallReport {
    pub fn installed_count(&self) -> usize {
        self.installed.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Create a directory and its parents if they don't exist
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create: {}", dir.display()))?;
    }
    Ok(())
}

/// Copy every command file of the given categories into `destination_dir`
///
/// A missing category directory contributes no files. The destination
/// directory must already exist.
pub fn install_commands<S: AsRef<str>>(
    source_root: &Path,
    destination_dir: &Path,
    categories: &[S],
) -> Result<InstallReport> {
    let mut report = InstallReport::default();

    let mut options = CopyOptions::new();
    options.overwrite = false;
    options.skip_exist = true;

    for category in categories {
        let category_dir = source_root.join(category.as_ref());

        for src in command_files(&category_dir)? {
            let Some(name) = src.file_name().map(|n| n.to_string_lossy().to_string()) else {
                continue;
            };
            let dst = destination_dir.join(&name);

            if dst.exists() {
                ui::step(&format!("Exists: {} (skipped)", name));
                report.skipped.push(name);
                continue;
            }

            file::copy(&src, &dst, &options).with_context(|| {
                format!("Failed to copy {} to {}", src.display(), dst.display())
            })?;
            ui::step(&format!("Installed: {}", name));
            report.installed.push(name);
        }
    }

    Ok(report)
}

/// Names (extension stripped) of the command files in an installed directory
pub fn installed_commands(dir: &Path) -> Result<Vec<String>> {
    Ok(command_files(dir)?
        .iter()
        .filter_map(|p| command_name(p))
        .collect())
}

/// Names of the commands a source category provides, empty when it doesn't exist
pub fn available_commands(source_root: &Path, category: &str) -> Result<Vec<String>> {
    installed_commands(&source_root.join(category))
}

/// `.md` files directly inside `dir`, sorted by file name
fn command_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to read: {}", dir.display()))?;
        if entry.file_type().is_file() && is_command_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_command_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(COMMAND_EXT)
}

fn command_name(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// workflow: 2 commands, jira: 3 commands, plus a non-command file
    fn source_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(&root.join("workflow/full-flow.md"), "# full-flow");
        write(&root.join("workflow/gather-context.md"), "# gather-context");
        write(&root.join("workflow/README.txt"), "not a command");
        write(&root.join("jira/jira-fetch.md"), "# jira-fetch");
        write(&root.join("jira/jira-branch.md"), "# jira-branch");
        write(&root.join("jira/jira-comment.md"), "# jira-comment");
        dir
    }

    #[test]
    fn test_install_into_empty_destination() {
        let source = source_tree();
        let dest = TempDir::new().unwrap();

        let report = install_commands(source.path(), dest.path(), &["workflow", "jira"]).unwrap();

        assert_eq!(report.installed_count(), 5);
        assert_eq!(report.skipped_count(), 0);
        assert_eq!(
            fs::read_to_string(dest.path().join("jira-fetch.md")).unwrap(),
            "# jira-fetch"
        );
        assert!(!dest.path().join("README.txt").exists());
    }

    #[test]
    fn test_second_install_skips_everything() {
        let source = source_tree();
        let dest = TempDir::new().unwrap();

        install_commands(source.path(), dest.path(), &["workflow", "jira"]).unwrap();
        let second = install_commands(source.path(), dest.path(), &["workflow", "jira"]).unwrap();

        assert_eq!(second.installed_count(), 0);
        assert_eq!(second.skipped_count(), 5);
        assert_eq!(installed_commands(dest.path()).unwrap().len(), 5);
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let source = source_tree();
        let dest = TempDir::new().unwrap();
        write(&dest.path().join("full-flow.md"), "my local edits");

        let report = install_commands(source.path(), dest.path(), &["workflow"]).unwrap();

        assert_eq!(report.installed, vec!["gather-context.md"]);
        assert_eq!(report.skipped, vec!["full-flow.md"]);
        assert_eq!(
            fs::read_to_string(dest.path().join("full-flow.md")).unwrap(),
            "my local edits"
        );
    }

    #[test]
    fn test_missing_category_is_ignored() {
        let source = source_tree();
        let dest = TempDir::new().unwrap();

        let report = install_commands(source.path(), dest.path(), &["pr", "workflow"]).unwrap();

        assert_eq!(report.installed_count(), 2);
    }

    #[test]
    fn test_install_order_is_by_category_then_name() {
        let source = source_tree();
        let dest = TempDir::new().unwrap();

        let report = install_commands(source.path(), dest.path(), &["jira", "workflow"]).unwrap();

        assert_eq!(
            report.installed,
            vec![
                "jira-branch.md",
                "jira-comment.md",
                "jira-fetch.md",
                "full-flow.md",
                "gather-context.md",
            ]
        );
    }

    #[test]
    fn test_installed_commands_strips_extension() {
        let dest = TempDir::new().unwrap();
        write(&dest.path().join("pr-review.md"), "");
        write(&dest.path().join("full-flow.md"), "");
        write(&dest.path().join("notes.txt"), "");

        assert_eq!(
            installed_commands(dest.path()).unwrap(),
            vec!["full-flow", "pr-review"]
        );
    }

    #[test]
    fn test_available_commands_missing_category() {
        let source = source_tree();
        assert!(available_commands(source.path(), "analysis")
            .unwrap()
            .is_empty());
        assert_eq!(
            available_commands(source.path(), "workflow").unwrap(),
            vec!["full-flow", "gather-context"]
        );
    }

    #[test]
    fn test_ensure_dir_creates_parents() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join(".cursor").join("commands");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();

        assert!(nested.is_dir());
    }
}
