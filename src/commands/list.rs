//! List command - Show every command shipped with the installer

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::catalog::Category;
use crate::config::Locations;
use crate::cursor::commands_dir;
use crate::ui;

/// Render the available commands grouped by category
///
/// Depends only on the source tree, never on what a project has installed.
/// Categories without a source directory are left out.
pub fn render_catalog(source_root: &Path) -> Result<String> {
    let mut lines = vec![];

    for category in Category::ALL {
        if !source_root.join(category.as_str()).is_dir() {
            continue;
        }

        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            category.icon(),
            category.as_str().to_uppercase().bold()
        ));

        for name in commands_dir::available_commands(source_root, category.as_str())? {
            lines.push(format!("  /{}", name));
        }
    }

    Ok(lines.join("\n"))
}

/// Execute the list command
pub fn execute(locations: &Locations) -> Result<()> {
    ui::banner("📋 AVAILABLE COMMANDS");
    println!("{}", render_catalog(&locations.source_dir)?);
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_groups_by_category() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("pr")).unwrap();
        fs::create_dir_all(root.path().join("workflow")).unwrap();
        fs::write(root.path().join("pr/pr-review.md"), "").unwrap();
        fs::write(root.path().join("workflow/full-flow.md"), "").unwrap();

        let output = render_catalog(root.path()).unwrap();

        let workflow = output.find("WORKFLOW").unwrap();
        let pr = output.find("PR").unwrap();
        assert!(workflow < pr);
        assert!(output.find("/full-flow").unwrap() < pr);
        assert!(output.find("/pr-review").unwrap() > pr);
        assert!(!output.contains("JIRA"));
    }

    #[test]
    fn test_render_missing_source_is_empty() {
        let root = TempDir::new().unwrap();
        assert_eq!(render_catalog(&root.path().join("nope")).unwrap(), "");
    }

    #[test]
    fn test_render_ignores_installation_state() {
        let root = TempDir::new().unwrap();
        let source = root.path().join("source");
        fs::create_dir_all(source.join("jira")).unwrap();
        fs::write(source.join("jira/jira-fetch.md"), "").unwrap();

        let before = render_catalog(&source).unwrap();

        let installed = root.path().join("project/.cursor/commands");
        fs::create_dir_all(&installed).unwrap();
        fs::write(installed.join("jira-fetch.md"), "").unwrap();
        fs::write(installed.join("custom.md"), "").unwrap();

        assert_eq!(render_catalog(&source).unwrap(), before);
    }

    #[test]
    fn test_shipped_catalog_matches_bundle_counts() {
        use crate::catalog::Bundle;

        let source = crate::config::bundled_commands_dir();
        for bundle in Bundle::all() {
            let total: usize = bundle
                .categories
                .iter()
                .map(|c| {
                    commands_dir::available_commands(&source, c.as_str())
                        .unwrap()
                        .len()
                })
                .sum();
            assert_eq!(total, bundle.count, "bundle {}", bundle.id);
        }
    }
}
