//! Installation paths
//!
//! Project artifacts live under `<project>/.cursor/`:
//! - commands/  installed command files
//! - mcp.json   project MCP configuration
//!
//! `~/.cursor/mcp.json` is only ever read, to detect integrations the user
//! already configured globally.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CURSOR_DIR: &str = ".cursor";
pub const COMMANDS_DIR: &str = "commands";
pub const MCP_FILE: &str = "mcp.json";

/// Name of the bundled command tree next to the binary or in the source checkout
const SOURCE_DIR: &str = "commands";

/// Resolved locations for one project
#[derive(Debug, Clone)]
pub struct Locations {
    pub project_dir: PathBuf,
    /// Bundled command source root (one subdirectory per category)
    pub source_dir: PathBuf,
    /// User-global MCP config, `None` when the home directory is unknown
    pub global_mcp: Option<PathBuf>,
}

impl Locations {
    /// Resolve locations from CLI overrides, defaulting to the current directory
    pub fn resolve(project_dir: Option<PathBuf>, source_dir: Option<PathBuf>) -> Result<Self> {
        let project_dir = match project_dir {
            Some(p) => p,
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        let source_dir = match source_dir {
            Some(p) => p,
            None => bundled_commands_dir(),
        };

        Ok(Self {
            project_dir,
            source_dir,
            global_mcp: global_mcp_path().ok(),
        })
    }

    /// `<project>/.cursor`
    pub fn cursor_dir(&self) -> PathBuf {
        self.project_dir.join(CURSOR_DIR)
    }

    /// `<project>/.cursor/commands`
    pub fn commands_dir(&self) -> PathBuf {
        self.cursor_dir().join(COMMANDS_DIR)
    }

    /// `<project>/.cursor/mcp.json`
    pub fn project_mcp(&self) -> PathBuf {
        self.cursor_dir().join(MCP_FILE)
    }
}

/// Get the user-global MCP config (~/.cursor/mcp.json)
pub fn global_mcp_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(CURSOR_DIR).join(MCP_FILE))
}

/// Locate the bundled command tree
///
/// Checked in order:
/// - `<exe dir>/commands`
/// - `<exe dir>/../share/cursor-full-flow/commands`
/// - `commands/` in the source checkout this binary was built from
pub fn bundled_commands_dir() -> PathBuf {
    let checkout = Path::new(env!("CARGO_MANIFEST_DIR")).join(SOURCE_DIR);

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let mut candidates = Vec::new();
    if let Some(dir) = exe_dir {
        candidates.push(dir.join(SOURCE_DIR));
        candidates.push(
            dir.join("..")
                .join("share")
                .join(env!("CARGO_PKG_NAME"))
                .join(SOURCE_DIR),
        );
    }

    candidates
        .into_iter()
        .find(|c| c.is_dir())
        .unwrap_or(checkout)
}
