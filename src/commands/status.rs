//! Status command - Show what is installed in the current project

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::path::PathBuf;

use crate::catalog::Integration;
use crate::config::{Locations, VERSION};
use crate::cursor::{self, commands_dir};
use crate::ui;

/// Installation state of a project
#[derive(Debug, Default)]
pub struct Status {
    /// Installed commands directory
    pub commands_dir: PathBuf,

    /// Installed command names, extension stripped
    pub commands: Vec<String>,

    /// Integration ids found in the global MCP config
    pub integrations: Vec<String>,
}

/// Read the installation state, `None` when nothing is installed
pub fn status(locations: &Locations) -> Result<Option<Status>> {
    let dir = locations.commands_dir();
    if !dir.is_dir() {
        return Ok(None);
    }

    let commands = commands_dir::installed_commands(&dir)?;
    let integrations = locations
        .global_mcp
        .as_deref()
        .map(cursor::read_existing_integrations)
        .unwrap_or_default()
        .keys()
        .cloned()
        .collect();

    Ok(Some(Status {
        commands_dir: dir,
        commands,
        integrations,
    }))
}

/// Format status for display
pub fn format_status(status: &Status) -> String {
    let mut lines = vec![];

    lines.push(format!("{} {}", "Version:".cyan(), VERSION));
    lines.push(format!(
        "{} {} installed",
        "Commands:".cyan(),
        status.commands.len()
    ));
    lines.push(format!(
        "{} {}",
        "Location:".cyan(),
        status.commands_dir.display()
    ));
    lines.push(String::new());

    lines.push(format!("{}", "Installed Commands:".bold()));
    for name in &status.commands {
        lines.push(format!("  - /{}", name));
    }
    lines.push(String::new());

    lines.push(format!(
        "{}",
        format!("MCPs Configured ({}):", status.integrations.len()).bold()
    ));

    if !status.integrations.is_empty() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![Cell::new(""), Cell::new("MCP"), Cell::new("Status")]);

        for id in &status.integrations {
            let (icon, name) = match Integration::find(id) {
                Some(i) => (i.icon, i.name.to_string()),
                None => ("🔌", id.clone()),
            };
            table.add_row(vec![
                Cell::new(icon),
                Cell::new(name),
                Cell::new("✓ Active"),
            ]);
        }
        lines.push(table.to_string());
    }

    lines.join("\n")
}

/// Execute the status command
pub fn execute(locations: &Locations) -> Result<()> {
    match status(locations)? {
        Some(status) => {
            ui::banner("📊 FULL-FLOW STATUS");
            println!();
            println!("{}", format_status(&status));
            println!();
        }
        None => ui::warn(&format!(
            "Full-Flow not installed. Run: {} init",
            env!("CARGO_PKG_NAME")
        )),
    }
    Ok(())
}
