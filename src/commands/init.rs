//! Init command - Interactive installer
//!
//! Runs straight through, no going back:
//! 1. bundle selection
//! 2. MCP integration setup (skippable)
//! 3. command installation and mcp.json merge
//! 4. summary

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use super::prompt::{PromptSpec, Prompter};
use crate::catalog::{Bundle, Integration};
use crate::config::{Locations, VERSION};
use crate::cursor::{self, commands_dir, InstallReport, IntegrationSetup};
use crate::ui;

const DOCS_URL: &str = "https://github.com/sharath317/cursor-full-flow";

/// Flags that shape the wizard
#[derive(Debug, Default, Clone)]
pub struct InitOptions {
    /// Non-interactive: complete bundle, no MCP prompts
    pub yes: bool,
    /// Skip the MCP setup step
    pub skip_mcp: bool,
    /// Bundle id chosen on the command line
    pub bundle: Option<String>,
}

/// How far an integration got during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStatus {
    /// Found in the global config, left alone
    Existing,
    /// Every credential field supplied
    Configured,
    /// Some credential fields left empty
    Partial,
    Declined,
}

impl SetupStatus {
    pub fn classify(setup: &IntegrationSetup, integration: &Integration) -> Self {
        if setup.existing {
            Self::Existing
        } else if !setup.enabled {
            Self::Declined
        } else if setup.env.len() == integration.env_vars.len() {
            Self::Configured
        } else {
            Self::Partial
        }
    }
}

/// What an init run did
#[derive(Debug)]
pub struct InitSummary {
    pub bundle: &'static Bundle,
    pub report: InstallReport,
    pub setups: Vec<IntegrationSetup>,
    /// Integrations written to the project mcp.json this run
    pub written: Vec<String>,
}

impl InitSummary {
    /// Integrations enabled, including ones already configured globally
    pub fn integrations_enabled(&self) -> usize {
        self.setups.iter().filter(|s| s.enabled).count()
    }
}

/// Execute the init command against the terminal
pub fn execute(locations: &Locations, options: &InitOptions) -> Result<()> {
    let mut prompter = Prompter::stdio();
    let summary = run(locations, options, &mut prompter)?;
    print_summary(locations, &summary);
    Ok(())
}

/// Run the wizard with the given prompter
pub fn run<R: BufRead, W: Write>(
    locations: &Locations,
    options: &InitOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<InitSummary> {
    ui::banner(&format!("🔄 CURSOR FULL-FLOW v{}", VERSION));
    println!("End-to-End Development Workflow: Jira → Code → PR");

    let bundle = select_bundle(options, prompter)?;

    let setups = if options.skip_mcp || options.yes {
        Vec::new()
    } else {
        let existing = locations
            .global_mcp
            .as_deref()
            .map(cursor::read_existing_integrations)
            .unwrap_or_default();
        configure_integrations(&existing, prompter)?
    };

    ui::header("📥 Installing Commands");

    if !locations.source_dir.is_dir() {
        ui::warn(&format!(
            "Bundled commands not found at {}",
            locations.source_dir.display()
        ));
    }

    let destination = locations.commands_dir();
    ui::info(&format!(
        "Installing {} into {}",
        bundle.label(),
        destination.display()
    ));
    cursor::ensure_dir(&destination)?;
    let report = cursor::install_commands(
        &locations.source_dir,
        &destination,
        &bundle.category_names(),
    )?;

    let written = if setups.iter().any(|s| s.enabled) {
        cursor::write_integrations(&locations.project_mcp(), &setups)?
    } else {
        Vec::new()
    };

    Ok(InitSummary {
        bundle,
        report,
        setups,
        written,
    })
}

/// Step 1: pick a bundle from the flag, the non-interactive default, or a prompt
fn select_bundle<R: BufRead, W: Write>(
    options: &InitOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<&'static Bundle> {
    ui::header("📦 Select Command Bundle");

    for bundle in Bundle::all() {
        println!("  {}. {}", bundle.ordinal(), bundle.name.bold());
        println!("     {} ({} commands)\n", bundle.description, bundle.count);
    }

    let bundle = if let Some(id) = &options.bundle {
        let bundle = Bundle::resolve(id);
        if bundle.id != id.trim() {
            ui::warn(&format!("Unknown bundle '{}', using {}", id, bundle.id));
        }
        bundle
    } else if options.yes {
        Bundle::complete()
    } else {
        let spec = PromptSpec::new(format!("Select bundle (1-{})", Bundle::all().len()))
            .with_default(Bundle::complete().ordinal().to_string());
        Bundle::from_ordinal(&prompter.ask(&spec)?)
    };

    ui::success(&format!("Selected: {}", bundle.name));
    Ok(bundle)
}

/// Step 2: walk every integration, collecting credentials for the ones
/// not already configured globally
fn configure_integrations<R: BufRead, W: Write>(
    existing: &Map<String, Value>,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<IntegrationSetup>> {
    ui::header("📡 MCP Configuration");
    println!("Full-Flow requires GitHub and Jira MCPs for complete automation.");

    let mut setups = Vec::new();

    for integration in Integration::all() {
        println!("\n{} {}", integration.icon, integration.name.bold());
        println!("   {}", integration.description);

        if existing.contains_key(integration.id) {
            ui::success("   Already configured in ~/.cursor/mcp.json");
            setups.push(IntegrationSetup::existing(integration.id));
            continue;
        }

        let required = if integration.required {
            format!(" {}", "(required)".yellow())
        } else {
            String::new()
        };
        let label = format!("   Configure {}?{} (Y/n)", integration.name, required);

        if !prompter.confirm(&label, true)? {
            if integration.required {
                ui::warn(&format!(
                    "   Skipped {} - some commands may not work",
                    integration.name
                ));
            }
            setups.push(IntegrationSetup::declined(integration.id));
            continue;
        }

        print_guide(integration);

        let specs: Vec<PromptSpec> = integration
            .env_vars
            .iter()
            .map(|var| PromptSpec::new(format!("     {}", var)))
            .collect();
        let answers = prompter.ask_all(&specs)?;

        let env: BTreeMap<String, String> = integration
            .env_vars
            .iter()
            .zip(answers)
            .filter(|(_, value)| !value.is_empty())
            .map(|(var, value)| (var.to_string(), value))
            .collect();

        let setup = IntegrationSetup::configured(integration.id, env);
        match SetupStatus::classify(&setup, integration) {
            SetupStatus::Configured => {
                ui::success(&format!("   {} configured", integration.name))
            }
            _ => ui::warn(&format!("   {} partially configured", integration.name)),
        }
        setups.push(setup);
    }

    Ok(setups)
}

fn print_guide(integration: &Integration) {
    let guide = &integration.guide;
    println!("\n   {}", format!("Guide: {}", guide.title).bold());
    for step in guide.steps {
        println!("   {}", step);
    }
    println!("   {}\n", format!("More info: {}", guide.url).cyan());
}

/// Step 4
fn print_summary(locations: &Locations, summary: &InitSummary) {
    ui::banner_success("✓ INSTALLATION COMPLETE");
    println!();
    ui::field("Commands installed", summary.report.installed_count());
    if summary.report.skipped_count() > 0 {
        ui::field("Already present", summary.report.skipped_count());
    }
    ui::field("MCPs configured", summary.integrations_enabled());
    ui::field("Location", locations.commands_dir().display());

    for setup in &summary.setups {
        let Some(integration) = Integration::find(&setup.id) else {
            continue;
        };
        if SetupStatus::classify(setup, integration) == SetupStatus::Partial {
            ui::warn(&format!(
                "{} is missing credentials; edit {} to finish",
                integration.name,
                locations.project_mcp().display()
            ));
        }
    }

    println!("\n{}\n", "Get Started:".bold());
    for (command, about) in [
        ("/full-flow RBW-1234", "Complete Jira → PR workflow"),
        ("/jira-fetch RBW-1234", "Fetch ticket context"),
        ("/pr-review 12345", "Review a PR"),
        ("/plan-and-budget", "Scope planning with file budget"),
    ] {
        println!("  {:<24} {}", command.cyan(), about);
    }

    println!("\n{}", "Command Categories:".bold());
    for category in summary.bundle.categories {
        let names = commands_dir::available_commands(&locations.source_dir, category.as_str())
            .unwrap_or_default();
        let sample: Vec<String> = names.iter().take(2).map(|n| format!("/{}", n)).collect();
        let sample = if names.len() > sample.len() {
            format!("{}, etc.", sample.join(", "))
        } else {
            sample.join(", ")
        };
        println!("  {} {}: {}", category.icon(), category, sample);
    }

    println!("\n{}\n", format!("Documentation: {}", DOCS_URL).dimmed());
}
