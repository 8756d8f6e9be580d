//! cursor-full-flow: installer for the Full-Flow Cursor IDE workflow
//!
//! Jira → Code → PR automation commands plus GitHub and Jira MCP setup.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use cursor_full_flow::commands;
use cursor_full_flow::config::Locations;
use cursor_full_flow::ui;

#[derive(Parser)]
#[command(name = "cursor-full-flow")]
#[command(about = "End-to-End Development Workflow for Cursor IDE", long_about = None)]
#[command(version)]
#[command(after_help = "Examples:
  cursor-full-flow                    Interactive install
  cursor-full-flow --bundle complete  Install all commands
  cursor-full-flow status             Check installation

After installation:
  /full-flow RBW-1234     Complete Jira → PR workflow
  /jira-fetch RBW-1234    Fetch ticket context
  /pr-review 12345        Review a PR")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Non-interactive mode (complete bundle, no MCP prompts)
    #[arg(short, long, global = true)]
    yes: bool,

    /// Skip MCP configuration
    #[arg(long, global = true)]
    skip_mcp: bool,

    /// Select bundle: minimal, standard, complete
    #[arg(long, global = true, value_name = "BUNDLE")]
    bundle: Option<String>,

    /// Project directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    project: Option<PathBuf>,

    /// Directory holding the bundled command categories
    #[arg(long, global = true, value_name = "DIR")]
    commands_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install commands (default)
    Init,

    /// Show current configuration
    Status,

    /// List all available commands
    List,

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let locations = Locations::resolve(cli.project, cli.commands_dir)?;

    match cli.command.unwrap_or(Commands::Init) {
        Commands::Init => {
            let options = commands::init::InitOptions {
                yes: cli.yes,
                skip_mcp: cli.skip_mcp,
                bundle: cli.bundle,
            };
            commands::init::execute(&locations, &options)?;
        }

        Commands::Status => {
            commands::status::execute(&locations)?;
        }

        Commands::List => {
            commands::list::execute(&locations)?;
        }

        Commands::Unknown(args) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            ui::error(&format!("Unknown command: {}", name));
            eprintln!("Run \"cursor-full-flow help\" for usage");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
