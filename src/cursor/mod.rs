//! On-disk Cursor project artifacts

pub mod commands_dir;
pub mod mcp_json;

pub use commands_dir::{ensure_dir, install_commands, InstallReport};
pub use mcp_json::{read_existing_integrations, write_integrations, IntegrationSetup};
