//! MCP configuration (mcp.json) reading and merging
//!
//! Document shape:
//! ```json
//! { "mcpServers": { "<id>": { "command": "npx", "args": ["-y", "<pkg>"], "env": {} } } }
//! ```
//! Writes merge into whatever is already there. Entries this run did not
//! configure, and any other top-level keys, are left as they were.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::Integration;

pub const SERVERS_KEY: &str = "mcpServers";

/// Why an existing config file could not be used
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-integration result of the setup wizard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationSetup {
    pub id: String,
    pub enabled: bool,
    /// Already present in the user-global config; never rewritten
    pub existing: bool,
    /// Collected credentials, only non-empty answers
    pub env: BTreeMap<String, String>,
}

impl IntegrationSetup {
    /// Integration found in the global config
    pub fn existing(id: &str) -> Self {
        Self {
            id: id.to_string(),
            enabled: true,
            existing: true,
            env: BTreeMap::new(),
        }
    }

    /// Integration the user chose not to configure
    pub fn declined(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    /// Integration the user configured in this run
    pub fn configured(id: &str, env: BTreeMap<String, String>) -> Self {
        Self {
            id: id.to_string(),
            enabled: true,
            existing: false,
            env,
        }
    }

    /// Whether this setup produces an entry in the project config
    pub fn should_write(&self) -> bool {
        self.enabled && !self.existing && !self.env.is_empty()
    }
}

/// Parse a JSON file, returning `default` when it does not exist
///
/// Read and parse failures are returned so callers decide explicitly how to
/// treat them.
pub fn parse_or_default(path: &Path, default: Value) -> Result<Value, ConfigFileError> {
    if !path.exists() {
        return Ok(default);
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Integrations already configured in a (global) mcp.json, keyed by id
///
/// Best effort: a missing or broken file simply means nothing is configured.
pub fn read_existing_integrations(path: &Path) -> Map<String, Value> {
    match parse_or_default(path, Value::Null) {
        Ok(Value::Object(mut doc)) => match doc.remove(SERVERS_KEY) {
            Some(Value::Object(servers)) => servers,
            _ => Map::new(),
        },
        _ => Map::new(),
    }
}

/// Merge newly configured integrations into the mcp.json at `path`
///
/// Returns the ids that were written.
pub fn write_integrations(path: &Path, setups: &[IntegrationSetup]) -> Result<Vec<String>> {
    let mut doc = match parse_or_default(path, Value::Null) {
        Ok(Value::Object(doc)) => doc,
        // Absent, unparseable or not an object: start from an empty document
        _ => Map::new(),
    };

    let servers = doc
        .entry(SERVERS_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    if !servers.is_object() {
        *servers = Value::Object(Map::new());
    }

    let mut written = Vec::new();
    if let Some(servers) = servers.as_object_mut() {
        for setup in setups.iter().filter(|s| s.should_write()) {
            let Some(integration) = Integration::find(&setup.id) else {
                continue;
            };
            let descriptor = serde_json::to_value(integration.launch_descriptor(&setup.env))?;
            servers.insert(setup.id.clone(), descriptor);
            written.push(setup.id.clone());
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create: {}", parent.display()))?;
        }
    }

    let mut content = serde_json::to_string_pretty(&doc)?;
    content.push('\n');
    fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))?;

    Ok(written)
}
