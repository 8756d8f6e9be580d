//! MCP integrations the Full-Flow commands rely on

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Launcher used for every integration entry
pub const LAUNCHER: &str = "npx";

/// Step-by-step instructions for obtaining an integration's credentials
#[derive(Debug)]
pub struct Guide {
    pub title: &'static str,
    pub steps: &'static [&'static str],
    pub url: &'static str,
}

/// An external tool integration that can be registered in mcp.json
#[derive(Debug)]
pub struct Integration {
    /// Key under `mcpServers`
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Needed for the full command set to work
    pub required: bool,
    /// npm package launched by the IDE
    pub package: &'static str,
    /// Credential fields, prompted in this order
    pub env_vars: &'static [&'static str],
    pub guide: Guide,
}

/// Server launch entry as stored in mcp.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchDescriptor {
    pub command: String,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
}

static INTEGRATIONS: [Integration; 2] = [
    Integration {
        id: "github",
        name: "GitHub",
        icon: "🐙",
        description: "PR management, CI status, code review",
        required: true,
        package: "@modelcontextprotocol/server-github",
        env_vars: &["GITHUB_PERSONAL_ACCESS_TOKEN"],
        guide: Guide {
            title: "Get GitHub Personal Access Token",
            steps: &[
                "1. Go to: https://github.com/settings/tokens",
                "2. Click \"Generate new token (classic)\"",
                "3. Select scopes: repo, read:org, read:user, workflow",
                "4. Copy the token (starts with ghp_)",
            ],
            url: "https://github.com/settings/tokens",
        },
    },
    Integration {
        id: "jira",
        name: "Jira/Atlassian",
        icon: "📋",
        description: "Ticket fetching, branch naming, test instructions",
        required: true,
        package: "@aashari/mcp-server-atlassian-jira",
        env_vars: &[
            "ATLASSIAN_SITE_NAME",
            "ATLASSIAN_USER_EMAIL",
            "ATLASSIAN_API_TOKEN",
        ],
        guide: Guide {
            title: "Get Atlassian API Token",
            steps: &[
                "1. Go to: https://id.atlassian.com/manage-profile/security/api-tokens",
                "2. Click \"Create API token\"",
                "3. Label it (e.g., \"Cursor Full-Flow\")",
                "4. Copy the token",
                "5. Site name is your Jira subdomain (e.g., \"your-company\" from your-company.atlassian.net)",
            ],
            url: "https://id.atlassian.com/manage-profile/security/api-tokens",
        },
    },
];

impl Integration {
    /// All integrations in prompt order
    pub fn all() -> &'static [Integration] {
        &INTEGRATIONS
    }

    pub fn find(id: &str) -> Option<&'static Integration> {
        INTEGRATIONS.iter().find(|i| i.id == id)
    }

    /// Build the `npx -y <package>` entry carrying the collected credentials
    pub fn launch_descriptor(&self, env: &BTreeMap<String, String>) -> LaunchDescriptor {
        LaunchDescriptor {
            command: LAUNCHER.to_string(),
            args: vec!["-y".to_string(), self.package.to_string()],
            env: env.clone(),
        }
    }
}
