//! Command bundles and the categories they are built from

use std::fmt;

/// A directory of command files in the bundled source tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Workflow,
    Jira,
    Pr,
    Analysis,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Workflow,
        Category::Jira,
        Category::Pr,
        Category::Analysis,
    ];

    /// Directory name under the command source root
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Workflow => "workflow",
            Self::Jira => "jira",
            Self::Pr => "pr",
            Self::Analysis => "analysis",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Workflow => "🔄",
            Self::Jira => "📋",
            Self::Pr => "🔍",
            Self::Analysis => "📈",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A curated set of command categories installed together
#[derive(Debug, PartialEq, Eq)]
pub struct Bundle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub categories: &'static [Category],
    /// Number of command files the bundle is expected to install
    pub count: usize,
}

static BUNDLES: [Bundle; 3] = [
    Bundle {
        id: "minimal",
        name: "Minimal (Core Workflow)",
        description: "Essential workflow commands only",
        categories: &[Category::Workflow],
        count: 5,
    },
    Bundle {
        id: "standard",
        name: "Standard (Workflow + Jira)",
        description: "Workflow automation with Jira integration",
        categories: &[Category::Workflow, Category::Jira],
        count: 11,
    },
    Bundle {
        id: "complete",
        name: "Complete (All Commands)",
        description: "Full suite including PR and analysis tools",
        categories: &[
            Category::Workflow,
            Category::Jira,
            Category::Pr,
            Category::Analysis,
        ],
        count: 22,
    },
];

/// Bundle used whenever a selection cannot be resolved
pub const DEFAULT_BUNDLE: &str = "complete";

impl Bundle {
    /// All bundles in catalog order
    pub fn all() -> &'static [Bundle] {
        &BUNDLES
    }

    pub fn find(id: &str) -> Option<&'static Bundle> {
        BUNDLES.iter().find(|b| b.id == id)
    }

    /// The richest bundle, used as the fallback for every failed lookup
    pub fn complete() -> &'static Bundle {
        Self::find(DEFAULT_BUNDLE).unwrap_or(&BUNDLES[BUNDLES.len() - 1])
    }

    /// Resolve a bundle identifier, falling back to `complete` when unknown
    pub fn resolve(id: &str) -> &'static Bundle {
        Self::find(id.trim()).unwrap_or_else(Self::complete)
    }

    /// Resolve a 1-based menu selection
    ///
    /// Anything that is not a number in `1..=len` resolves to `complete`,
    /// so a malformed answer never aborts the installation.
    pub fn from_ordinal(input: &str) -> &'static Bundle {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| BUNDLES.get(idx))
            .unwrap_or_else(Self::complete)
    }

    /// 1-based position in the catalog
    pub fn ordinal(&self) -> usize {
        BUNDLES
            .iter()
            .position(|b| b.id == self.id)
            .map(|idx| idx + 1)
            .unwrap_or(BUNDLES.len())
    }

    /// Human-facing label, e.g. "Standard (Workflow + Jira) (11 commands)"
    pub fn label(&self) -> String {
        format!("{} ({} commands)", self.name, self.count)
    }

    /// Category directory names, in install order
    pub fn category_names(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.as_str()).collect()
    }
}
