//! Workspace path utilities and constants
//!
//! This module resolves where helper sources live, where helpers are built
//! and where generated dictionaries are written, and which directories are
//! searched for application bundles.

use std::path::{Path, PathBuf};

use crate::error::{Result, ScriptDocsError};

/// Environment variable overriding the workspace root
pub const ROOT_ENV: &str = "SCRIPTDOCS_ROOT";

/// Environment variable overriding the helper tools directory
pub const TOOLS_DIR_ENV: &str = "SCRIPTDOCS_TOOLS_DIR";

/// Helper sources directory under the workspace root
pub const TOOLS_DIR: &str = "tools";

/// Build directory for compiled helpers, under the tools directory
pub const BUILD_DIR: &str = ".build";

/// Default directory for generated PDFs, under the workspace root
pub const OUTPUT_DIR: &str = "AppScripts";

/// Text exports subdirectory, under the PDF directory
pub const TEXT_DIR: &str = "text";

/// Which application directories to scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Every known application directory
    #[default]
    All,
    /// `/Applications` and `~/Applications`
    User,
    /// Applications shipped with the operating system
    System,
}

impl Scope {
    /// Search roots for this scope, in scan order
    pub fn search_roots(self, home: Option<&Path>) -> Vec<PathBuf> {
        let user_apps = home.map(|h| h.join("Applications"));
        let system = [
            PathBuf::from("/System/Applications"),
            PathBuf::from("/System/Applications/Utilities"),
            PathBuf::from("/System/Library/CoreServices"),
        ];

        let mut roots = Vec::new();
        match self {
            Scope::All => {
                roots.push(PathBuf::from("/Applications"));
                roots.extend(system);
                roots.extend(user_apps);
            }
            Scope::User => {
                roots.push(PathBuf::from("/Applications"));
                roots.extend(user_apps);
            }
            Scope::System => roots.extend(system),
        }
        roots
    }
}

/// Resolved workspace locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Workspace root
    pub root: PathBuf,
    /// Directory holding the Swift helper sources
    pub tools_dir: PathBuf,
}

impl Settings {
    /// Settings rooted at `root`, with the default tools directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let tools_dir = root.join(TOOLS_DIR);
        Self { root, tools_dir }
    }

    /// Resolve settings from the environment
    ///
    /// Uses `SCRIPTDOCS_ROOT` (default: current directory) and
    /// `SCRIPTDOCS_TOOLS_DIR` (default: `<root>/tools`).
    pub fn from_env() -> Result<Self> {
        let root = match std::env::var_os(ROOT_ENV) {
            Some(root) if !root.is_empty() => PathBuf::from(root),
            _ => std::env::current_dir().map_err(|e| ScriptDocsError::ConfigInvalid {
                message: format!("Failed to get current directory: {e}"),
            })?,
        };
        let root = dunce::canonicalize(&root).unwrap_or(root);

        let mut settings = Self::with_root(root);
        if let Some(tools) = std::env::var_os(TOOLS_DIR_ENV).filter(|t| !t.is_empty()) {
            settings.tools_dir = PathBuf::from(tools);
        }
        Ok(settings)
    }

    /// Build directory for compiled helpers
    pub fn build_dir(&self) -> PathBuf {
        self.tools_dir.join(BUILD_DIR)
    }

    /// Default PDF output directory
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    /// Render `path` relative to the workspace root when it lies inside it
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Text export directory for a PDF directory
pub fn text_dir(pdf_dir: &Path) -> PathBuf {
    pdf_dir.join(TEXT_DIR)
}
