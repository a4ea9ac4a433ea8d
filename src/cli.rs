//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::{Path, PathBuf};

use crate::paths::Scope;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default())
}

/// Generate PDFs of AppleScript dictionaries for installed applications
#[derive(Parser, Debug)]
#[command(
    name = "scriptdocs-pdf",
    author,
    version,
    styles = styles(),
    about = "Render the scripting dictionaries of installed applications as PDFs",
    long_about = "Scans application folders for scriptable apps, converts each scripting \
                  definition into an Objective-C scripting bridge header with sdp, and renders \
                  the header to <output>/<App Name>.pdf. PDFs newer than their sources are \
                  left alone.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  scriptdocs-pdf\n    \
                  scriptdocs-pdf --user-only\n    \
                  scriptdocs-pdf --output ~/Documents/Dictionaries\n    \
                  scriptdocs-pdf --search-root ./MyApps"
)]
pub struct PdfCli {
    /// Directory receiving the PDFs (defaults to <root>/AppScripts)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Only scan /Applications and ~/Applications
    #[arg(long, conflicts_with = "system_only")]
    pub user_only: bool,

    /// Only scan applications shipped with the system
    #[arg(long)]
    pub system_only: bool,

    /// Scan this directory instead of the standard folders (repeatable)
    #[arg(
        long = "search-root",
        value_name = "DIR",
        conflicts_with_all = ["user_only", "system_only"]
    )]
    pub search_roots: Vec<PathBuf>,
}

impl PdfCli {
    /// Scope selected by the flags
    pub fn scope(&self) -> Scope {
        if self.user_only {
            Scope::User
        } else if self.system_only {
            Scope::System
        } else {
            Scope::All
        }
    }

    /// Directories to scan, in order
    pub fn roots(&self, home: Option<&Path>) -> Vec<PathBuf> {
        if self.search_roots.is_empty() {
            self.scope().search_roots(home)
        } else {
            self.search_roots.clone()
        }
    }
}

/// Export generated PDFs to plain text
#[derive(Parser, Debug)]
#[command(
    name = "scriptdocs-text",
    author,
    version,
    styles = styles(),
    about = "Extract plain text from generated dictionary PDFs",
    long_about = "Converts every PDF in <root>/AppScripts into plain text at \
                  <root>/AppScripts/text/<Name>.txt and writes a README.md index linking the \
                  exports. Text files newer than their PDF are skipped."
)]
pub struct TextCli {}
