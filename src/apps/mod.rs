//! Application bundle discovery
//!
//! Walks search roots for `.app` bundles, reads each bundle's `Info.plist`
//! and yields every application at most once, keyed by bundle identifier
//! (or canonical path when the bundle has no identifier).

pub mod resources;

pub use resources::{ScriptResource, find_script_resources};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, info_plist_unreadable};
use crate::ui;

/// Bundle directory suffix
pub const APP_SUFFIX: &str = ".app";

/// `Info.plist` key holding the scripting definition
pub const SCRIPTING_DEFINITION_KEY: &str = "OSAScriptingDefinition";

/// How an application declares its scripting definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptingDefinition {
    /// sdef XML embedded in `Info.plist`
    Inline(Vec<u8>),
    /// Path to an sdef, absolute or relative to `Contents/Resources`
    Reference(String),
}

/// A discovered application bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRecord {
    /// Bundle path
    pub path: PathBuf,
    /// Display name
    pub name: String,
    /// `CFBundleIdentifier`, when present
    pub bundle_id: Option<String>,
    /// Declared scripting definition, when present
    pub scripting_definition: Option<ScriptingDefinition>,
}

impl AppRecord {
    /// Build a record from a parsed `Info.plist`
    ///
    /// The name falls back from `CFBundleDisplayName` to `CFBundleName` to
    /// the bundle's file stem.
    pub fn from_info(path: &Path, info: &plist::Dictionary) -> Self {
        let string = |key: &str| {
            info.get(key)
                .and_then(plist::Value::as_string)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let name = string("CFBundleDisplayName")
            .or_else(|| string("CFBundleName"))
            .unwrap_or_else(|| bundle_stem(path));

        let scripting_definition = match info.get(SCRIPTING_DEFINITION_KEY) {
            Some(plist::Value::Data(data)) if !data.is_empty() => {
                Some(ScriptingDefinition::Inline(data.clone()))
            }
            Some(plist::Value::String(s)) if !s.is_empty() => {
                Some(ScriptingDefinition::Reference(s.clone()))
            }
            _ => None,
        };

        Self {
            path: path.to_path_buf(),
            name,
            bundle_id: string("CFBundleIdentifier"),
            scripting_definition,
        }
    }

    /// Identity used for deduplication
    pub fn identity(&self) -> String {
        match &self.bundle_id {
            Some(id) => id.clone(),
            None => dunce::canonicalize(&self.path)
                .unwrap_or_else(|_| self.path.clone())
                .display()
                .to_string(),
        }
    }

    /// Bundle file stem (`Mail` for `Mail.app`)
    pub fn stem(&self) -> String {
        bundle_stem(&self.path)
    }

    /// `Contents/Info.plist`
    pub fn info_plist_path(&self) -> PathBuf {
        info_plist_path(&self.path)
    }

    /// `Contents/Resources`
    pub fn resources_dir(&self) -> PathBuf {
        self.path.join("Contents").join("Resources")
    }
}

fn bundle_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// `Contents/Info.plist` of a bundle
pub fn info_plist_path(app: &Path) -> PathBuf {
    app.join("Contents").join("Info.plist")
}

/// Load a bundle's `Info.plist`
///
/// Returns `Ok(None)` when the bundle has none.
pub fn load_info_plist(app: &Path) -> Result<Option<plist::Dictionary>> {
    let path = info_plist_path(app);
    if !path.exists() {
        return Ok(None);
    }

    let value = plist::Value::from_file(&path)
        .map_err(|e| info_plist_unreadable(app.display().to_string(), e.to_string()))?;
    value.into_dictionary().map(Some).ok_or_else(|| {
        info_plist_unreadable(app.display().to_string(), "root is not a dictionary")
    })
}

/// Lazily discover applications under `roots`
pub fn discover<I>(roots: I) -> ApplicationIter
where
    I: IntoIterator<Item = PathBuf>,
{
    ApplicationIter {
        roots: roots.into_iter().collect::<Vec<_>>().into_iter(),
        walker: None,
        seen: HashSet::new(),
    }
}

/// Iterator over discovered applications
///
/// Roots are scanned in order, entries within a root by file name. Each
/// identity is yielded once across all roots.
pub struct ApplicationIter {
    roots: std::vec::IntoIter<PathBuf>,
    walker: Option<walkdir::IntoIter>,
    seen: HashSet<String>,
}

impl ApplicationIter {
    /// Identities yielded so far
    pub fn seen(&self) -> &HashSet<String> {
        &self.seen
    }

    fn visit(&mut self, path: &Path) -> Option<AppRecord> {
        let is_bundle = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().ends_with(APP_SUFFIX));
        if !is_bundle || !path.is_dir() {
            return None;
        }

        let info = match load_info_plist(path) {
            Ok(Some(info)) => info,
            Ok(None) => return None,
            Err(e) => {
                ui::warn(e.to_string());
                return None;
            }
        };

        let app = AppRecord::from_info(path, &info);
        if self.seen.insert(app.identity()) {
            Some(app)
        } else {
            None
        }
    }
}

impl Iterator for ApplicationIter {
    type Item = AppRecord;

    fn next(&mut self) -> Option<AppRecord> {
        loop {
            let Some(walker) = self.walker.as_mut() else {
                let root = self.roots.next()?;
                if root.exists() {
                    self.walker = Some(
                        WalkDir::new(root)
                            .follow_links(false)
                            .sort_by_file_name()
                            .into_iter(),
                    );
                }
                continue;
            };

            let Some(entry) = walker.next() else {
                self.walker = None;
                continue;
            };
            let Ok(entry) = entry else {
                continue;
            };

            if let Some(app) = self.visit(entry.path()) {
                return Some(app);
            }
        }
    }
}
