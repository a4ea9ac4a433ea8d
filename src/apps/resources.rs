//! Scripting definition lookup
//!
//! Applications ship their dictionaries in several ways. The lookup tries,
//! in order:
//!
//! 1. sdef XML embedded in `Info.plist` (materialized to a scratch file)
//! 2. an `OSAScriptingDefinition` path reference; a dangling reference ends
//!    the lookup
//! 3. `*.sdef` files under `Contents/Resources`, English localization first,
//!    then shallower paths
//! 4. a legacy `.scriptSuite` with its `.scriptTerminology` companion

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{AppRecord, SCRIPTING_DEFINITION_KEY, ScriptingDefinition};
use crate::error::{Result, file_write_failed};
use crate::ui;

/// File name used for an inline definition
pub const INLINE_SDEF_NAME: &str = "dictionary.sdef";

/// Localization folders treated as English
const ENGLISH_LOCALIZATIONS: &[&str] = &["en", "English"];

/// Resolved scripting definition input for `sdp`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptResource {
    /// Inline definition written to a scratch file
    Inline { sdef: PathBuf, info_plist: PathBuf },
    /// A single `.sdef` file
    Sdef(PathBuf),
    /// Legacy suite and terminology pair
    SuitePair { suite: PathBuf, terminology: PathBuf },
}

impl ScriptResource {
    /// Files passed to `sdp`
    pub fn inputs(&self) -> Vec<&Path> {
        match self {
            Self::Inline { sdef, .. } => vec![sdef.as_path()],
            Self::Sdef(path) => vec![path.as_path()],
            Self::SuitePair { suite, terminology } => vec![suite.as_path(), terminology.as_path()],
        }
    }

    /// Files whose modification times decide whether output is stale
    pub fn freshness_sources(&self) -> Vec<&Path> {
        match self {
            Self::Inline { info_plist, .. } => vec![info_plist.as_path()],
            _ => self.inputs(),
        }
    }
}

/// Resolve the scripting definition of `app`
///
/// Inline definitions are written into `temp_dir`. Returns `Ok(None)` when
/// the application has no usable definition.
pub fn find_script_resources(app: &AppRecord, temp_dir: &Path) -> Result<Option<ScriptResource>> {
    let resource_root = app.resources_dir();

    match &app.scripting_definition {
        Some(ScriptingDefinition::Inline(data)) => {
            let sdef = temp_dir.join(INLINE_SDEF_NAME);
            fs::write(&sdef, data)
                .map_err(|e| file_write_failed(sdef.display().to_string(), e.to_string()))?;
            return Ok(Some(ScriptResource::Inline {
                sdef,
                info_plist: app.info_plist_path(),
            }));
        }
        Some(ScriptingDefinition::Reference(reference)) => {
            let candidate = Path::new(reference);
            let candidate = if candidate.is_absolute() {
                candidate.to_path_buf()
            } else {
                resource_root.join(candidate)
            };
            if candidate.exists() {
                return Ok(Some(ScriptResource::Sdef(candidate)));
            }

            ui::warn(format!(
                "{}: Info.plist references {SCRIPTING_DEFINITION_KEY} '{reference}', \
                 but the resource was not found.",
                app.stem()
            ));
            return Ok(None);
        }
        None => {}
    }

    if !resource_root.is_dir() {
        return Ok(None);
    }

    if let Some(sdef) = best_sdef(&resource_root) {
        return Ok(Some(ScriptResource::Sdef(sdef)));
    }

    Ok(suite_pair(&resource_root))
}

/// Pick the preferred `.sdef` under `resource_root`
fn best_sdef(resource_root: &Path) -> Option<PathBuf> {
    let mut candidates: Vec<(u8, usize, PathBuf)> = files_with_extension(resource_root, "sdef")
        .into_iter()
        .map(|path| {
            let relative = path.strip_prefix(resource_root).unwrap_or(&path);
            (
                localization_rank(relative),
                relative.components().count(),
                path.clone(),
            )
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next().map(|(_, _, path)| path)
}

/// 0 for English localizations, 1 for unlocalized paths, 2 for others
fn localization_rank(relative: &Path) -> u8 {
    let mut rank = 1;
    for component in relative.components() {
        let name = component.as_os_str().to_string_lossy();
        if let Some(language) = name.strip_suffix(".lproj") {
            if ENGLISH_LOCALIZATIONS.contains(&language) {
                return 0;
            }
            rank = 2;
        }
    }
    rank
}

/// First `.scriptSuite` with a `.scriptTerminology` beside it
fn suite_pair(resource_root: &Path) -> Option<ScriptResource> {
    let mut suites = files_with_extension(resource_root, "scriptSuite");
    suites.sort();
    let suite = suites.into_iter().next()?;
    let terminology = suite.with_extension("scriptTerminology");
    terminology
        .exists()
        .then_some(ScriptResource::SuitePair { suite, terminology })
}

fn files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == extension))
        .filter(|e| e.path().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect()
}
