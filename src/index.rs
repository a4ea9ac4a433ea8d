//! Markdown index of text exports

use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::top_level_files;
use crate::error::{Result, file_write_failed};

/// Index file written into the text directory
pub const INDEX_FILE: &str = "README.md";

const TITLE: &str = "# Extracted AppleScript Dictionaries";
const SUBTITLE: &str = "Text exports generated from Objective-C scripting bridge headers.";
const EMPTY: &str = "No text exports available.";

/// Render the index for the given text files
///
/// Entries appear in the order given; callers pass them sorted.
pub fn render_index<P: AsRef<Path>>(text_files: &[P]) -> String {
    let mut lines = vec![TITLE.to_string(), String::new(), SUBTITLE.to_string(), String::new()];

    let entries: Vec<String> = text_files
        .iter()
        .filter_map(|path| {
            let path = path.as_ref();
            let stem = path.file_stem()?.to_string_lossy();
            let name = path.file_name()?.to_string_lossy();
            Some(format!("- [{stem}]({name})"))
        })
        .collect();

    if entries.is_empty() {
        lines.push(EMPTY.to_string());
    } else {
        lines.extend(entries);
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Write `text_dir/README.md` listing every text export
pub fn build_index(text_dir: &Path) -> Result<PathBuf> {
    let path = text_dir.join(INDEX_FILE);
    let content = render_index(&top_level_files(text_dir, "txt"));
    fs::write(&path, content)
        .map_err(|e| file_write_failed(path.display().to_string(), e.to_string()))?;
    Ok(path)
}
