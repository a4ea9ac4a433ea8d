//! Output file naming
//!
//! Application names become file names: normalized to printable ASCII and
//! disambiguated with a numeric suffix when two applications share a name.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// Name used when sanitizing leaves nothing
pub const UNTITLED: &str = "Untitled";

/// Header basename used when a name has no alphanumeric characters
pub const DEFAULT_HEADER_BASENAME: &str = "Dictionary";

/// Turn an application name into a safe file name
///
/// Decomposes accented characters, drops everything outside printable
/// ASCII, replaces path separators with `-` and collapses whitespace.
pub fn sanitize_filename(name: &str) -> String {
    let ascii: String = name
        .nfkd()
        .filter(|c| (' '..='~').contains(c))
        .map(|c| if c == '/' || c == ':' { '-' } else { c })
        .collect();
    let cleaned = ascii.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        UNTITLED.to_string()
    } else {
        cleaned
    }
}

/// Basename passed to `sdp`: the alphanumeric characters of `safe_name`
pub fn header_basename(safe_name: &str) -> String {
    let basename: String = safe_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if basename.is_empty() {
        DEFAULT_HEADER_BASENAME.to_string()
    } else {
        basename
    }
}

/// Output names claimed during one run
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    used: HashSet<String>,
}

impl NameRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `base`, or `base (2)`, `base (3)`, ... if taken
    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut counter = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{base} ({counter})");
            counter += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }

    /// Whether `name` has been claimed
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Number of claimed names
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Whether nothing has been claimed
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
