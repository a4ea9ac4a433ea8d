//! Common test utilities for scriptdocs integration tests
//!
//! A [`TestWorkspace`] is a temporary root with Swift helper sources under
//! `tools/` and a `bin/` directory holding stand-ins for `swiftc` and `sdp`.
//! The fake compiler "builds" a helper that copies its input to its output,
//! and the fake `sdp` concatenates its inputs into `<basename>.h`, so the
//! whole pipeline runs without Xcode.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use assert_cmd::Command;
use tempfile::TempDir;

pub const FAKE_SWIFTC: &str = r#"#!/bin/sh
out=""
while [ $# -gt 0 ]; do
    if [ "$1" = "-o" ]; then
        out="$2"
        shift
    fi
    shift
done
printf '#!/bin/sh\ncp "$1" "$2"\n' > "$out"
chmod 755 "$out"
"#;

pub const FAKE_SDP: &str = r#"#!/bin/sh
shift
shift
name="$1"
shift
cat "$@" > "$name.h"
"#;

/// A test workspace for integration tests
pub struct TestWorkspace {
    pub temp: TempDir,
    /// Workspace root, passed as `SCRIPTDOCS_ROOT`
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Workspace with helper sources and fake `swiftc` and `sdp`
    pub fn new() -> Self {
        let workspace = Self::bare();
        workspace.write_file("tools/text2pdf.swift", "// text2pdf\n");
        workspace.write_file("tools/pdf2text.swift", "// pdf2text\n");
        workspace.write_script("bin/swiftc", FAKE_SWIFTC);
        workspace.write_script("bin/sdp", FAKE_SDP);
        workspace
    }

    /// Empty workspace
    pub fn bare() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp directory");
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write an executable script in workspace
    pub fn write_script(&self, path: &str, body: &str) -> PathBuf {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        let mut file = fs::File::create(&file_path).expect("Failed to create script");
        file.write_all(body.as_bytes()).expect("Failed to write script");
        file.sync_all().expect("Failed to sync script");
        drop(file);
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        file_path
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Modification time of a workspace file
    pub fn modified(&self, path: &str) -> SystemTime {
        fs::metadata(self.path.join(path))
            .and_then(|m| m.modified())
            .expect("Failed to read modification time")
    }

    /// Create `Apps/<dir>.app` with a name, bundle id and one `.sdef`
    pub fn create_app(&self, dir: &str, name: &str, bundle_id: &str, sdef: &str) -> PathBuf {
        let app = format!("Apps/{dir}.app");
        self.write_file(
            &format!("{app}/Contents/Info.plist"),
            &info_plist(&[("CFBundleName", name), ("CFBundleIdentifier", bundle_id)]),
        );
        self.write_file(&format!("{app}/Contents/Resources/{dir}.sdef"), sdef);
        self.path.join(app)
    }

    /// Directory scanned for applications
    pub fn apps_dir(&self) -> PathBuf {
        self.path.join("Apps")
    }

    /// `PATH` with the workspace `bin/` first
    pub fn path_env(&self) -> String {
        let system = std::env::var("PATH").unwrap_or_else(|_| "/usr/bin:/bin".to_string());
        format!("{}:{system}", self.path.join("bin").display())
    }

    /// `scriptdocs-pdf` scanning only the workspace apps
    #[allow(deprecated)]
    pub fn pdf_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("scriptdocs-pdf").expect("scriptdocs-pdf binary");
        cmd.env("SCRIPTDOCS_ROOT", &self.path)
            .env("PATH", self.path_env())
            .env_remove("SCRIPTDOCS_TOOLS_DIR")
            .arg("--search-root")
            .arg(self.apps_dir());
        cmd
    }

    /// `scriptdocs-text` for this workspace
    #[allow(deprecated)]
    pub fn text_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("scriptdocs-text").expect("scriptdocs-text binary");
        cmd.env("SCRIPTDOCS_ROOT", &self.path)
            .env("PATH", self.path_env())
            .env_remove("SCRIPTDOCS_TOOLS_DIR");
        cmd
    }
}

/// XML `Info.plist` with string entries
pub fn info_plist(entries: &[(&str, &str)]) -> String {
    let body: String = entries
        .iter()
        .map(|(key, value)| format!("<key>{key}</key><string>{value}</string>"))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <plist version=\"1.0\"><dict>{body}</dict></plist>\n"
    )
}

