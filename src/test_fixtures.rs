//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Builds fake application bundles, pins modification times and writes
//! executable stand-ins for external tools.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, AppFixture};
//!
//! let temp = create_temp_dir();
//! let app = AppFixture::new(temp.path(), "Mail.app")
//!     .string("CFBundleIdentifier", "com.apple.mail")
//!     .create();
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Write `content` to `path`, creating parent directories.
///
/// # Panics
///
/// Panics if any step fails.
pub fn write_file(path: &Path, content: impl AsRef<[u8]>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Set the modification time of `path`.
///
/// # Panics
///
/// Panics if the file cannot be opened or updated.
pub fn set_mtime(path: &Path, time: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .expect("Failed to open file")
        .set_modified(time)
        .expect("Failed to set modification time");
}

/// Write an executable shell script.
///
/// The file is closed before its mode changes so the script can be spawned
/// right away.
///
/// # Panics
///
/// Panics if any step fails.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    let mut file = fs::File::create(path).expect("Failed to create script");
    file.write_all(body.as_bytes()).expect("Failed to write script");
    file.sync_all().expect("Failed to sync script");
    drop(file);
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
}

/// Builder for a fake `.app` bundle with an XML `Info.plist`
pub struct AppFixture {
    path: PathBuf,
    entries: Vec<String>,
    write_plist: bool,
}

impl AppFixture {
    /// Bundle at `root/relative`
    pub fn new(root: &Path, relative: &str) -> Self {
        Self {
            path: root.join(relative),
            entries: Vec::new(),
            write_plist: true,
        }
    }

    /// Add a string entry
    #[must_use]
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.entries
            .push(format!("<key>{key}</key><string>{value}</string>"));
        self
    }

    /// Add a data entry (base64-encoded by the caller)
    #[must_use]
    pub fn data(mut self, key: &str, base64: &str) -> Self {
        self.entries
            .push(format!("<key>{key}</key><data>{base64}</data>"));
        self
    }

    /// Do not write an `Info.plist`
    #[must_use]
    pub fn without_plist(mut self) -> Self {
        self.write_plist = false;
        self
    }

    /// Create the bundle and return its path.
    ///
    /// # Panics
    ///
    /// Panics if the bundle cannot be written.
    pub fn create(self) -> PathBuf {
        fs::create_dir_all(self.path.join("Contents/Resources"))
            .expect("Failed to create bundle directories");
        if self.write_plist {
            let body = format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                 <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
                 \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
                 <plist version=\"1.0\"><dict>{}</dict></plist>\n",
                self.entries.join("")
            );
            write_file(&self.path.join("Contents/Info.plist"), body);
        }
        self.path
    }
}

/// Write a resource file inside a bundle's `Contents/Resources`.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn add_resource(app: &Path, relative: &str, content: &str) -> PathBuf {
    let path = app.join("Contents/Resources").join(relative);
    write_file(&path, content);
    path
}
