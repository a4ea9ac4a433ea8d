//! File conversion through helper binaries
//!
//! Header to PDF and PDF to text conversions both run a compiled helper as
//! `<binary> <input> <output>`. Conversions are skipped when the output is
//! newer than every source it was made from.

pub mod names;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use walkdir::WalkDir;

use crate::error::{Result, conversion_failed, create_dir_failed};
use crate::toolchain::diagnostics::diagnostic_text;
use crate::ui;

pub use names::{NameRegistry, header_basename, sanitize_filename};

/// Converts one file into another
pub trait Converter {
    /// Convert `input` into `output`
    fn convert(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Runs a compiled helper binary
#[derive(Debug, Clone)]
pub struct HelperConverter {
    binary: PathBuf,
}

impl HelperConverter {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Converter for HelperConverter {
    fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let result = Command::new(&self.binary)
            .arg(input)
            .arg(output)
            .output()
            .map_err(|e| {
                conversion_failed(
                    file_label(input),
                    format!("failed to run {}: {e}", self.binary.display()),
                )
            })?;

        if result.status.success() {
            Ok(())
        } else {
            Err(conversion_failed(
                file_label(input),
                diagnostic_text(&result.stdout, &result.stderr),
            ))
        }
    }
}

/// Whether `output` exists and is at least as new as every source
///
/// Unreadable metadata counts as stale.
pub fn is_up_to_date(output: &Path, sources: &[&Path]) -> bool {
    let Ok(output_modified) = modified(output) else {
        return false;
    };
    sources.iter().all(|source| {
        modified(source).is_ok_and(|source_modified| source_modified <= output_modified)
    })
}

fn modified(path: &Path) -> io::Result<std::time::SystemTime> {
    fs::metadata(path)?.modified()
}

/// File name of `path` for messages
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Files with `extension` directly inside `dir`, sorted by file name
pub fn top_level_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == extension))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// One input/output pair in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Outcome counts of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchReport {
    /// Total number of jobs seen
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }
}

/// Progress wording for a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchMessages {
    /// Kind of output, as in "text already up to date"
    pub output: &'static str,
    /// Logged before each conversion, followed by the input name
    pub action: &'static str,
}

impl BatchMessages {
    /// PDF to text export
    pub const TEXT: Self = Self {
        output: "text",
        action: "Extracting text from",
    };

    pub fn skipping(&self, name: &str) -> String {
        format!("Skipping {name}: {} already up to date", self.output)
    }

    pub fn converting(&self, name: &str) -> String {
        format!("{} {name}", self.action)
    }
}

/// Convert every job in order, skipping outputs that are up to date
///
/// A failed conversion is reported as a warning and the batch continues.
/// Failing to create an output directory aborts the batch.
pub fn convert_batch(
    jobs: &[ConversionJob],
    converter: &dyn Converter,
    messages: BatchMessages,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for job in jobs {
        let name = file_label(&job.input);
        if is_up_to_date(&job.output, &[job.input.as_path()]) {
            ui::log(messages.skipping(&name));
            report.skipped += 1;
            continue;
        }

        if let Some(parent) = job.output.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| create_dir_failed(parent.display().to_string(), e.to_string()))?;
        }

        ui::log(messages.converting(&name));
        match converter.convert(&job.input, &job.output) {
            Ok(()) => report.converted += 1,
            Err(e) => {
                ui::warn(e.to_string());
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
