//! Build-on-demand helper tools
//!
//! The PDF renderer and the PDF text extractor are small Swift programs that
//! ship as source under the tools directory. They are compiled with `swiftc`
//! the first time they are needed and again whenever the source is newer
//! than the binary.

pub mod diagnostics;

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, compiler_missing, create_dir_failed, io_error, source_missing};
use crate::paths::Settings;
use crate::ui;

/// Compiler used to build helpers
pub const COMPILER: &str = "swiftc";

/// Module cache directory under the build directory
pub const MODULE_CACHE_DIR: &str = "ModuleCache";

/// Variables pointing the compiler at the scratch module cache
pub const MODULE_CACHE_ENV: [&str; 2] = ["SWIFT_MODULE_CACHE_PATH", "CLANG_MODULE_CACHE_PATH"];

/// A helper program built from a single Swift source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperTool {
    /// Binary name
    pub name: &'static str,
    /// Swift source file
    pub source: PathBuf,
    /// Directory receiving the binary and the module cache
    pub build_dir: PathBuf,
    /// Frameworks to link
    pub frameworks: &'static [&'static str],
}

impl HelperTool {
    /// Header text to PDF renderer
    pub fn text2pdf(settings: &Settings) -> Self {
        Self {
            name: "text2pdf",
            source: settings.tools_dir.join("text2pdf.swift"),
            build_dir: settings.build_dir(),
            frameworks: &[],
        }
    }

    /// PDF to plain text extractor
    pub fn pdf2text(settings: &Settings) -> Self {
        Self {
            name: "pdf2text",
            source: settings.tools_dir.join("pdf2text.swift"),
            build_dir: settings.build_dir(),
            frameworks: &["PDFKit"],
        }
    }

    /// Path of the compiled binary
    pub fn binary_path(&self) -> PathBuf {
        self.build_dir.join(self.name)
    }

    /// Scratch module cache used while compiling
    pub fn module_cache(&self) -> PathBuf {
        self.build_dir.join(MODULE_CACHE_DIR)
    }
}

/// Whether `binary` must be rebuilt from `source`
///
/// True when the binary is absent or older than the source.
pub fn needs_rebuild(binary: &Path, source: &Path) -> io::Result<bool> {
    let binary_modified = match fs::metadata(binary) {
        Ok(meta) => meta.modified()?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(e),
    };
    let source_modified = fs::metadata(source)?.modified()?;
    Ok(binary_modified < source_modified)
}

/// Ensure the helper binary exists and is current, compiling it if needed
pub fn ensure_built(tool: &HelperTool) -> Result<PathBuf> {
    ensure_built_with(tool, || which::which(COMPILER).ok())
}

/// Like [`ensure_built`], with a custom compiler lookup
pub fn ensure_built_with<F>(tool: &HelperTool, find_compiler: F) -> Result<PathBuf>
where
    F: FnOnce() -> Option<PathBuf>,
{
    if !tool.source.is_file() {
        return Err(source_missing(tool.name, tool.source.display().to_string()));
    }

    fs::create_dir_all(&tool.build_dir)
        .map_err(|e| create_dir_failed(tool.build_dir.display().to_string(), e.to_string()))?;

    let binary = tool.binary_path();
    let stale = needs_rebuild(&binary, &tool.source).map_err(|e| {
        io_error(format!(
            "Failed to check {} against {}: {e}",
            binary.display(),
            tool.source.display()
        ))
    })?;
    if !stale {
        return Ok(binary);
    }

    let compiler = find_compiler().ok_or_else(|| compiler_missing(COMPILER))?;
    ui::log(format!("Compiling {} → {}", tool.name, binary.display()));

    let module_cache = tool.module_cache();
    fs::create_dir_all(&module_cache)
        .map_err(|e| create_dir_failed(module_cache.display().to_string(), e.to_string()))?;

    let spinner = ui::Spinner::start(format!("Compiling {}", tool.name));
    let output = compile_command(tool, &compiler, &module_cache).output();
    spinner.finish();

    let output =
        output.map_err(|e| io_error(format!("Failed to run {}: {e}", compiler.display())))?;
    if !output.status.success() {
        let text = diagnostics::diagnostic_text(&output.stdout, &output.stderr);
        return Err(diagnostics::failure_error(tool.name, &text));
    }

    Ok(binary)
}

/// Build the compiler invocation for `tool`
pub fn compile_command(tool: &HelperTool, compiler: &Path, module_cache: &Path) -> Command {
    let mut command = Command::new(compiler);
    command.arg(&tool.source);
    for framework in tool.frameworks {
        command.arg("-framework").arg(framework);
    }
    command
        .arg("-o")
        .arg(tool.binary_path())
        .arg("-module-cache-path")
        .arg(module_cache);

    if let Some(dir) = tool.source.parent().filter(|d| !d.as_os_str().is_empty()) {
        command.current_dir(dir);
    }

    for key in MODULE_CACHE_ENV {
        if std::env::var_os(key).is_none() {
            command.env(key, module_cache);
        }
    }

    command
}

/// Arguments of a command, for display and tests
pub fn command_args(command: &Command) -> Vec<OsString> {
    command.get_args().map(OsString::from).collect()
}
