//! Error types and handling for scriptdocs
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`toolchain`]: Helper tool build errors
//! - [`extract`]: Scripting definition and `sdp` errors
//! - [`convert`]: Conversion errors
//! - [`fs`]: File system errors

pub mod convert;
pub mod extract;
pub mod fs;
pub mod toolchain;

pub use convert::{conversion_failed, pdf_dir_missing};
pub use extract::{extraction_failed, info_plist_unreadable, output_missing, tool_not_found};
pub use fs::{create_dir_failed, io_error, write_failed as file_write_failed};
pub use toolchain::{build_failed, compiler_missing, source_missing};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for scriptdocs operations
#[derive(Error, Diagnostic, Debug)]
pub enum ScriptDocsError {
    // Toolchain errors
    #[error("Missing converter source at {path}")]
    #[diagnostic(
        code(scriptdocs::toolchain::source_missing),
        help("Restore the Swift sources under the tools directory or set SCRIPTDOCS_TOOLS_DIR")
    )]
    ToolSourceMissing { tool: String, path: String },

    #[error("{compiler} not found; install Xcode command-line tools or a Swift toolchain.")]
    #[diagnostic(
        code(scriptdocs::toolchain::compiler_missing),
        help("Run `xcode-select --install` or install Xcode from the App Store")
    )]
    CompilerMissing { compiler: String },

    #[error(
        "Swift compiler could not write its module cache. Ensure the sandbox allows writes \
         to the repository or run this command outside the restricted environment."
    )]
    #[diagnostic(code(scriptdocs::toolchain::module_cache))]
    ModuleCacheNotWritable { tool: String },

    #[error(
        "Swift compiler/toolchain mismatch: install or select the full Xcode toolchain via \
         `sudo xcode-select -s /Applications/Xcode.app/Contents/Developer`."
    )]
    #[diagnostic(code(scriptdocs::toolchain::mismatch))]
    ToolchainMismatch { tool: String },

    #[error(
        "Swift headers from the Command Line Tools are conflicting. Switching to the full \
         Xcode toolchain usually resolves the duplicate module definition."
    )]
    #[diagnostic(
        code(scriptdocs::toolchain::duplicate_module),
        help("sudo xcode-select -s /Applications/Xcode.app/Contents/Developer")
    )]
    DuplicateModuleDefinition { tool: String },

    #[error("Failed to compile {tool}: {output}")]
    #[diagnostic(code(scriptdocs::toolchain::build_failed))]
    BuildFailed { tool: String, output: String },

    // Extraction errors
    #[error("{tool} not found; install Xcode to access scripting bridge tools.")]
    #[diagnostic(
        code(scriptdocs::extract::tool_not_found),
        help("sdp ships with Xcode; make sure the selected developer directory is on PATH")
    )]
    ToolNotFound { tool: String },

    #[error("sdp failed for {basename}: {output}")]
    #[diagnostic(code(scriptdocs::extract::failed))]
    ExtractionFailed { basename: String, output: String },

    #[error("sdp did not produce expected header {path}")]
    #[diagnostic(code(scriptdocs::extract::output_missing))]
    OutputMissing { path: String },

    #[error("Failed to read Info.plist for {path}: {reason}")]
    #[diagnostic(code(scriptdocs::extract::info_plist))]
    InfoPlistUnreadable { path: String, reason: String },

    // Conversion errors
    #[error("Failed to convert {input}: {reason}")]
    #[diagnostic(code(scriptdocs::convert::failed))]
    ConversionFailed { input: String, reason: String },

    #[error("PDF directory {path} does not exist")]
    #[diagnostic(
        code(scriptdocs::convert::pdf_dir_missing),
        help("Run scriptdocs-pdf first to generate the PDF dictionaries")
    )]
    PdfDirectoryMissing { path: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(scriptdocs::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to create directory {path}: {reason}")]
    #[diagnostic(code(scriptdocs::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(scriptdocs::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(scriptdocs::fs::io_error))]
    IoError { message: String },
}

impl ScriptDocsError {
    /// Whether the error only affects a single batch item.
    ///
    /// Item errors are reported as warnings and the batch moves on; every
    /// other error aborts the run.
    pub fn is_item_error(&self) -> bool {
        matches!(
            self,
            Self::ExtractionFailed { .. }
                | Self::ConversionFailed { .. }
                | Self::InfoPlistUnreadable { .. }
        )
    }
}

impl From<std::io::Error> for ScriptDocsError {
    fn from(err: std::io::Error) -> Self {
        ScriptDocsError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ScriptDocsError>;
