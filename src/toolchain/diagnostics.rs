//! Compiler failure classification
//!
//! Known `swiftc` failure signatures map to specific, actionable errors. The
//! table is evaluated top to bottom and the first matching signature wins;
//! unrecognized output is surfaced verbatim as a build failure.

use crate::error::{ScriptDocsError, build_failed};

/// Known classes of toolchain failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The compiler could not write its module cache (usually a sandbox)
    ModuleCacheNotWritable,
    /// SDK and compiler versions do not match
    ToolchainMismatch,
    /// Command Line Tools and Xcode headers both define `SwiftBridging`
    DuplicateModuleDefinition,
}

/// Ordered (signature substring, failure kind) table
const SIGNATURES: &[(&str, FailureKind)] = &[
    ("module cache", FailureKind::ModuleCacheNotWritable),
    ("Operation not permitted", FailureKind::ModuleCacheNotWritable),
    ("failed to build module 'Swift'", FailureKind::ToolchainMismatch),
    (
        "this SDK is not supported by the compiler",
        FailureKind::ToolchainMismatch,
    ),
    (
        "redefinition of module 'SwiftBridging'",
        FailureKind::DuplicateModuleDefinition,
    ),
];

/// Classify compiler output against the signature table
pub fn classify(output: &str) -> Option<FailureKind> {
    SIGNATURES
        .iter()
        .find(|(signature, _)| output.contains(signature))
        .map(|(_, kind)| *kind)
}

/// Turn compiler output into the error reported for `tool`
pub fn failure_error(tool: &str, output: &str) -> ScriptDocsError {
    let tool = tool.to_string();
    match classify(output) {
        Some(FailureKind::ModuleCacheNotWritable) => {
            ScriptDocsError::ModuleCacheNotWritable { tool }
        }
        Some(FailureKind::ToolchainMismatch) => ScriptDocsError::ToolchainMismatch { tool },
        Some(FailureKind::DuplicateModuleDefinition) => {
            ScriptDocsError::DuplicateModuleDefinition { tool }
        }
        None => build_failed(tool, output),
    }
}

/// Pick the diagnostic text from captured compiler output
///
/// stderr wins when it is non-empty, otherwise stdout.
pub fn diagnostic_text(stdout: &[u8], stderr: &[u8]) -> String {
    let text = if stderr.is_empty() { stdout } else { stderr };
    String::from_utf8_lossy(text).trim().to_string()
}
