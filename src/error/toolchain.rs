//! Helper tool build errors

use super::ScriptDocsError;

/// Creates a missing tool source error
pub fn source_missing(tool: impl Into<String>, path: impl Into<String>) -> ScriptDocsError {
    ScriptDocsError::ToolSourceMissing {
        tool: tool.into(),
        path: path.into(),
    }
}

/// Creates a compiler missing error
pub fn compiler_missing(compiler: impl Into<String>) -> ScriptDocsError {
    ScriptDocsError::CompilerMissing {
        compiler: compiler.into(),
    }
}

/// Creates a generic build failure carrying the raw compiler output
pub fn build_failed(tool: impl Into<String>, output: impl Into<String>) -> ScriptDocsError {
    ScriptDocsError::BuildFailed {
        tool: tool.into(),
        output: output.into(),
    }
}
