//! Scripting definition and `sdp` errors

use super::ScriptDocsError;

/// Creates a tool not found error
pub fn tool_not_found(tool: impl Into<String>) -> ScriptDocsError {
    ScriptDocsError::ToolNotFound { tool: tool.into() }
}

/// Creates an extraction failed error
pub fn extraction_failed(
    basename: impl Into<String>,
    output: impl Into<String>,
) -> ScriptDocsError {
    ScriptDocsError::ExtractionFailed {
        basename: basename.into(),
        output: output.into(),
    }
}

/// Creates an output missing error
pub fn output_missing(path: impl Into<String>) -> ScriptDocsError {
    ScriptDocsError::OutputMissing { path: path.into() }
}

/// Creates an unreadable Info.plist error
pub fn info_plist_unreadable(
    path: impl Into<String>,
    reason: impl Into<String>,
) -> ScriptDocsError {
    ScriptDocsError::InfoPlistUnreadable {
        path: path.into(),
        reason: reason.into(),
    }
}
