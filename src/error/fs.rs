//! File system errors

use super::ScriptDocsError;

/// Creates a directory creation error
pub fn create_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> ScriptDocsError {
    ScriptDocsError::CreateDirFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ScriptDocsError {
    ScriptDocsError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ScriptDocsError {
    ScriptDocsError::IoError {
        message: message.into(),
    }
}
