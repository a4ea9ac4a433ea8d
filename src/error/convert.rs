//! Conversion errors

use super::ScriptDocsError;

/// Creates a conversion failed error
pub fn conversion_failed(input: impl Into<String>, reason: impl Into<String>) -> ScriptDocsError {
    ScriptDocsError::ConversionFailed {
        input: input.into(),
        reason: reason.into(),
    }
}

/// Creates a missing PDF directory error
pub fn pdf_dir_missing(path: impl Into<String>) -> ScriptDocsError {
    ScriptDocsError::PdfDirectoryMissing { path: path.into() }
}
