//! Plain-text export of generated PDFs

use std::fs;
use std::path::Path;

use crate::convert::{
    BatchMessages, BatchReport, ConversionJob, Converter, HelperConverter, convert_batch,
    top_level_files,
};
use crate::error::{Result, create_dir_failed, pdf_dir_missing};
use crate::index::build_index;
use crate::paths::{Settings, text_dir};
use crate::toolchain::{HelperTool, ensure_built};
use crate::ui;

/// Export every PDF under `<root>/AppScripts` to text and rebuild the index
pub fn export_text(settings: &Settings) -> Result<BatchReport> {
    export_dir(&settings.output_dir(), || {
        ensure_built(&HelperTool::pdf2text(settings)).map(HelperConverter::new)
    })
}

/// Export the PDFs in `pdf_dir` with a converter built on first need
///
/// The converter is only requested when there is at least one PDF.
pub fn export_dir<C, F>(pdf_dir: &Path, make_converter: F) -> Result<BatchReport>
where
    C: Converter,
    F: FnOnce() -> Result<C>,
{
    if !pdf_dir.is_dir() {
        return Err(pdf_dir_missing(pdf_dir.display().to_string()));
    }

    let pdfs = top_level_files(pdf_dir, "pdf");
    if pdfs.is_empty() {
        ui::warn(format!("No PDF files found in {}", pdf_dir.display()));
        return Ok(BatchReport::default());
    }

    let converter = make_converter()?;
    let text_dir = text_dir(pdf_dir);
    fs::create_dir_all(&text_dir)
        .map_err(|e| create_dir_failed(text_dir.display().to_string(), e.to_string()))?;

    let jobs: Vec<ConversionJob> = pdfs
        .into_iter()
        .map(|pdf| {
            let output = text_dir.join(pdf.with_extension("txt").file_name().unwrap_or_default());
            ConversionJob::new(pdf, output)
        })
        .collect();

    let report = convert_batch(&jobs, &converter, BatchMessages::TEXT)?;
    build_index(&text_dir)?;
    Ok(report)
}
