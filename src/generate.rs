//! PDF generation from application scripting dictionaries
//!
//! For every discovered application the scripting definition is resolved,
//! turned into an Objective-C header with `sdp` and rendered to
//! `<output>/<Name>.pdf` by the `text2pdf` helper. Work happens in a scratch
//! directory per application that is removed when the application is done.

use std::fs;
use std::path::{Path, PathBuf};

use crate::apps::resources::find_script_resources;
use crate::apps::{AppRecord, discover};
use crate::convert::{
    Converter, HelperConverter, NameRegistry, header_basename, is_up_to_date, sanitize_filename,
};
use crate::error::{Result, create_dir_failed};
use crate::extract::{extract, locate_sdp};
use crate::paths::Settings;
use crate::temp::scratch_dir;
use crate::toolchain::{HelperTool, ensure_built};
use crate::ui;

/// Counts for one generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// PDFs written
    pub written: usize,
    /// Applications whose PDF was already current
    pub skipped: usize,
    /// Applications whose extraction or rendering failed
    pub failed: usize,
    /// Applications without a scripting definition
    pub no_definition: usize,
}

/// What happened to a single application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppOutcome {
    Written(PathBuf),
    UpToDate(PathBuf),
    Failed,
    NoDefinition,
}

impl GenerationReport {
    fn record(&mut self, outcome: &AppOutcome) {
        match outcome {
            AppOutcome::Written(_) => self.written += 1,
            AppOutcome::UpToDate(_) => self.skipped += 1,
            AppOutcome::Failed => self.failed += 1,
            AppOutcome::NoDefinition => self.no_definition += 1,
        }
    }
}

/// Generate a PDF for every scriptable application under `roots`
pub fn generate_pdfs(
    settings: &Settings,
    output_dir: &Path,
    roots: Vec<PathBuf>,
) -> Result<GenerationReport> {
    fs::create_dir_all(output_dir)
        .map_err(|e| create_dir_failed(output_dir.display().to_string(), e.to_string()))?;

    let text2pdf = ensure_built(&HelperTool::text2pdf(settings))?;
    let sdp = locate_sdp()?;
    let converter = HelperConverter::new(text2pdf);

    let mut generator = Generator::new(settings, output_dir, &sdp, &converter);
    generator.run(discover(roots))
}

/// Per-run state: where output goes and which names are taken
pub struct Generator<'a> {
    settings: &'a Settings,
    output_dir: &'a Path,
    sdp: &'a Path,
    converter: &'a dyn Converter,
    names: NameRegistry,
}

impl<'a> Generator<'a> {
    pub fn new(
        settings: &'a Settings,
        output_dir: &'a Path,
        sdp: &'a Path,
        converter: &'a dyn Converter,
    ) -> Self {
        Self {
            settings,
            output_dir,
            sdp,
            converter,
            names: NameRegistry::new(),
        }
    }

    /// Process every application in order
    ///
    /// Item failures are warned about and counted; anything else stops the
    /// run.
    pub fn run<I>(&mut self, apps: I) -> Result<GenerationReport>
    where
        I: IntoIterator<Item = AppRecord>,
    {
        let mut report = GenerationReport::default();
        for app in apps {
            let outcome = self.process(&app)?;
            report.record(&outcome);
        }
        Ok(report)
    }

    /// Generate the PDF for one application
    pub fn process(&mut self, app: &AppRecord) -> Result<AppOutcome> {
        let name = sanitize_filename(&app.name);
        let scratch = scratch_dir()?;

        let Some(resource) = find_script_resources(app, scratch.path())? else {
            ui::warn(format!("Skipping {name}: no scripting definition found"));
            return Ok(AppOutcome::NoDefinition);
        };

        let claimed = self.names.claim(&name);
        let pdf = self.output_dir.join(format!("{claimed}.pdf"));
        let display = self.settings.display_path(&pdf);

        if is_up_to_date(&pdf, &resource.freshness_sources()) {
            ui::log(format!("Skipping {name}: {display} already up to date"));
            return Ok(AppOutcome::UpToDate(pdf));
        }

        let basename = header_basename(&claimed);
        let header = match extract(self.sdp, &resource, &basename, scratch.path()) {
            Ok(header) => header,
            Err(e) if e.is_item_error() => {
                ui::warn(format!("{name}: {e}"));
                return Ok(AppOutcome::Failed);
            }
            Err(e) => return Err(e),
        };

        match self.converter.convert(&header, &pdf) {
            Ok(()) => {
                ui::log(format!("Wrote {display}"));
                Ok(AppOutcome::Written(pdf))
            }
            Err(e) if e.is_item_error() => {
                ui::warn(format!("{name}: {e}"));
                Ok(AppOutcome::Failed)
            }
            Err(e) => Err(e),
        }
    }

    /// Names claimed so far
    pub fn names(&self) -> &NameRegistry {
        &self.names
    }
}
