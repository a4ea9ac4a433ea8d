//! PDF generation command

use crate::cli::PdfCli;
use crate::error::Result;
use crate::generate::generate_pdfs;
use crate::paths::Settings;
use crate::ui;

/// Run PDF generation
pub fn run(args: PdfCli) -> Result<()> {
    let settings = Settings::from_env()?;
    let output_dir = args.output.clone().unwrap_or_else(|| settings.output_dir());
    let roots = args.roots(dirs::home_dir().as_deref());

    let report = generate_pdfs(&settings, &output_dir, roots)?;

    let mut parts = vec![format!("{} written", ui::plural(report.written, "PDF"))];
    if report.skipped > 0 {
        parts.push(format!("{} up to date", report.skipped));
    }
    if report.failed > 0 {
        parts.push(format!("{} failed", report.failed));
    }
    ui::summary(format!("Done: {}", parts.join(", ")));
    Ok(())
}
