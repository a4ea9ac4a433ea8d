//! Text export command

use crate::cli::TextCli;
use crate::error::Result;
use crate::paths::Settings;
use crate::text::export_text;
use crate::ui;

/// Run text export
pub fn run(_args: TextCli) -> Result<()> {
    let settings = Settings::from_env()?;
    let report = export_text(&settings)?;

    if report.total() > 0 {
        ui::summary(format!(
            "Done: {} extracted, {} up to date, {} failed",
            ui::plural(report.converted, "file"),
            report.skipped,
            report.failed
        ));
    }
    Ok(())
}
