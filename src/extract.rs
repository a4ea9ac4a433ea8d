//! Objective-C header extraction with `sdp`

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::apps::resources::ScriptResource;
use crate::error::{Result, extraction_failed, io_error, output_missing, tool_not_found};
use crate::toolchain::diagnostics::diagnostic_text;

/// Scripting definition processor shipped with Xcode
pub const SDP: &str = "sdp";

/// Find `sdp` on `PATH`
pub fn locate_sdp() -> Result<PathBuf> {
    which::which(SDP).map_err(|_| tool_not_found(SDP))
}

/// Run `sdp -fh --basename <basename> <inputs...>` in `work_dir`
///
/// Returns the path of the generated `<basename>.h`.
pub fn extract(
    sdp: &Path,
    resource: &ScriptResource,
    basename: &str,
    work_dir: &Path,
) -> Result<PathBuf> {
    let output = sdp_command(sdp, resource, basename, work_dir)
        .output()
        .map_err(|e| io_error(format!("Failed to run {}: {e}", sdp.display())))?;

    if !output.status.success() {
        let mut text = diagnostic_text(&output.stdout, &output.stderr);
        if text.is_empty() {
            text = "unknown error".to_string();
        }
        return Err(extraction_failed(basename, text));
    }

    let header = work_dir.join(format!("{basename}.h"));
    if !header.is_file() {
        return Err(output_missing(header.display().to_string()));
    }
    Ok(header)
}

fn sdp_command(sdp: &Path, resource: &ScriptResource, basename: &str, work_dir: &Path) -> Command {
    let mut command = Command::new(sdp);
    command
        .arg("-fh")
        .arg("--basename")
        .arg(basename)
        .args(resource.inputs())
        .current_dir(work_dir);
    command
}
