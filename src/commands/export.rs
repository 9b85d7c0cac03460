use std::path::Path;

use crate::state::SearchSession;

/// Export the session's last results as a PDF report
///
/// Returns the path that was written. Fails without touching the file
/// system when there is nothing to export.
pub fn export_results(session: &SearchSession, output: &str) -> Result<String, String> {
    if output.trim().is_empty() {
        return Err("Choose where to save the report.".to_string());
    }
    if !session.can_export() {
        return Err("Run a search with results before exporting.".to_string());
    }

    let written = session
        .export(Path::new(output))
        .map_err(|e| e.to_string())?;

    Ok(written.to_string_lossy().to_string())
}
