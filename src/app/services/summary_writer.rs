//! Output naming and JSON summary writing.
//!
//! The team name is derived from the input path (directory components and the
//! extension after the last period stripped); the summary is written as a
//! compact JSON object to `<name>.json` in the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::output_filename;
use crate::models::StatsSummary;
use crate::{Error, Result};

/// Derive the team name from the input file path.
///
/// `/data/teamA.csv` → `teamA`, `teamX.v2.csv` → `teamX.v2`, `teamX` →
/// `teamX` (a path with no extension is used as-is).
pub fn derive_team_name(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| {
            Error::configuration(format!(
                "cannot derive a team name from path: {}",
                path.display()
            ))
        })
}

/// Serialize the summary and write it to `<name>.json` under `output_dir`.
///
/// Returns the path of the written file. Callers invoke this only after
/// aggregation has succeeded, so a failed run never leaves partial output.
pub fn write_summary(summary: &StatsSummary, output_dir: &Path) -> Result<PathBuf> {
    let output_path = output_dir.join(output_filename(&summary.name));
    let json = serde_json::to_string(summary)?;

    fs::write(&output_path, json)
        .map_err(|e| Error::io(format!("failed to write {}", output_path.display()), e))?;

    info!("wrote summary to {}", output_path.display());
    Ok(output_path)
}
