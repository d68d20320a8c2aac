//! Parsing of semicolon-delimited season statistics files.
//!
//! Reads the whole file, strips a leading UTF-8 BOM if present, and converts
//! each non-empty line into a [`SeasonRecord`] in file order. Malformed lines
//! are fatal: a line with fewer than seven fields or a field that does not
//! parse as a number fails the run with the offending line number.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::constants::{FIELD_NAMES, FIELD_SEPARATOR, SEASON_FIELD_COUNT, UTF8_BOM};
use crate::models::SeasonRecord;
use crate::{Error, Result};

/// Parse a season statistics file into records, one per non-empty line.
pub fn parse_seasons(path: &Path) -> Result<Vec<SeasonRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
        _ => Error::io(format!("failed to read {}", path.display()), e),
    })?;

    let text = contents.strip_prefix(UTF8_BOM).unwrap_or(&contents);

    let mut seasons = Vec::new();
    // lines() strips both \n and \r\n terminators
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        seasons.push(parse_line(line, index + 1)?);
    }

    debug!("parsed {} season records from {}", seasons.len(), path.display());
    Ok(seasons)
}

/// Parse one line into a season record.
///
/// The line must split into at least [`SEASON_FIELD_COUNT`] fields; fields
/// beyond the seventh are ignored. `line_number` is 1-based and used for
/// error reporting only.
fn parse_line(line: &str, line_number: usize) -> Result<SeasonRecord> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < SEASON_FIELD_COUNT {
        return Err(Error::invalid_format(
            line_number,
            SEASON_FIELD_COUNT,
            fields.len(),
        ));
    }

    let mut values = [0.0f64; SEASON_FIELD_COUNT];
    for (i, raw) in fields.iter().take(SEASON_FIELD_COUNT).enumerate() {
        values[i] = raw
            .trim()
            .parse()
            .map_err(|source| Error::numeric_field(line_number, FIELD_NAMES[i], *raw, source))?;
    }

    Ok(SeasonRecord {
        wins: values[0],
        draws: values[1],
        losses: values[2],
        goals_scored: values[3],
        goals_taken: values[4],
        shots_average: values[5],
        goals_per_shot: values[6],
    })
}
