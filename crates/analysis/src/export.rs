//! CSV and JSON export of analysis records.

use crate::trajectories::{AlleleAge, TidyRecord};
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write records: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write allele-age summaries as CSV with a header row.
pub fn write_ages_csv<W: Write>(mut writer: W, ages: &[AlleleAge]) -> Result<(), ExportError> {
    writeln!(writer, "effect,max_frequency,last_frequency,origin,sojourn")?;
    for age in ages {
        writeln!(
            writer,
            "{},{},{},{},{}",
            age.effect, age.max_frequency, age.last_frequency, age.origin, age.sojourn
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write tidy records as CSV with a header row.
pub fn write_tidy_csv<W: Write>(mut writer: W, records: &[TidyRecord]) -> Result<(), ExportError> {
    writeln!(writer, "origin,generation,position,frequency,effect,label")?;
    for r in records {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            r.origin, r.generation, r.position, r.frequency, r.effect, r.label
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write any serializable records as pretty-printed JSON.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    records: &T,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}
