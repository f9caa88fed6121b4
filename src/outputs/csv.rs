//! CSV serialization of the record buffer.
//!
//! One UTF-8 file, header row first, columns in the order declared on
//! [`Record`]: `fecha,medio,titulo,texto,url`. The file is overwritten on
//! each run. An empty buffer is handled here too: the run skips the write
//! entirely, so it never creates a file or truncates an existing one.

use std::error::Error;
use std::path::Path;

use tracing::{info, instrument};

use crate::models::Record;

/// Write all records to `path`, overwriting any existing file.
///
/// Fields are written verbatim; the `csv` writer handles quoting of bodies
/// containing commas, quotes or newlines.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row cannot be
/// written. These are environment faults (disk full, permissions) and are
/// fatal to the run.
/// Write the dataset only when the buffer holds records.
///
/// An empty run leaves the filesystem untouched: no file is created, no
/// header row, and an existing file at `path` is not truncated. Returns
/// whether a file was written.
///
/// # Errors
///
/// Propagates [`write_dataset`] errors for a non-empty buffer.
pub fn write_dataset_if_nonempty(records: &[Record], path: &Path) -> Result<bool, Box<dyn Error>> {
    if records.is_empty() {
        info!("La lista sigue vacía.");
        return Ok(false);
    }
    write_dataset(records, path)?;
    Ok(true)
}

#[instrument(level = "info", skip(records), fields(path = %path.display(), count = records.len()))]
pub fn write_dataset(records: &[Record], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!("Wrote dataset");
    Ok(())
}
