#![forbid(unsafe_code)]

use anyhow::Result;
use std::{fs::File, io::BufWriter, path::PathBuf};

use super::ToggleRow;

/// Serialize evaluated recipe rows to a pretty JSON array.
///
/// Each entry carries the reference `index`, the `reference` swatch and the
/// `rest`/`hover`/`active`/`focus` hex colors picked for it.
pub fn save_rows_json(path: impl AsRef<std::path::Path>, rows: &[ToggleRow]) -> Result<PathBuf> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, rows)?;
    Ok(path.to_path_buf())
}
