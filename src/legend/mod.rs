//! Legend CSV reader.
//!
//! The legend is a comma-separated table mapping survey categories to
//! metadata; the only column this tool cares about is `Genus/Species`, whose
//! values become the manifest's label list in row order.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::MosaicPrepError;

/// Header of the legend column holding the label names.
pub const LABEL_COLUMN: &str = "Genus/Species";

/// Reads the label list from a legend CSV file.
///
/// Labels are the values of the [`LABEL_COLUMN`] column, in row order.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid CSV (including
/// ragged rows), or lacks the [`LABEL_COLUMN`] header.
pub fn read_legend(path: &Path) -> Result<Vec<String>, MosaicPrepError> {
    let file = File::open(path).map_err(MosaicPrepError::Io)?;
    let reader = BufReader::new(file);

    labels_from_reader(csv::Reader::from_reader(reader), path)
}

/// Reads the label list from legend CSV bytes.
///
/// Useful for testing and fuzzing without file I/O.
pub fn from_legend_slice(bytes: &[u8]) -> Result<Vec<String>, MosaicPrepError> {
    labels_from_reader(csv::Reader::from_reader(bytes), Path::new("<bytes>"))
}

fn labels_from_reader<R: std::io::Read>(
    mut csv_reader: csv::Reader<R>,
    path: &Path,
) -> Result<Vec<String>, MosaicPrepError> {
    let headers = csv_reader
        .headers()
        .map_err(|source| MosaicPrepError::LegendParse {
            path: path.to_path_buf(),
            source,
        })?;

    let column = headers
        .iter()
        .position(|header| header == LABEL_COLUMN)
        .ok_or_else(|| MosaicPrepError::MissingColumn {
            path: path.to_path_buf(),
            column: LABEL_COLUMN.to_string(),
        })?;

    let mut labels = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|source| MosaicPrepError::LegendParse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(value) = record.get(column) {
            labels.push(value.to_string());
        }
    }

    Ok(labels)
}
