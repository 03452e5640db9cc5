//! Labeled-matrix CSV export
//!
//! The label list appears as both the header row and the leading column,
//! with an empty top-left cell. Paragraph labels contain `", "`, so fields
//! go through a real CSV writer for quoting.

use std::path::Path;

use crate::error::Result;
use crate::similarity::SquareMatrix;

/// Persist a square matrix as CSV with `labels` on both axes.
pub fn write_labeled_matrix(path: &Path, labels: &[String], matrix: &SquareMatrix) -> Result<()> {
    debug_assert_eq!(labels.len(), matrix.size());
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = Vec::with_capacity(labels.len() + 1);
    header.push(String::new());
    header.extend(labels.iter().cloned());
    writer.write_record(&header)?;

    for (row, label) in labels.iter().enumerate() {
        let mut record = Vec::with_capacity(labels.len() + 1);
        record.push(label.clone());
        record.extend(matrix.row(row).iter().map(|value| value.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
