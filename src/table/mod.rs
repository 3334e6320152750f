// src/table/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, info};

mod row;

pub use row::Row;

use crate::error::TalkError;

/// Raw CSV cells, header line first.
pub type Cells = Vec<Vec<String>>;

/// Read every record of the export as plain strings. The first record is
/// the header but is not interpreted here; records may differ in length.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Cells> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;
    let cells = read_cells(file)
        .with_context(|| format!("Failed to read CSV file: {:?}", path.as_ref()))?;
    info!(records = cells.len(), "loaded csv");
    Ok(cells)
}

pub fn read_cells<R: Read>(reader: R) -> Result<Cells> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut cells = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        cells.push(record.iter().map(str::to_string).collect());
    }
    Ok(cells)
}

/// Replace every non-breaking space with an ordinary one, header included.
pub fn sanitize(cells: Cells) -> Cells {
    cells
        .into_iter()
        .map(|record| {
            record
                .into_iter()
                .map(|cell| cell.replace('\u{a0}', " "))
                .collect()
        })
        .collect()
}

/// Turn the header plus data records into column-keyed rows.
///
/// A record shorter than the header simply lacks the trailing columns;
/// the gap shows up later as [`TalkError::MissingColumn`].
pub fn rotate(cells: &[Vec<String>]) -> Vec<Row> {
    let Some((header, records)) = cells.split_first() else {
        return Vec::new();
    };

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            if record.len() < header.len() {
                debug!(
                    row = i + 1,
                    have = record.len(),
                    want = header.len(),
                    "short record truncated"
                );
            }
            Row::new(
                i + 1,
                header.iter().cloned().zip(record.iter().cloned()).collect(),
            )
        })
        .collect()
}

/// Keep rows whose `column` is exactly `"Y"`. A row without the column
/// fails the whole filter.
pub fn active(rows: Vec<Row>, column: &str) -> Result<Vec<Row>, TalkError> {
    let mut kept = Vec::with_capacity(rows.len());
    let total = rows.len();
    for row in rows {
        if row.get(column)? == "Y" {
            kept.push(row);
        }
    }
    info!(active = kept.len(), total, "filtered active talks");
    Ok(kept)
}
