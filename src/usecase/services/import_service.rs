use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::domain::entities::sheet::{ColumnDescriptor, RowKey, RowRecord, SheetSnapshot};
use crate::usecase::ports::workbook::{IngestError, RawSheet, WorkbookSource};

/// Record key given to a header cell with no text.
pub const EMPTY_HEADER_KEY: &str = "__EMPTY";

pub struct ImportService {
    source: Arc<dyn WorkbookSource>,
    max_upload_bytes: usize,
}

impl ImportService {
    pub fn new(source: Arc<dyn WorkbookSource>, max_upload_bytes: usize) -> Self {
        Self {
            source,
            max_upload_bytes,
        }
    }

    pub fn import_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<SheetSnapshot, IngestError> {
        if bytes.len() > self.max_upload_bytes {
            return Err(IngestError::TooLarge {
                size: bytes.len(),
                limit: self.max_upload_bytes,
            });
        }
        let raw = self.source.read_first_sheet(file_name, bytes)?;
        build_snapshot(raw)
    }
}

/// Turns the first sheet's cells into keyed records and the editable column set.
///
/// The first row is the header. Fully blank data rows are skipped, every record
/// gets a value for every header-derived key, and only header names that are
/// keys of the first record become columns.
pub fn build_snapshot(raw: RawSheet) -> Result<SheetSnapshot, IngestError> {
    let RawSheet {
        name,
        sheet_names,
        rows,
    } = raw;
    let mut rows = rows.into_iter();
    let header = rows.next().ok_or(IngestError::EmptySheet)?;
    let data: Vec<Vec<String>> = rows
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    let width = data
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);
    let keys = record_keys(&header, width);

    let records: Vec<RowRecord> = data
        .into_iter()
        .enumerate()
        .map(|(row_idx, cells)| {
            let fields: BTreeMap<String, String> = keys
                .iter()
                .enumerate()
                .map(|(col_idx, key)| (key.clone(), cells.get(col_idx).cloned().unwrap_or_default()))
                .collect();
            RowRecord::new(RowKey(row_idx), fields)
        })
        .collect();

    let first = records.first().ok_or(IngestError::EmptySheet)?;
    let columns = retained_columns(&header, first);

    Ok(SheetSnapshot {
        sheet_name: name,
        sheet_names,
        columns,
        rows: records,
    })
}

/// Record keys for `width` columns: blank header cells become `__EMPTY`,
/// repeated names get a `_1`, `_2`, ... suffix.
pub fn record_keys(header: &[String], width: usize) -> Vec<String> {
    let mut used = HashSet::new();
    (0..width)
        .map(|col_idx| {
            let base = header
                .get(col_idx)
                .map(String::as_str)
                .filter(|name| !name.is_empty())
                .unwrap_or(EMPTY_HEADER_KEY);
            if used.insert(base.to_string()) {
                return base.to_string();
            }
            let mut counter = 1_usize;
            loop {
                let candidate = format!("{base}_{counter}");
                if used.insert(candidate.clone()) {
                    return candidate;
                }
                counter += 1;
            }
        })
        .collect()
}

fn retained_columns(header: &[String], first: &RowRecord) -> Vec<ColumnDescriptor> {
    let mut seen = HashSet::new();
    header
        .iter()
        .filter(|name| first.fields.contains_key(name.as_str()))
        .filter(|name| seen.insert(name.as_str()))
        .map(|name| ColumnDescriptor::editable(name.as_str()))
        .collect()
}
