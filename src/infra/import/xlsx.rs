use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::usecase::ports::workbook::{IngestError, RawSheet, WorkbookSource};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Reads xlsx, xlsm, xlsb, xls and ods workbooks, sniffing the format from the bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineWorkbookSource;

impl WorkbookSource for CalamineWorkbookSource {
    fn read_first_sheet(&self, file_name: &str, bytes: &[u8]) -> Result<RawSheet, IngestError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|err| IngestError::UnsupportedFormat(format!("{file_name}: {err}")))?;

        let sheet_names = workbook.sheet_names();
        let Some(first) = sheet_names.first().cloned() else {
            return Err(IngestError::EmptySheet);
        };
        let range = workbook
            .worksheet_range(&first)
            .map_err(|err| IngestError::UnsupportedFormat(format!("{file_name}#{first}: {err}")))?;

        let rows = range
            .rows()
            .map(|r| r.iter().map(cell_to_string).collect())
            .collect();

        Ok(RawSheet {
            name: first,
            sheet_names,
            rows,
        })
    }
}
