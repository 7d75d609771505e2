pub mod csv;
pub mod xlsx;

use std::path::Path;

use crate::usecase::ports::workbook::{IngestError, RawSheet, WorkbookSource};

use self::csv::CsvWorkbookSource;
use self::xlsx::CalamineWorkbookSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Csv,
    Workbook,
}

impl SpreadsheetFormat {
    pub fn detect(file_name: &str) -> Self {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        if ext == "csv" {
            SpreadsheetFormat::Csv
        } else {
            SpreadsheetFormat::Workbook
        }
    }
}

/// Picks the CSV reader or calamine depending on the file name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoWorkbookSource;

impl WorkbookSource for AutoWorkbookSource {
    fn read_first_sheet(&self, file_name: &str, bytes: &[u8]) -> Result<RawSheet, IngestError> {
        match SpreadsheetFormat::detect(file_name) {
            SpreadsheetFormat::Csv => CsvWorkbookSource.read_first_sheet(file_name, bytes),
            SpreadsheetFormat::Workbook => CalamineWorkbookSource.read_first_sheet(file_name, bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_uses_extension_case_insensitively() {
        assert_eq!(SpreadsheetFormat::detect("people.CSV"), SpreadsheetFormat::Csv);
        assert_eq!(SpreadsheetFormat::detect("book.xlsx"), SpreadsheetFormat::Workbook);
        assert_eq!(SpreadsheetFormat::detect("book.ods"), SpreadsheetFormat::Workbook);
        assert_eq!(SpreadsheetFormat::detect("no_extension"), SpreadsheetFormat::Workbook);
    }
}
