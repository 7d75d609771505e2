use crate::usecase::ports::workbook::{IngestError, RawSheet, WorkbookSource};

/// Sheet name reported for CSV input, which has no sheets of its own.
pub const CSV_SHEET_NAME: &str = "Sheet1";

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWorkbookSource;

impl WorkbookSource for CsvWorkbookSource {
    fn read_first_sheet(&self, file_name: &str, bytes: &[u8]) -> Result<RawSheet, IngestError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|err| IngestError::UnsupportedFormat(format!("{file_name}: {err}")))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(RawSheet {
            name: CSV_SHEET_NAME.to_string(),
            sheet_names: vec![CSV_SHEET_NAME.to_string()],
            rows,
        })
    }
}
