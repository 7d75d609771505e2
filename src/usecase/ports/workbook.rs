#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("unsupported or malformed spreadsheet: {0}")]
    UnsupportedFormat(String),
    #[error("the first sheet has no data rows")]
    EmptySheet,
    #[error("file is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },
}

/// Cells of the first sheet of a workbook, already rendered to text, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSheet {
    pub name: String,
    pub sheet_names: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub trait WorkbookSource: Send + Sync {
    fn read_first_sheet(&self, file_name: &str, bytes: &[u8]) -> Result<RawSheet, IngestError>;
}
