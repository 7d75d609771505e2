use crate::domain::entities::sheet::{RowKey, RowPatch};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub row_key: RowKey,
    pub column: String,
}

impl CellKey {
    pub fn new(row_key: RowKey, column: impl Into<String>) -> Self {
        Self {
            row_key,
            column: column.into(),
        }
    }
}

/// The cell currently in editing mode. Every other cell is in display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub cell: CellKey,
    pub buffer: String,
    pub error: Option<String>,
}

impl EditSession {
    /// Enters editing mode with the cell's current value in the buffer.
    pub fn begin(cell: CellKey, current_value: impl Into<String>) -> Self {
        Self {
            cell,
            buffer: current_value.into(),
            error: None,
        }
    }

    pub fn is_for(&self, cell: &CellKey) -> bool {
        &self.cell == cell
    }

    pub fn set_buffer(&mut self, value: String) {
        self.buffer = value;
        self.error = None;
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn to_patch(&self) -> RowPatch {
        RowPatch::single(self.cell.row_key, self.cell.column.clone(), self.buffer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_copies_current_value_into_buffer() {
        let session = EditSession::begin(CellKey::new(RowKey(2), "name"), "A");

        assert_eq!(session.buffer, "A");
        assert!(session.error.is_none());
        assert!(session.is_for(&CellKey::new(RowKey(2), "name")));
        assert!(!session.is_for(&CellKey::new(RowKey(2), "id")));
    }

    #[test]
    fn editing_buffer_clears_previous_rejection() {
        let mut session = EditSession::begin(CellKey::new(RowKey(0), "name"), "A");
        session.reject("too long");

        session.set_buffer("B".to_string());

        assert_eq!(session.buffer, "B");
        assert!(session.error.is_none(), "new input should clear the error");
    }

    #[test]
    fn patch_targets_the_edited_cell() {
        let mut session = EditSession::begin(CellKey::new(RowKey(0), "name"), "A");
        session.set_buffer("B".to_string());

        let patch = session.to_patch();

        assert_eq!(patch, RowPatch::single(RowKey(0), "name", "B"));
    }
}
