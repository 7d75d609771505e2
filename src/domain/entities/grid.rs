use crate::domain::entities::sheet::{ColumnDescriptor, RowKey, RowPatch, RowRecord, SheetSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("no sheet is loaded")]
    NotLoaded,
    #[error("no row with key {0}")]
    UnknownRowKey(RowKey),
}

/// The row collection backing the grid. Owned by a single controller and
/// replaced wholesale on each upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditableGrid {
    sheet: Option<SheetSnapshot>,
}

impl EditableGrid {
    pub fn load(&mut self, snapshot: SheetSnapshot) {
        self.sheet = Some(snapshot);
    }

    pub fn is_loaded(&self) -> bool {
        self.sheet.is_some()
    }

    pub fn sheet(&self) -> Option<&SheetSnapshot> {
        self.sheet.as_ref()
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        self.sheet
            .as_ref()
            .map(|sheet| sheet.columns.as_slice())
            .unwrap_or(&[])
    }

    pub fn rows(&self) -> &[RowRecord] {
        self.sheet
            .as_ref()
            .map(|sheet| sheet.rows.as_slice())
            .unwrap_or(&[])
    }

    pub fn commit_cell_edit(&mut self, patch: RowPatch) -> Result<(), GridError> {
        let sheet = self.sheet.as_mut().ok_or(GridError::NotLoaded)?;
        let row = sheet
            .rows
            .iter_mut()
            .find(|row| row.key == patch.key)
            .ok_or(GridError::UnknownRowKey(patch.key))?;
        row.merge(patch.fields);
        Ok(())
    }

    /// Appends an all-empty row shaped like the last one. Returns `None` when
    /// nothing has been loaded yet.
    pub fn append_blank_row(&mut self) -> Option<RowKey> {
        let sheet = self.sheet.as_mut()?;
        let key = RowKey(sheet.rows.len());
        let blank = match sheet.rows.last() {
            Some(last) => last.blank_like(key),
            None => RowRecord::new(
                key,
                sheet
                    .columns
                    .iter()
                    .map(|column| (column.name.clone(), String::new()))
                    .collect(),
            ),
        };
        sheet.rows.push(blank);
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn loaded_grid() -> EditableGrid {
        let mut grid = EditableGrid::default();
        grid.load(SheetSnapshot {
            sheet_name: "Sheet1".to_string(),
            sheet_names: vec!["Sheet1".to_string()],
            columns: vec![
                ColumnDescriptor::editable("id"),
                ColumnDescriptor::editable("name"),
            ],
            rows: vec![
                RowRecord::new(RowKey(0), fields(&[("id", "1"), ("name", "A")])),
                RowRecord::new(RowKey(1), fields(&[("id", "2"), ("name", "C")])),
            ],
        });
        grid
    }

    #[test]
    fn commit_updates_only_the_matching_row_field() {
        let mut grid = loaded_grid();

        grid.commit_cell_edit(RowPatch::single(RowKey(0), "name", "B"))
            .expect("commit should succeed");

        assert_eq!(grid.rows()[0].fields, fields(&[("id", "1"), ("name", "B")]));
        assert_eq!(
            grid.rows()[1].fields,
            fields(&[("id", "2"), ("name", "C")]),
            "other rows should be untouched"
        );
    }

    #[test]
    fn commit_same_value_twice_is_idempotent() {
        let mut grid = loaded_grid();
        let patch = RowPatch::single(RowKey(1), "name", "D");

        grid.commit_cell_edit(patch.clone())
            .expect("first commit should succeed");
        let after_first = grid.clone();
        grid.commit_cell_edit(patch)
            .expect("second commit should succeed");

        assert_eq!(grid, after_first);
    }

    #[test]
    fn commit_with_unknown_key_is_reported() {
        let mut grid = loaded_grid();
        let before = grid.clone();

        let result = grid.commit_cell_edit(RowPatch::single(RowKey(9), "name", "X"));

        assert_eq!(result, Err(GridError::UnknownRowKey(RowKey(9))));
        assert_eq!(grid, before, "rows should be unchanged");
    }

    #[test]
    fn commit_before_load_is_reported() {
        let mut grid = EditableGrid::default();

        let result = grid.commit_cell_edit(RowPatch::single(RowKey(0), "name", "X"));

        assert_eq!(result, Err(GridError::NotLoaded));
    }

    #[test]
    fn append_before_load_is_a_no_op() {
        let mut grid = EditableGrid::default();

        assert_eq!(grid.append_blank_row(), None);
        assert!(grid.rows().is_empty());
        assert!(!grid.is_loaded());
    }

    #[test]
    fn append_adds_blank_row_with_next_key() {
        let mut grid = loaded_grid();

        let key = grid.append_blank_row();

        assert_eq!(key, Some(RowKey(2)));
        assert_eq!(grid.rows().len(), 3);
        let appended = grid
            .rows()
            .iter()
            .find(|row| row.key == RowKey(2))
            .expect("appended row should exist");
        assert_eq!(appended.fields, fields(&[("id", ""), ("name", "")]));
    }

    #[test]
    fn appended_keys_keep_increasing() {
        let mut grid = loaded_grid();

        let keys: Vec<_> = (0..3).filter_map(|_| grid.append_blank_row()).collect();

        assert_eq!(keys, vec![RowKey(2), RowKey(3), RowKey(4)]);
        let all: Vec<_> = grid.rows().iter().map(|row| row.key.0).collect();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn append_to_sheet_without_rows_uses_column_names() {
        let mut grid = EditableGrid::default();
        grid.load(SheetSnapshot {
            sheet_name: "Sheet1".to_string(),
            sheet_names: vec!["Sheet1".to_string()],
            columns: vec![ColumnDescriptor::editable("id")],
            rows: Vec::new(),
        });

        assert_eq!(grid.append_blank_row(), Some(RowKey(0)));
        assert_eq!(grid.rows()[0].fields, fields(&[("id", "")]));
    }

    #[test]
    fn appended_row_accepts_edits() {
        let mut grid = loaded_grid();
        let key = grid.append_blank_row().expect("grid is loaded");

        grid.commit_cell_edit(RowPatch::single(key, "id", "3"))
            .expect("commit to appended row should succeed");

        assert_eq!(grid.rows()[2].value("id"), "3");
    }
}
