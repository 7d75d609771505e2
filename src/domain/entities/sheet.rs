use std::collections::BTreeMap;
use std::fmt;

/// Synthetic row identifier assigned at ingestion time, in sheet order from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey(pub usize);

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    pub key: RowKey,
    pub fields: BTreeMap<String, String>,
}

impl RowRecord {
    pub fn new(key: RowKey, fields: BTreeMap<String, String>) -> Self {
        Self { key, fields }
    }

    /// Value of `column`, or the empty string when the record has no such field.
    pub fn value(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// Same field set as `self`, every value cleared.
    pub fn blank_like(&self, key: RowKey) -> Self {
        let fields = self
            .fields
            .keys()
            .map(|name| (name.clone(), String::new()))
            .collect();
        Self { key, fields }
    }

    pub fn merge(&mut self, fields: BTreeMap<String, String>) {
        self.fields.extend(fields);
    }
}

/// One grid column. Commit wiring lives in the table component, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub editable: bool,
}

impl ColumnDescriptor {
    pub fn editable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            editable: true,
        }
    }
}

/// Fields to merge over an existing row, addressed by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPatch {
    pub key: RowKey,
    pub fields: BTreeMap<String, String>,
}

impl RowPatch {
    pub fn single(key: RowKey, column: impl Into<String>, value: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(column.into(), value.into());
        Self { key, fields }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSnapshot {
    pub sheet_name: String,
    pub sheet_names: Vec<String>,
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<RowRecord>,
}
