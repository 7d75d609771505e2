use crate::domain::entities::edit::{CellKey, EditSession};
use crate::domain::entities::grid::{EditableGrid, GridError};
use crate::domain::entities::sheet::RowKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub max_cell_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{column}: value is longer than {limit} characters")]
    TooLong { column: String, limit: usize },
    #[error("{column}: value contains a control character")]
    ControlCharacter { column: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// What became of an edit session after Enter or focus loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Saved { cell: CellKey },
    /// The buffer failed validation. The session stays open with its error set.
    Rejected(EditSession),
    /// The row the session points at is gone. The edit is discarded.
    Dropped { cell: CellKey, error: GridError },
}

impl CommitOutcome {
    /// The session to keep editing, if any.
    pub fn next_session(&self) -> Option<&EditSession> {
        match self {
            CommitOutcome::Rejected(session) => Some(session),
            CommitOutcome::Saved { .. } | CommitOutcome::Dropped { .. } => None,
        }
    }
}

pub struct EditService {
    rules: FieldRules,
}

impl EditService {
    pub fn new(rules: FieldRules) -> Self {
        Self { rules }
    }

    pub fn validate(&self, column: &str, value: &str) -> Result<(), ValidationError> {
        if value.chars().count() > self.rules.max_cell_chars {
            return Err(ValidationError::TooLong {
                column: column.to_string(),
                limit: self.rules.max_cell_chars,
            });
        }
        if value
            .chars()
            .any(|ch| ch.is_control() && !matches!(ch, '\t' | '\n' | '\r'))
        {
            return Err(ValidationError::ControlCharacter {
                column: column.to_string(),
            });
        }
        Ok(())
    }

    /// Validates the session buffer and merges it into the grid row it belongs to.
    pub fn commit(&self, grid: &mut EditableGrid, session: &EditSession) -> Result<RowKey, CommitError> {
        self.validate(&session.cell.column, &session.buffer)?;
        grid.commit_cell_edit(session.to_patch())?;
        Ok(session.cell.row_key)
    }

    pub fn finish(&self, grid: &mut EditableGrid, mut session: EditSession) -> CommitOutcome {
        match self.commit(grid, &session) {
            Ok(_) => CommitOutcome::Saved { cell: session.cell },
            Err(CommitError::Invalid(err)) => {
                session.reject(err.to_string());
                CommitOutcome::Rejected(session)
            }
            Err(CommitError::Grid(error)) => CommitOutcome::Dropped {
                cell: session.cell,
                error,
            },
        }
    }
}
