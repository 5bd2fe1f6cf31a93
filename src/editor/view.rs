//! List view model hosting the variable rows
//!
//! [`TreeView`] stands in for the toolkit's tree widget: an ordered set of
//! top-level rows, a current row, and per-row embedded value controls. The
//! egui pane renders it; the editor keeps it in lockstep with the chapter's
//! variable list.

use crate::error::{QuestEditorError, Result};

use super::row::VariableRow;

/// Column holding the editable variable name
pub const NAME_COLUMN: usize = 0;

/// Column holding the embedded value control
pub const VALUE_COLUMN: usize = 1;

/// Number of columns in the view
pub const COLUMN_COUNT: usize = 2;

/// Flat list of rows with a single current row
#[derive(Debug, Clone, Default)]
pub struct TreeView {
    rows: Vec<VariableRow>,
    current: Option<usize>,
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[VariableRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Result<&VariableRow> {
        let len = self.rows.len();
        self.rows
            .get(index)
            .ok_or(QuestEditorError::RowOutOfRange { index, len })
    }

    pub fn row_mut(&mut self, index: usize) -> Result<&mut VariableRow> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(QuestEditorError::RowOutOfRange { index, len })
    }

    /// Remove every row
    pub fn clear(&mut self) {
        self.rows.clear();
        self.current = None;
    }

    /// Append a row at the end
    pub fn add_row(&mut self, row: VariableRow) {
        self.rows.push(row);
    }

    /// Append a row and embed its value control
    pub fn push_attached(&mut self, mut row: VariableRow) {
        row.attach();
        self.rows.push(row);
    }

    /// Insert a row before `index` (`index == len` appends)
    pub fn insert_row(&mut self, index: usize, row: VariableRow) -> Result<()> {
        let len = self.rows.len();
        if index > len {
            return Err(QuestEditorError::RowOutOfRange { index, len });
        }
        self.rows.insert(index, row);
        if let Some(current) = self.current {
            if current >= index {
                self.current = Some(current + 1);
            }
        }
        Ok(())
    }

    /// Remove and return the row at `index`
    pub fn take_row(&mut self, index: usize) -> Result<VariableRow> {
        let len = self.rows.len();
        if index >= len {
            return Err(QuestEditorError::RowOutOfRange { index, len });
        }
        let row = self.rows.remove(index);
        self.current = match self.current {
            Some(current) if current == index => {
                if self.rows.is_empty() {
                    None
                } else {
                    Some(index.min(self.rows.len() - 1))
                }
            }
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        Ok(row)
    }

    /// Embed the value control of the row at `index` into [`VALUE_COLUMN`]
    ///
    /// The row must already be in the view.
    pub fn set_item_widget(&mut self, index: usize) -> Result<()> {
        self.row_mut(index)?.attach();
        Ok(())
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Change the current row; out-of-range indices clear it
    pub fn set_current(&mut self, index: Option<usize>) {
        self.current = index.filter(|i| *i < self.rows.len());
    }

    pub fn current_row(&self) -> Option<&VariableRow> {
        self.current.and_then(|i| self.rows.get(i))
    }
}
