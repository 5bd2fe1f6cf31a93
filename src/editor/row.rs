//! One row of the variable list
//!
//! A [`VariableRow`] projects a [`VariableDefinition`] onto the list view: the
//! name goes into the editable first column, a value control into the second.
//! The control is picked once from the variable's kind and never changes:
//! flags get a checkbox ([`ValueControl::Toggle`]), numbers get an unbounded
//! spinner ([`ValueControl::Spinner`]).

use crate::error::{QuestEditorError, Result};
use crate::model::DirtyTracker;
use crate::types::{VariableDefinition, VariableId, VariableKind, VariableValue};

use super::view::NAME_COLUMN;

/// Whether a row's value control is embedded in a view yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Constructed but not shown
    Detached,
    /// Value control embedded and live
    Attached,
}

/// Value-editing control of a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueControl {
    /// Checkbox for a flag variable
    Toggle { checked: bool },
    /// Numeric field for a number variable, no range limits
    Spinner { value: f64 },
}

impl ValueControl {
    pub fn for_value(value: VariableValue) -> Self {
        match value {
            VariableValue::Bool(checked) => ValueControl::Toggle { checked },
            VariableValue::Number(value) => ValueControl::Spinner { value },
        }
    }

    /// The control's current state as a variable value
    pub fn value(&self) -> VariableValue {
        match *self {
            ValueControl::Toggle { checked } => VariableValue::Bool(checked),
            ValueControl::Spinner { value } => VariableValue::Number(value),
        }
    }

    pub fn kind(&self) -> VariableKind {
        self.value().kind()
    }
}

/// A variable bound to a list row and its value control
#[derive(Debug, Clone)]
pub struct VariableRow {
    variable_id: VariableId,
    label: String,
    control: ValueControl,
    state: RowState,
}

impl VariableRow {
    /// Build a detached row showing `variable`
    pub fn new(variable: &VariableDefinition) -> Self {
        Self {
            variable_id: variable.id.clone(),
            label: variable.name.clone(),
            control: ValueControl::for_value(variable.initial_value),
            state: RowState::Detached,
        }
    }

    pub fn variable_id(&self) -> &VariableId {
        &self.variable_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn control(&self) -> &ValueControl {
        &self.control
    }

    pub fn state(&self) -> RowState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.state == RowState::Attached
    }

    pub fn is_bool_row(&self) -> bool {
        matches!(self.control, ValueControl::Toggle { .. })
    }

    pub fn is_number_row(&self) -> bool {
        matches!(self.control, ValueControl::Spinner { .. })
    }

    /// Only the name column accepts inline edits
    pub fn is_column_editable(&self, column: usize) -> bool {
        column == NAME_COLUMN
    }

    /// Embed the value control; called once the row sits in a view
    pub(crate) fn attach(&mut self) {
        if self.state == RowState::Detached {
            tracing::trace!("Attaching value control for {}", self.variable_id);
            self.state = RowState::Attached;
        }
    }

    /// Checkbox toggled: write the new state through to `variable`
    pub fn on_toggled(
        &mut self,
        checked: bool,
        variable: &mut VariableDefinition,
        dirty: &mut dyn DirtyTracker,
    ) -> Result<()> {
        self.check_bound(variable, VariableKind::Bool)?;
        self.control = ValueControl::Toggle { checked };
        variable.initial_value = VariableValue::Bool(checked);
        dirty.mark_dirty();
        tracing::debug!("Flag {} initial value set to {}", variable.name, checked);
        Ok(())
    }

    /// Spinner edited: write the new number through to `variable`
    pub fn on_value_changed(
        &mut self,
        value: f64,
        variable: &mut VariableDefinition,
        dirty: &mut dyn DirtyTracker,
    ) -> Result<()> {
        self.check_bound(variable, VariableKind::Number)?;
        if !value.is_finite() {
            return Err(QuestEditorError::NonFiniteNumber {
                variable: variable.name.clone(),
                value,
            });
        }
        self.control = ValueControl::Spinner { value };
        variable.initial_value = VariableValue::Number(value);
        dirty.mark_dirty();
        tracing::debug!("Number {} initial value set to {}", variable.name, value);
        Ok(())
    }

    fn check_bound(&self, variable: &VariableDefinition, kind: VariableKind) -> Result<()> {
        if variable.id != self.variable_id {
            return Err(QuestEditorError::UnknownVariable(variable.id.to_string()));
        }
        if !self.is_attached() {
            return Err(QuestEditorError::RowDetached(self.variable_id.to_string()));
        }
        if self.control.kind() != kind || variable.kind() != kind {
            return Err(QuestEditorError::ValueKindMismatch(self.variable_id.to_string()));
        }
        Ok(())
    }
}
