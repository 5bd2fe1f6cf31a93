//! Creation of new variables

use crate::types::{VariableDefinition, VariableId, VariableValue};

/// Base name given to freshly created variables
pub const DEFAULT_VARIABLE_NAME: &str = "variable";

/// Creates variable records for the editor's "add" action
#[cfg_attr(test, mockall::automock)]
pub trait VariableFactory {
    /// Create a variable whose type and starting value are `initial_value`
    fn create_variable(&mut self, initial_value: VariableValue) -> VariableDefinition;
}

/// Factory producing random ids and numbered default names
#[derive(Debug, Default)]
pub struct DefaultVariableFactory {
    created: usize,
}

impl DefaultVariableFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables created so far
    pub fn created(&self) -> usize {
        self.created
    }
}

impl VariableFactory for DefaultVariableFactory {
    fn create_variable(&mut self, initial_value: VariableValue) -> VariableDefinition {
        self.created += 1;
        let name = format!("{}_{}", DEFAULT_VARIABLE_NAME, self.created);
        VariableDefinition::new(VariableId::generate(), name, initial_value)
    }
}
