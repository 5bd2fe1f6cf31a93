//! Referential cleanup of branch data when a variable is deleted
//!
//! Conditions and operations point at variables by id. Before a variable is
//! removed from the chapter, every condition and operation that mentions it
//! is dropped so nothing in the branch data dangles. Endings branches cannot
//! reference variables and are skipped.

use crate::types::{Branch, VariableId};

/// What a cleanup pass removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub conditions_removed: usize,
    pub operations_removed: usize,
}

impl CleanupReport {
    pub fn total(&self) -> usize {
        self.conditions_removed + self.operations_removed
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Remove every condition and operation in `branches` that refers to `id`
///
/// A condition is removed when its left operand is `id`, or when it compares
/// against another variable and its right operand is `id`. An operation is
/// removed when it targets `id`.
pub fn remove_variable_references(branches: &mut [Branch], id: &VariableId) -> CleanupReport {
    let mut report = CleanupReport::default();

    for branch in branches.iter_mut().filter(|br| !br.is_endings_branch) {
        for segment in &mut branch.segments {
            for option in &mut segment.options {
                let before = option.conditions.len();
                option.conditions.retain(|c| !c.references(id));
                report.conditions_removed += before - option.conditions.len();

                let before = option.operations.len();
                option.operations.retain(|o| o.variable_id != *id);
                report.operations_removed += before - option.operations.len();
            }
        }
    }

    report
}
