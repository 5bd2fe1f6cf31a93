//! Document-side collaborators of the variable editor
//!
//! The editor never reaches for process-wide state. Everything it needs from
//! the surrounding document is passed in explicitly:
//!
//! - [`DirtyTracker`] - unsaved-changes tracking (`mark_dirty`)
//! - [`VariableFactory`] - creation of new variables with fresh ids
//! - [`cleanup`] - referential cleanup of branch data before a delete

pub mod cleanup;
pub mod defaults;
pub mod file_state;

pub use cleanup::{remove_variable_references, CleanupReport};
pub use defaults::{DefaultVariableFactory, VariableFactory};
pub use file_state::{DirtyTracker, FileState};
