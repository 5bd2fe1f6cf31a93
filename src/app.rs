//! Application module
//!
//! This module re-exports the main application type from the frontend module.

pub use crate::frontend::QuestEditorApp;

pub use crate::frontend::panes::VariableTreeState;
