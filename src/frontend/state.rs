//! Shared state types for the frontend
//!
//! Panes receive `SharedState` via borrowing and return `AppAction`s for
//! anything that reaches beyond the chapter document (files, preferences,
//! other panes).

use std::path::PathBuf;

use crate::editor::{EditOutcome, EditorContext};
use crate::i18n::Language;
use crate::model::{DefaultVariableFactory, FileState};
use crate::types::Chapter;

/// Shared state accessible by all panes (borrowed, not owned).
pub struct SharedState<'a> {
    /// Chapter being edited
    pub chapter: &'a mut Chapter,

    /// Path and dirty flag of the chapter file
    pub file_state: &'a mut FileState,

    /// Creates variables for "Add variable"
    pub factory: &'a mut DefaultVariableFactory,

    // Error display
    pub last_error: &'a mut Option<String>,
}

impl SharedState<'_> {
    /// Borrow the collaborators the variable editor needs for one event
    pub fn editor_context(&mut self) -> EditorContext<'_> {
        EditorContext {
            chapter: &mut *self.chapter,
            dirty: &mut *self.file_state,
            factory: &mut *self.factory,
        }
    }

    /// Record an error for the status bar
    pub fn report_error(&mut self, error: impl std::fmt::Display) {
        tracing::warn!("{}", error);
        *self.last_error = Some(error.to_string());
    }
}

/// Actions that any pane can emit
///
/// Panes return `Vec<AppAction>` instead of mutating application state
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Chapter files
    /// Start a new, empty chapter
    NewChapter,
    /// Open a chapter file
    OpenChapter(PathBuf),
    /// Save to the current path, asking for one if the chapter is untitled
    SaveChapter,
    /// Save to a new path
    SaveChapterAs(PathBuf),

    // Variable editor
    /// The variable editor changed the chapter; dependent views refresh
    VariablesEdited(EditOutcome),

    // Preferences
    SetLanguage(Language),
    SetDarkMode(bool),
    SetAllowReordering(bool),
}
