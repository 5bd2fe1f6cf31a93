//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use quest_editor::editor::{EditorContext, Prompter, VariableListEditor};
use quest_editor::model::{DefaultVariableFactory, FileState};
use quest_editor::types::{Chapter, VariableKind};
use quest_editor::EditorSettings;

/// A chapter with an editor already initialized from it
pub struct Fixture {
    pub chapter: Chapter,
    pub file_state: FileState,
    pub factory: DefaultVariableFactory,
    pub editor: VariableListEditor,
}

impl Fixture {
    pub fn new(chapter: Chapter) -> Self {
        Self::with_settings(chapter, EditorSettings::default())
    }

    pub fn with_settings(chapter: Chapter, settings: EditorSettings) -> Self {
        let mut editor = VariableListEditor::new(settings);
        editor.initialize(&chapter.variables);
        Self {
            chapter,
            file_state: FileState::untitled(),
            factory: DefaultVariableFactory::new(),
            editor,
        }
    }

    /// Split into the editor and the context it edits through
    pub fn parts(&mut self) -> (&mut VariableListEditor, EditorContext<'_>) {
        (
            &mut self.editor,
            EditorContext {
                chapter: &mut self.chapter,
                dirty: &mut self.file_state,
                factory: &mut self.factory,
            },
        )
    }

    /// Variable ids in list order
    pub fn list_ids(&self) -> Vec<String> {
        self.chapter
            .variables
            .iter()
            .map(|v| v.id.to_string())
            .collect()
    }

    /// Variable ids in row order
    pub fn row_ids(&self) -> Vec<String> {
        self.editor
            .view()
            .rows()
            .iter()
            .map(|r| r.variable_id().to_string())
            .collect()
    }
}

/// Prompter answering every dialog from a fixed script
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub kind: Option<VariableKind>,
    pub confirm: bool,
    pub asked_to_delete: Vec<String>,
}

impl ScriptedPrompter {
    pub fn picking(kind: VariableKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn confirming(confirm: bool) -> Self {
        Self {
            confirm,
            ..Default::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn pick_variable_kind(&mut self) -> Option<VariableKind> {
        self.kind
    }

    fn confirm_delete(&mut self, variable_name: &str) -> bool {
        self.asked_to_delete.push(variable_name.to_string());
        self.confirm
    }
}
