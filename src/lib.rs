//! # Quest Editor: chapter variable editing
//!
//! Authoring tool for branching quests. A chapter owns a list of typed
//! variables (flags and numbers) and a set of branches whose options test
//! and change those variables. This crate provides the variable list editor
//! that keeps the on-screen list and the chapter's variable list in step.
//!
//! ## Architecture
//!
//! - **Types**: the chapter document (variables, branches, conditions, operations)
//! - **Model**: dirty tracking, default variable creation and reference cleanup
//! - **Editor**: the toolkit-independent list editor (rows, context menu, edits)
//! - **Frontend**: eframe/egui window drawing the editor and a chapter outline
//!
//! ## Configuration
//!
//! Application state (recent chapters, preferences) is stored in the platform-appropriate
//! data directory under `dev.hxyulin.quest-editor`. Chapters themselves are
//! `.questchapter` JSON files chosen by the user.
//!
//! ## Example
//!
//! ```ignore
//! use quest_editor::{
//!     config::EditorSettings,
//!     editor::{EditorContext, VariableListEditor},
//!     model::{DefaultVariableFactory, FileState},
//!     types::{Chapter, VariableKind},
//! };
//!
//! let mut chapter = Chapter::new("Prologue");
//! let mut file_state = FileState::untitled();
//! let mut factory = DefaultVariableFactory::new();
//!
//! let mut editor = VariableListEditor::new(EditorSettings::default());
//! editor.initialize(&chapter.variables);
//!
//! let mut ctx = EditorContext {
//!     chapter: &mut chapter,
//!     dirty: &mut file_state,
//!     factory: &mut factory,
//! };
//! editor.add_variable(None, Some(VariableKind::Bool), &mut ctx)?;
//! ```

// Translations live in locales/app.yml
rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod frontend;
pub mod i18n;
pub mod model;
pub mod types;

// Re-export commonly used types
pub use app::QuestEditorApp;
pub use config::{AppState, ChapterFile, EditorSettings};
pub use editor::{EditOutcome, EditorContext, MenuAction, VariableListEditor};
pub use error::{QuestEditorError, Result};
pub use types::{Chapter, VariableDefinition, VariableId, VariableKind, VariableValue};
