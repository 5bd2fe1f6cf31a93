//! Error handling for the quest editor
//!
//! This module defines the crate error type and a Result alias for use
//! throughout the application. Declined dialogs and cancelled pickers are
//! not errors; they surface as [`crate::editor::EditOutcome::Unchanged`].

use thiserror::Error;

/// Main error type for quest editor operations
#[derive(Error, Debug)]
pub enum QuestEditorError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to chapter files
    #[error("Chapter file error: {0}")]
    ChapterFile(String),

    /// A row index that does not exist in the list view
    #[error("Row {index} is out of range (list has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// A value edit arrived for a row whose control was never attached
    #[error("Row for variable {0} is not attached to a view")]
    RowDetached(String),

    /// A row refers to a variable that is no longer in the chapter
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// A value edit whose type does not match the row's control
    #[error("Value type mismatch for variable {0}")]
    ValueKindMismatch(String),

    /// Infinite and NaN numbers cannot be stored in a chapter file
    #[error("Initial value of {variable} must be a finite number, got {value}")]
    NonFiniteNumber { variable: String, value: f64 },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<QuestEditorError>,
    },
}

impl QuestEditorError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        QuestEditorError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for quest editor operations
pub type Result<T> = std::result::Result<T, QuestEditorError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| QuestEditorError::Io(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| QuestEditorError::Io(e).with_context(f()))
    }
}
