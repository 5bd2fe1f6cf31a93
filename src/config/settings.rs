//! User-adjustable settings persisted in the app state
//!
//! # Main Types
//!
//! - [`EditorSettings`] - Behaviour of the variable list editor
//! - [`UiPreferences`] - Appearance and language

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Settings for the variable list editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Offer "Move up" / "Move down" in the context menu
    #[serde(default = "default_true")]
    pub allow_reordering: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            allow_reordering: true,
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Use the dark theme
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Interface language
    #[serde(default)]
    pub language: Language,

    /// Width of the variable panel in points
    #[serde(default = "default_panel_width")]
    pub variable_panel_width: f32,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: Language::default(),
            variable_panel_width: default_panel_width(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_panel_width() -> f32 {
    320.0
}
