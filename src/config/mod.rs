//! Configuration module for the quest editor
//!
//! This module handles:
//! - Application state persistence (recent chapters, preferences)
//! - Chapter files (`.questchapter`) holding a complete chapter document
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.hxyulin.quest-editor/`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.quest-editor/`
//! - **Windows**: `%APPDATA%\dev.hxyulin.quest-editor\`
//!
//! # Example
//!
//! ```ignore
//! use quest_editor::config::{AppState, ChapterFile};
//!
//! let mut state = AppState::load_or_default();
//! if let Some(path) = state.get_last_chapter() {
//!     let file = ChapterFile::load(path)?;
//! }
//! ```

pub mod settings;

pub use settings::*;

use crate::error::{QuestEditorError, Result};
use crate::types::Chapter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Application identifier for data directories
pub const APP_ID: &str = "dev.hxyulin.quest-editor";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Chapter file extension
pub const CHAPTER_FILE_EXTENSION: &str = "questchapter";

/// Current chapter file format version
pub const CHAPTER_FILE_VERSION: u32 = 1;

/// Maximum number of recent chapters to remember
pub const MAX_RECENT_CHAPTERS: usize = 10;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        QuestEditorError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            QuestEditorError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

// ==================== Recent Chapter Entry ====================

/// Information about a recently opened chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentChapter {
    /// Path to the chapter file
    pub path: PathBuf,

    /// Chapter name (from the chapter file)
    pub name: String,

    /// Last opened timestamp (Unix seconds)
    pub last_opened: u64,
}

impl RecentChapter {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            last_opened: unix_now(),
        }
    }

    /// Display label for menus
    pub fn label(&self) -> String {
        let file = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.name.is_empty() {
            file
        } else {
            format!("{} ({})", self.name, file)
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// ==================== App State ====================

/// Persistent application state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Recently opened chapters, most recent first
    #[serde(default)]
    pub recent_chapters: Vec<RecentChapter>,

    /// Chapter open when the app last closed
    #[serde(default)]
    pub last_chapter: Option<PathBuf>,

    #[serde(default)]
    pub ui_preferences: UiPreferences,

    #[serde(default)]
    pub editor: EditorSettings,
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            QuestEditorError::Config("Could not determine app state path".to_string())
        })?;
        Self::load_from(&path)
    }

    /// Load app state from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| QuestEditorError::Config(format!("Failed to read app state: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| QuestEditorError::Config(format!("Failed to parse app state: {}", e)))
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(&dir.join(APP_STATE_FILE))
    }

    /// Save app state to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            QuestEditorError::Config(format!("Failed to serialize app state: {}", e))
        })?;

        std::fs::write(path, content)
            .map_err(|e| QuestEditorError::Config(format!("Failed to write app state: {}", e)))
    }

    /// Add or refresh a recent chapter and make it the last chapter
    pub fn add_recent_chapter(&mut self, path: impl AsRef<Path>, name: &str) {
        let path = path.as_ref();
        self.recent_chapters.retain(|r| r.path != path);
        self.recent_chapters
            .insert(0, RecentChapter::new(path.to_path_buf(), name));
        self.recent_chapters.truncate(MAX_RECENT_CHAPTERS);
        self.last_chapter = Some(path.to_path_buf());
    }

    /// Chapter to reopen on startup, if any
    pub fn get_last_chapter(&self) -> Option<&Path> {
        self.last_chapter.as_deref()
    }

    /// Forget recent chapters whose files no longer exist
    pub fn cleanup_missing_chapters(&mut self) {
        let before = self.recent_chapters.len();
        self.recent_chapters.retain(|r| r.path.exists());
        if self
            .last_chapter
            .as_ref()
            .is_some_and(|p| !p.exists())
        {
            self.last_chapter = None;
        }
        let removed = before - self.recent_chapters.len();
        if removed > 0 {
            tracing::info!("Removed {} missing chapters from recent list", removed);
        }
    }
}

// ==================== Chapter File ====================

/// On-disk chapter document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterFile {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    pub chapter: Chapter,
}

fn default_version() -> u32 {
    CHAPTER_FILE_VERSION
}

impl ChapterFile {
    pub fn new(chapter: Chapter) -> Self {
        Self {
            version: CHAPTER_FILE_VERSION,
            chapter,
        }
    }

    /// Load a chapter file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            QuestEditorError::ChapterFile(format!("Failed to read chapter file {:?}: {}", path, e))
        })?;

        let file: Self = serde_json::from_str(&content).map_err(|e| {
            QuestEditorError::ChapterFile(format!("Failed to parse chapter file {:?}: {}", path, e))
        })?;

        if file.version > CHAPTER_FILE_VERSION {
            tracing::warn!(
                "Chapter file {:?} has newer version {} (supported: {})",
                path,
                file.version,
                CHAPTER_FILE_VERSION
            );
        }

        Ok(file)
    }

    /// Save chapter file to disk as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    QuestEditorError::ChapterFile(format!(
                        "Failed to create chapter directory: {}",
                        e
                    ))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;

        std::fs::write(path, content).map_err(|e| {
            QuestEditorError::ChapterFile(format!("Failed to write chapter file {:?}: {}", path, e))
        })
    }
}
