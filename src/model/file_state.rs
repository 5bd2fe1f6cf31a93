//! Unsaved-changes tracking for the open chapter file

use std::path::{Path, PathBuf};

/// Receives a notification after every state-changing edit
#[cfg_attr(test, mockall::automock)]
pub trait DirtyTracker {
    fn mark_dirty(&mut self);
}

/// Path and dirty flag of the chapter currently being edited
#[derive(Debug, Clone, Default)]
pub struct FileState {
    path: Option<PathBuf>,
    dirty: bool,
    /// Total `mark_dirty` calls since the file was opened
    dirty_marks: u64,
}

impl FileState {
    /// State for an unsaved, untitled chapter
    pub fn untitled() -> Self {
        Self::default()
    }

    /// State for a chapter just loaded from `path`
    pub fn opened(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn dirty_marks(&self) -> u64 {
        self.dirty_marks
    }

    /// Record a successful save to `path`
    pub fn saved_to(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
        self.mark_clean();
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// File name shown in the window title
    pub fn display_name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Window title, with a trailing `*` while there are unsaved changes
    pub fn title(&self) -> String {
        if self.dirty {
            format!("{}*", self.display_name())
        } else {
            self.display_name()
        }
    }
}

impl DirtyTracker for FileState {
    fn mark_dirty(&mut self) {
        if !self.dirty {
            tracing::debug!("Chapter {} has unsaved changes", self.display_name());
        }
        self.dirty = true;
        self.dirty_marks += 1;
    }
}
