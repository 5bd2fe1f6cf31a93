//! Unsaved-changes confirmation
//!
//! Shown when the user replaces a dirty chapter by creating or opening
//! another one.

use std::path::PathBuf;

use rust_i18n::t;

use super::{Dialog, DialogAction, DialogState, DialogWindowConfig};
use egui::Ui;

/// File operation waiting for the user's confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingFileAction {
    NewChapter,
    OpenChapter(PathBuf),
}

#[derive(Debug, Default)]
pub struct DiscardChangesState {
    pub pending: Option<PendingFileAction>,
}

impl DialogState for DiscardChangesState {
    fn reset(&mut self) {
        self.pending = None;
    }

    fn is_valid(&self) -> bool {
        self.pending.is_some()
    }
}

impl DiscardChangesState {
    pub fn for_action(action: PendingFileAction) -> Self {
        Self {
            pending: Some(action),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardChangesAction {
    /// Drop unsaved changes and run the pending operation
    Discard(PendingFileAction),
}

pub struct DiscardChangesContext;

pub struct DiscardChangesDialog;

impl Dialog for DiscardChangesDialog {
    type State = DiscardChangesState;
    type Action = DiscardChangesAction;
    type Context<'a> = DiscardChangesContext;

    fn title(_state: &Self::State) -> String {
        t!("dialog.discard.title").to_string()
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig::centered_modal(360.0)
    }

    fn render(
        state: &mut Self::State,
        _ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        if state.pending.is_none() {
            return DialogAction::Close;
        }

        ui.label(t!("dialog.discard.prompt").to_string());
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button(t!("dialog.yes").to_string()).clicked() {
                if let Some(action) = state.pending.take() {
                    return DialogAction::CloseWithAction(DiscardChangesAction::Discard(action));
                }
            }
            if ui.button(t!("dialog.no").to_string()).clicked() {
                return DialogAction::Close;
            }
            DialogAction::None
        })
        .inner
    }
}
