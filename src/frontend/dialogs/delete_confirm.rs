//! Delete confirmation dialog
//!
//! Shown before a variable is deleted. Only "Yes" deletes; "No", Escape and
//! clicking outside all leave the chapter untouched.

use rust_i18n::t;

use super::{Dialog, DialogAction, DialogState, DialogWindowConfig};
use egui::Ui;

/// State for the delete confirmation dialog
#[derive(Debug, Default)]
pub struct DeleteConfirmState {
    /// Row index and name of the variable awaiting confirmation
    pub pending: Option<(usize, String)>,
}

impl DialogState for DeleteConfirmState {
    fn reset(&mut self) {
        self.pending = None;
    }

    fn is_valid(&self) -> bool {
        self.pending.is_some()
    }
}

impl DeleteConfirmState {
    pub fn for_variable(index: usize, name: impl Into<String>) -> Self {
        Self {
            pending: Some((index, name.into())),
        }
    }
}

/// Action from the delete confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirmAction {
    /// User confirmed deleting the variable at this row
    Confirm(usize),
}

/// Context for rendering (none needed for this simple dialog)
pub struct DeleteConfirmContext;

/// The delete confirmation dialog
pub struct DeleteConfirmDialog;

impl Dialog for DeleteConfirmDialog {
    type State = DeleteConfirmState;
    type Action = DeleteConfirmAction;
    type Context<'a> = DeleteConfirmContext;

    fn title(_state: &Self::State) -> String {
        t!("dialog.delete.title").to_string()
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig::centered_modal(320.0)
    }

    fn render(
        state: &mut Self::State,
        _ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        let Some((index, name)) = state.pending.clone() else {
            return DialogAction::Close;
        };

        ui.label(t!("dialog.delete.prompt", name = name).to_string());

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button(t!("dialog.yes").to_string()).clicked() {
                return DialogAction::CloseWithAction(DeleteConfirmAction::Confirm(index));
            }
            let no = ui.button(t!("dialog.no").to_string());
            // "No" is the default answer
            if no.clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                return DialogAction::Close;
            }
            DialogAction::None
        })
        .inner
    }
}
