//! Variable type picker shown by "Add variable"

use rust_i18n::t;

use super::{Dialog, DialogAction, DialogState, DialogWindowConfig};
use crate::types::VariableKind;
use egui::Ui;

/// State for the variable type picker
#[derive(Debug)]
pub struct VariableTypeState {
    /// Row that was current when "Add variable" was chosen
    pub insert_after: Option<usize>,
    /// Kind highlighted in the picker
    pub kind: VariableKind,
}

impl Default for VariableTypeState {
    fn default() -> Self {
        Self {
            insert_after: None,
            kind: VariableKind::Bool,
        }
    }
}

impl DialogState for VariableTypeState {}

impl VariableTypeState {
    /// Picker for a variable to be inserted after `insert_after`
    pub fn after(insert_after: Option<usize>) -> Self {
        Self {
            insert_after,
            ..Default::default()
        }
    }
}

/// Action from the variable type picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableTypeAction {
    /// Add a variable of `kind` after `insert_after`
    Add {
        insert_after: Option<usize>,
        kind: VariableKind,
    },
}

/// Context for rendering (none needed for this simple dialog)
pub struct VariableTypeContext;

/// The variable type picker
pub struct VariableTypeDialog;

/// Localized name of a variable kind as offered in the picker
pub fn kind_label(kind: VariableKind) -> String {
    match kind {
        VariableKind::Bool => t!("dialog.variable_type.flag").to_string(),
        VariableKind::Number => t!("dialog.variable_type.number").to_string(),
    }
}

impl Dialog for VariableTypeDialog {
    type State = VariableTypeState;
    type Action = VariableTypeAction;
    type Context<'a> = VariableTypeContext;

    fn title(_state: &Self::State) -> String {
        t!("dialog.variable_type.title").to_string()
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig::centered_modal(260.0)
    }

    fn render(
        state: &mut Self::State,
        _ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        ui.label(t!("dialog.variable_type.prompt").to_string());

        egui::ComboBox::from_id_salt("variable_type_picker")
            .selected_text(kind_label(state.kind))
            .show_ui(ui, |ui| {
                for kind in VariableKind::all() {
                    ui.selectable_value(&mut state.kind, *kind, kind_label(*kind));
                }
            });

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button(t!("dialog.ok").to_string()).clicked() {
                return DialogAction::CloseWithAction(VariableTypeAction::Add {
                    insert_after: state.insert_after,
                    kind: state.kind,
                });
            }
            if ui.button(t!("dialog.cancel").to_string()).clicked() {
                return DialogAction::Close;
            }
            DialogAction::None
        })
        .inner
    }
}
