//! Variable tree pane - the chapter's variables with inline editing
//!
//! Two columns: the variable name (double-click to rename) and its initial
//! value (checkbox for flags, drag value for numbers). Right-click opens the
//! context menu with add / move / delete.

use egui::Ui;
use rust_i18n::t;

use crate::editor::{
    ContextMenu, EditOutcome, MenuAction, MenuItem, ValueControl, VariableListEditor,
    VariableRow, COLUMN_COUNT, NAME_COLUMN,
};
use crate::error::Result;
use crate::frontend::dialogs::{DeleteConfirmState, VariableTypeState};
use crate::frontend::state::{AppAction, SharedState};

/// Label being edited inline
#[derive(Debug, Clone)]
pub struct LabelEdit {
    pub row: usize,
    pub buffer: String,
    /// Focus has been requested for the text field
    pub focused: bool,
}

/// State for the variable tree pane
#[derive(Default)]
pub struct VariableTreeState {
    pub editor: VariableListEditor,
    pub label_edit: Option<LabelEdit>,
    // Dialog states
    pub type_dialog_open: bool,
    pub type_dialog_state: VariableTypeState,
    pub delete_dialog_open: bool,
    pub delete_dialog_state: DeleteConfirmState,
}

impl VariableTreeState {
    pub fn new(editor: VariableListEditor) -> Self {
        Self {
            editor,
            ..Default::default()
        }
    }

    /// Whether one of this pane's modal dialogs is showing
    pub fn dialog_open(&self) -> bool {
        self.type_dialog_open || self.delete_dialog_open
    }
}

/// Deferred UI events, applied after the rows are drawn
#[derive(Default)]
struct RowEvents {
    select: Option<Option<usize>>,
    begin_edit: Option<usize>,
    commit_edit: Option<(usize, String)>,
    cancel_edit: bool,
    toggled: Option<(usize, bool)>,
    number_changed: Option<(usize, f64)>,
    menu_action: Option<(MenuAction, Option<usize>)>,
}

/// Render the variable tree pane
pub fn render(state: &mut VariableTreeState, shared: &mut SharedState<'_>, ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();
    let mut events = RowEvents::default();

    ui.heading(t!("variables.heading").to_string());
    ui.separator();

    let rows: Vec<VariableRow> = state.editor.view().rows().to_vec();
    let selected = state.editor.selected();

    ui.add_enabled_ui(!state.dialog_open(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("variable_tree_grid")
                .num_columns(COLUMN_COUNT)
                .striped(true)
                .min_col_width(100.0)
                .show(ui, |ui| {
                    ui.strong(t!("columns.name").to_string());
                    ui.strong(t!("columns.initial_value").to_string());
                    ui.end_row();

                    for (index, row) in rows.iter().enumerate() {
                        render_name_cell(state, ui, index, row, selected, &mut events);
                        render_value_cell(ui, index, row, &mut events);
                        ui.end_row();
                    }
                });

            if rows.is_empty() {
                ui.add_space(8.0);
                ui.weak(t!("variables.empty").to_string());
            }

            // Right-clicking the empty area below the rows uses the current row
            let space = ui.available_size().max(egui::vec2(0.0, 48.0));
            let background = ui.allocate_response(space, egui::Sense::click());
            if background.clicked() {
                events.select = Some(None);
            }
            let menu = state.editor.request_context_menu(selected);
            background.context_menu(|ui| render_context_menu(ui, &menu, &mut events));
        });
    });

    apply_events(state, shared, events, &mut actions);
    actions
}

fn render_name_cell(
    state: &mut VariableTreeState,
    ui: &mut Ui,
    index: usize,
    row: &VariableRow,
    selected: Option<usize>,
    events: &mut RowEvents,
) {
    if let Some(edit) = state.label_edit.as_mut().filter(|e| e.row == index) {
        let response = ui.text_edit_singleline(&mut edit.buffer);
        if !edit.focused {
            response.request_focus();
            edit.focused = true;
        }
        if response.lost_focus() {
            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                events.cancel_edit = true;
            } else {
                events.commit_edit = Some((index, edit.buffer.clone()));
            }
        }
        return;
    }

    let response = ui.selectable_label(selected == Some(index), row.label());
    if response.clicked() {
        events.select = Some(Some(index));
    }
    if response.double_clicked() && row.is_column_editable(NAME_COLUMN) {
        events.begin_edit = Some(index);
    }
    if response.secondary_clicked() {
        events.select = Some(Some(index));
    }
    let menu = state.editor.request_context_menu(Some(index));
    response.context_menu(|ui| render_context_menu(ui, &menu, events));
}

fn render_value_cell(ui: &mut Ui, index: usize, row: &VariableRow, events: &mut RowEvents) {
    if !row.is_attached() {
        ui.label("");
        return;
    }
    match *row.control() {
        ValueControl::Toggle { checked } => {
            let mut checked = checked;
            if ui.checkbox(&mut checked, "").changed() {
                events.toggled = Some((index, checked));
            }
        }
        ValueControl::Spinner { value } => {
            let mut value = value;
            let drag = egui::DragValue::new(&mut value)
                .speed(0.1)
                .range(f64::MIN..=f64::MAX);
            if ui.add(drag).changed() {
                events.number_changed = Some((index, value));
            }
        }
    }
}

fn render_context_menu(ui: &mut Ui, menu: &ContextMenu, events: &mut RowEvents) {
    for item in &menu.items {
        match *item {
            MenuItem::Separator => {
                ui.separator();
            }
            MenuItem::Action { action, enabled } => {
                if ui
                    .add_enabled(enabled, egui::Button::new(action.label()))
                    .clicked()
                {
                    events.menu_action = Some((action, menu.selected));
                    ui.close();
                }
            }
        }
    }
}

fn apply_events(
    state: &mut VariableTreeState,
    shared: &mut SharedState<'_>,
    events: RowEvents,
    actions: &mut Vec<AppAction>,
) {
    if let Some(select) = events.select {
        state.editor.select(select);
    }

    if events.cancel_edit {
        state.label_edit = None;
    }

    if let Some((row, text)) = events.commit_edit {
        state.label_edit = None;
        let result = state
            .editor
            .on_label_edited(row, NAME_COLUMN, &text, &mut shared.editor_context());
        push_outcome(shared, result, actions);
    }

    if let Some(row) = events.begin_edit {
        if let Some(variable) = shared.chapter.variables.get(row) {
            state.label_edit = Some(LabelEdit {
                row,
                buffer: variable.name.clone(),
                focused: false,
            });
        }
    }

    if let Some((row, checked)) = events.toggled {
        let result = state
            .editor
            .on_bool_toggled(row, checked, &mut shared.editor_context());
        push_outcome(shared, result, actions);
    }

    if let Some((row, value)) = events.number_changed {
        let result = state
            .editor
            .on_number_changed(row, value, &mut shared.editor_context());
        push_outcome(shared, result, actions);
    }

    if let Some((action, selected)) = events.menu_action {
        state.label_edit = None;
        match action {
            MenuAction::AddVariable => {
                state.type_dialog_state = VariableTypeState::after(selected);
                state.type_dialog_open = true;
            }
            MenuAction::Move(direction) => {
                let result =
                    state
                        .editor
                        .move_variable(selected, direction, &mut shared.editor_context());
                push_outcome(shared, result, actions);
            }
            MenuAction::Delete => {
                if let Some(index) = selected {
                    if let Some(variable) = shared.chapter.variables.get(index) {
                        state.delete_dialog_state =
                            DeleteConfirmState::for_variable(index, variable.name.clone());
                        state.delete_dialog_open = true;
                    }
                }
            }
        }
    }
}

/// Render dialogs that belong to this pane (called after the panels)
pub fn render_dialogs(
    state: &mut VariableTreeState,
    shared: &mut SharedState<'_>,
    ctx: &egui::Context,
) -> Vec<AppAction> {
    use crate::frontend::dialogs::{
        show_dialog, DeleteConfirmAction, DeleteConfirmContext, DeleteConfirmDialog,
        VariableTypeAction, VariableTypeContext, VariableTypeDialog,
    };

    let mut actions = Vec::new();

    if let Some(VariableTypeAction::Add { insert_after, kind }) =
        show_dialog::<VariableTypeDialog>(
            ctx,
            &mut state.type_dialog_open,
            &mut state.type_dialog_state,
            VariableTypeContext,
        )
    {
        let result = state
            .editor
            .add_variable(insert_after, Some(kind), &mut shared.editor_context());
        push_outcome(shared, result, &mut actions);
    }

    if let Some(DeleteConfirmAction::Confirm(index)) = show_dialog::<DeleteConfirmDialog>(
        ctx,
        &mut state.delete_dialog_open,
        &mut state.delete_dialog_state,
        DeleteConfirmContext,
    ) {
        let result = state
            .editor
            .delete_variable(index, true, &mut shared.editor_context());
        push_outcome(shared, result, &mut actions);
    }

    actions
}

fn push_outcome(shared: &mut SharedState<'_>, result: Result<EditOutcome>, actions: &mut Vec<AppAction>) {
    match result {
        Ok(EditOutcome::Unchanged) => {}
        Ok(outcome) => actions.push(AppAction::VariablesEdited(outcome)),
        Err(e) => shared.report_error(e),
    }
}
