//! Variable list editor
//!
//! [`VariableListEditor`] keeps a [`TreeView`] of [`VariableRow`]s in lockstep
//! with a chapter's ordered variable list and implements the structural edits
//! offered by the list's context menu: add, move up/down, delete, plus inline
//! rename and value edits.
//!
//! # Context
//!
//! The editor does not own the chapter. Every handler receives an
//! [`EditorContext`] borrowing the chapter, the dirty tracker and the variable
//! factory for the duration of one UI event.
//!
//! # Dialogs
//!
//! Adding asks for a variable kind and deleting asks for confirmation. The
//! handlers take the dialog's answer as an argument (`None` / `false` for a
//! cancelled dialog) so the egui frontend can open a window and apply the
//! answer on a later frame. [`VariableListEditor::run_menu_action`] runs the
//! whole flow synchronously against a [`Prompter`].
//!
//! # Deleting
//!
//! A confirmed delete first strips every condition and operation referring to
//! the variable (see [`crate::model::cleanup`]), then removes the variable and
//! its row.

pub mod row;
pub mod view;

pub use row::{RowState, ValueControl, VariableRow};
pub use view::{TreeView, COLUMN_COUNT, NAME_COLUMN, VALUE_COLUMN};

use rust_i18n::t;

use crate::config::EditorSettings;
use crate::error::{QuestEditorError, Result};
use crate::model::{remove_variable_references, CleanupReport, DirtyTracker, VariableFactory};
use crate::types::{Chapter, VariableDefinition, VariableId, VariableKind};

/// Collaborators borrowed by the editor for one event
pub struct EditorContext<'a> {
    pub chapter: &'a mut Chapter,
    pub dirty: &'a mut dyn DirtyTracker,
    pub factory: &'a mut dyn VariableFactory,
}

/// Answers the editor's modal questions
pub trait Prompter {
    /// Ask which kind of variable to add; `None` when cancelled
    fn pick_variable_kind(&mut self) -> Option<VariableKind>;

    /// Ask whether `variable_name` should be deleted
    fn confirm_delete(&mut self, variable_name: &str) -> bool;
}

/// Direction of a move action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Actions offered by the list's context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddVariable,
    Move(MoveDirection),
    Delete,
}

impl MenuAction {
    /// Localized menu label
    pub fn label(&self) -> String {
        match self {
            MenuAction::AddVariable => t!("menu.add_variable").to_string(),
            MenuAction::Move(MoveDirection::Up) => t!("menu.move_up").to_string(),
            MenuAction::Move(MoveDirection::Down) => t!("menu.move_down").to_string(),
            MenuAction::Delete => t!("menu.delete").to_string(),
        }
    }
}

/// One entry of the context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Action { action: MenuAction, enabled: bool },
    Separator,
}

/// Context menu built for a particular selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    /// Row the menu was opened for
    pub selected: Option<usize>,
    pub items: Vec<MenuItem>,
}

impl ContextMenu {
    /// Whether `action` is present in the menu
    pub fn contains(&self, action: MenuAction) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, MenuItem::Action { action: a, .. } if *a == action))
    }

    /// Whether `action` is present and enabled
    pub fn is_enabled(&self, action: MenuAction) -> bool {
        self.items.iter().any(|item| {
            matches!(item, MenuItem::Action { action: a, enabled: true } if *a == action)
        })
    }
}

/// Result of an editor handler
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Nothing changed (cancelled dialog, disabled action, non-editable column)
    Unchanged,
    /// A variable was inserted at `index`
    Added { index: usize, id: VariableId },
    /// A variable moved; dependent variable pickers must refresh
    Moved { from: usize, to: usize },
    /// A variable was deleted after cleaning up references to it
    Deleted {
        index: usize,
        id: VariableId,
        cleanup: CleanupReport,
    },
    /// The variable at `index` was renamed
    Renamed { index: usize },
    /// The initial value of the variable at `index` changed
    ValueChanged { index: usize },
}

impl EditOutcome {
    pub fn is_changed(&self) -> bool {
        !matches!(self, EditOutcome::Unchanged)
    }

    /// Whether the order or set of variables changed
    pub fn changes_structure(&self) -> bool {
        matches!(
            self,
            EditOutcome::Added { .. } | EditOutcome::Moved { .. } | EditOutcome::Deleted { .. }
        )
    }
}

/// Editor for one chapter's variable list
#[derive(Debug, Clone, Default)]
pub struct VariableListEditor {
    view: TreeView,
    settings: EditorSettings,
}

impl VariableListEditor {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            view: TreeView::new(),
            settings,
        }
    }

    pub fn view(&self) -> &TreeView {
        &self.view
    }

    pub fn settings(&self) -> EditorSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: EditorSettings) {
        self.settings = settings;
    }

    pub fn selected(&self) -> Option<usize> {
        self.view.current()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.view.set_current(index);
    }

    /// Rebuild every row from `variables`, in order
    pub fn initialize(&mut self, variables: &[VariableDefinition]) {
        self.view.clear();
        for variable in variables {
            self.view.push_attached(VariableRow::new(variable));
        }
        tracing::debug!("Variable list built with {} rows", variables.len());
    }

    /// Build the context menu for a right click with `selected` as current row
    pub fn request_context_menu(&self, selected: Option<usize>) -> ContextMenu {
        let len = self.view.len();
        let selected = selected.filter(|i| *i < len);

        let mut items = vec![
            MenuItem::Action {
                action: MenuAction::AddVariable,
                enabled: true,
            },
            MenuItem::Separator,
        ];

        if self.settings.allow_reordering {
            items.push(MenuItem::Action {
                action: MenuAction::Move(MoveDirection::Up),
                enabled: self.can_move(selected, MoveDirection::Up),
            });
            items.push(MenuItem::Action {
                action: MenuAction::Move(MoveDirection::Down),
                enabled: self.can_move(selected, MoveDirection::Down),
            });
            items.push(MenuItem::Separator);
        }

        items.push(MenuItem::Action {
            action: MenuAction::Delete,
            enabled: len > 0 && selected.is_some(),
        });

        ContextMenu { selected, items }
    }

    /// Whether the row at `selected` can move one step in `direction`
    pub fn can_move(&self, selected: Option<usize>, direction: MoveDirection) -> bool {
        if !self.settings.allow_reordering {
            return false;
        }
        match (selected, direction) {
            (Some(index), MoveDirection::Up) => index > 0 && index < self.view.len(),
            (Some(index), MoveDirection::Down) => index + 1 < self.view.len(),
            (None, _) => false,
        }
    }

    /// Run a menu action end to end, asking `prompter` where a dialog is needed
    pub fn run_menu_action(
        &mut self,
        action: MenuAction,
        selected: Option<usize>,
        prompter: &mut dyn Prompter,
        ctx: &mut EditorContext<'_>,
    ) -> Result<EditOutcome> {
        if !self.request_context_menu(selected).is_enabled(action) {
            return Ok(EditOutcome::Unchanged);
        }

        match action {
            MenuAction::AddVariable => {
                let kind = prompter.pick_variable_kind();
                self.add_variable(selected, kind, ctx)
            }
            MenuAction::Move(direction) => self.move_variable(selected, direction, ctx),
            MenuAction::Delete => {
                let Some(index) = selected else {
                    return Ok(EditOutcome::Unchanged);
                };
                let name = self.variable_at(ctx.chapter, index)?.name.clone();
                let confirmed = prompter.confirm_delete(&name);
                self.delete_variable(index, confirmed, ctx)
            }
        }
    }

    /// Insert a default-valued variable of `kind` after `selected`
    ///
    /// With nothing selected the variable goes to the top. `kind` is the type
    /// picker's answer; `None` means the picker was cancelled.
    pub fn add_variable(
        &mut self,
        selected: Option<usize>,
        kind: Option<VariableKind>,
        ctx: &mut EditorContext<'_>,
    ) -> Result<EditOutcome> {
        let Some(kind) = kind else {
            tracing::debug!("Add variable cancelled");
            return Ok(EditOutcome::Unchanged);
        };

        let index = match selected {
            Some(i) => {
                self.check_index(ctx.chapter, i)?;
                i + 1
            }
            None => 0,
        };

        let variable = ctx.factory.create_variable(kind.default_value());
        let id = variable.id.clone();
        let row = VariableRow::new(&variable);

        tracing::debug!("Adding {} variable {} at {}", kind, variable.name, index);
        ctx.chapter.variables.insert(index, variable);
        ctx.dirty.mark_dirty();

        self.view.insert_row(index, row)?;
        self.view.set_item_widget(index)?;

        Ok(EditOutcome::Added { index, id })
    }

    /// Swap the variable at `selected` with its neighbour in `direction`
    ///
    /// Moves past either end of the list are no-ops.
    pub fn move_variable(
        &mut self,
        selected: Option<usize>,
        direction: MoveDirection,
        ctx: &mut EditorContext<'_>,
    ) -> Result<EditOutcome> {
        if !self.can_move(selected, direction) {
            return Ok(EditOutcome::Unchanged);
        }
        let Some(from) = selected else {
            return Ok(EditOutcome::Unchanged);
        };
        self.check_index(ctx.chapter, from)?;

        let to = match direction {
            MoveDirection::Up => from - 1,
            MoveDirection::Down => from + 1,
        };

        let variable = ctx.chapter.variables.remove(from);
        let row = VariableRow::new(&variable);
        ctx.chapter.variables.insert(to, variable);

        self.view.take_row(from)?;
        self.view.insert_row(to, row)?;
        self.view.set_item_widget(to)?;
        self.view.set_current(Some(to));

        ctx.dirty.mark_dirty();
        tracing::debug!("Moved variable from {} to {}", from, to);

        Ok(EditOutcome::Moved { from, to })
    }

    /// Delete the variable at `index` if `confirmed`
    ///
    /// References to the variable are removed from the chapter's branches
    /// before the variable itself goes.
    pub fn delete_variable(
        &mut self,
        index: usize,
        confirmed: bool,
        ctx: &mut EditorContext<'_>,
    ) -> Result<EditOutcome> {
        if !confirmed {
            tracing::debug!("Delete of variable at {} declined", index);
            return Ok(EditOutcome::Unchanged);
        }
        self.check_index(ctx.chapter, index)?;

        let id = ctx.chapter.variables[index].id.clone();
        let cleanup = remove_variable_references(&mut ctx.chapter.branches, &id);
        let removed = ctx.chapter.variables.remove(index);
        ctx.dirty.mark_dirty();
        self.view.take_row(index)?;

        tracing::info!(
            "Deleted variable {} ({} conditions, {} operations removed)",
            removed.name,
            cleanup.conditions_removed,
            cleanup.operations_removed
        );

        Ok(EditOutcome::Deleted { index, id, cleanup })
    }

    /// The user finished editing the label of `row` in `column`
    pub fn on_label_edited(
        &mut self,
        row: usize,
        column: usize,
        new_text: &str,
        ctx: &mut EditorContext<'_>,
    ) -> Result<EditOutcome> {
        if column != NAME_COLUMN {
            return Ok(EditOutcome::Unchanged);
        }
        self.check_index(ctx.chapter, row)?;

        let variable = &mut ctx.chapter.variables[row];
        if variable.name == new_text {
            return Ok(EditOutcome::Unchanged);
        }
        tracing::debug!("Renaming variable {} to {}", variable.name, new_text);
        variable.name = new_text.to_string();
        self.view.row_mut(row)?.set_label(new_text);
        ctx.dirty.mark_dirty();

        Ok(EditOutcome::Renamed { index: row })
    }

    /// The checkbox of `row` was toggled
    pub fn on_bool_toggled(
        &mut self,
        row: usize,
        checked: bool,
        ctx: &mut EditorContext<'_>,
    ) -> Result<EditOutcome> {
        let view_row = self.view.row_mut(row)?;
        let variable = find_bound(ctx.chapter, view_row.variable_id())?;
        view_row.on_toggled(checked, variable, ctx.dirty)?;
        Ok(EditOutcome::ValueChanged { index: row })
    }

    /// The spinner of `row` changed value
    pub fn on_number_changed(
        &mut self,
        row: usize,
        value: f64,
        ctx: &mut EditorContext<'_>,
    ) -> Result<EditOutcome> {
        let view_row = self.view.row_mut(row)?;
        let variable = find_bound(ctx.chapter, view_row.variable_id())?;
        view_row.on_value_changed(value, variable, ctx.dirty)?;
        Ok(EditOutcome::ValueChanged { index: row })
    }

    fn variable_at<'c>(&self, chapter: &'c Chapter, index: usize) -> Result<&'c VariableDefinition> {
        self.check_index(chapter, index)?;
        Ok(&chapter.variables[index])
    }

    fn check_index(&self, chapter: &Chapter, index: usize) -> Result<()> {
        let len = chapter.variables.len().min(self.view.len());
        if index >= len {
            return Err(QuestEditorError::RowOutOfRange { index, len });
        }
        Ok(())
    }
}

fn find_bound<'c>(chapter: &'c mut Chapter, id: &VariableId) -> Result<&'c mut VariableDefinition> {
    chapter
        .find_variable_mut(id)
        .ok_or_else(|| QuestEditorError::UnknownVariable(id.to_string()))
}
