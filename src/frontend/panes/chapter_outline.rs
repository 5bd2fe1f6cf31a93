//! Chapter outline pane - branches, segments and options
//!
//! Read-only view of the branch data showing every option's conditions and
//! operations by variable name. A variable picker filters the outline down to
//! options that reference one variable. The picker lists variables in chapter
//! order, so it is rebuilt whenever the variable editor changes the list.

use std::collections::HashMap;

use egui::{Color32, Ui};
use rust_i18n::t;

use crate::frontend::state::{AppAction, SharedState};
use crate::types::{
    Chapter, CompareTo, Condition, Operation, OperationKind, SegmentOption, VariableId,
};

/// Variable names in chapter order, as shown by the picker
#[derive(Debug, Clone, Default)]
pub struct VariableNames {
    ordered: Vec<(VariableId, String)>,
    by_id: HashMap<VariableId, String>,
}

impl VariableNames {
    pub fn from_chapter(chapter: &Chapter) -> Self {
        let ordered: Vec<_> = chapter
            .variables
            .iter()
            .map(|v| (v.id.clone(), v.name.clone()))
            .collect();
        let by_id = ordered.iter().cloned().collect();
        Self { ordered, by_id }
    }

    pub fn ordered(&self) -> &[(VariableId, String)] {
        &self.ordered
    }

    /// Name of `id`, or a placeholder for a variable that no longer exists
    pub fn name_of(&self, id: &VariableId) -> String {
        self.by_id
            .get(id)
            .cloned()
            .unwrap_or_else(|| t!("outline.missing_variable").to_string())
    }
}

/// State for the chapter outline pane
#[derive(Default)]
pub struct ChapterOutlineState {
    names: Option<VariableNames>,
    /// Only show options referencing this variable
    pub filter: Option<VariableId>,
}

impl ChapterOutlineState {
    /// Drop the cached variable list; it is rebuilt on the next frame
    pub fn invalidate(&mut self) {
        self.names = None;
    }

    pub fn is_stale(&self) -> bool {
        self.names.is_none()
    }

    pub(crate) fn names(&mut self, chapter: &Chapter) -> &VariableNames {
        if self
            .filter
            .as_ref()
            .is_some_and(|id| chapter.find_variable(id).is_none())
        {
            self.filter = None;
        }
        self.names
            .get_or_insert_with(|| VariableNames::from_chapter(chapter))
    }
}

/// One-line description of a condition
pub fn describe_condition(condition: &Condition, names: &VariableNames) -> String {
    let right = match condition.compare_to {
        CompareTo::Value => condition.right.clone(),
        CompareTo::Variable => names.name_of(&VariableId::new(condition.right.clone())),
    };
    format!(
        "{} {} {}",
        names.name_of(&condition.left),
        condition.comparison.symbol(),
        right
    )
}

/// One-line description of an operation
pub fn describe_operation(operation: &Operation, names: &VariableNames) -> String {
    let target = names.name_of(&operation.variable_id);
    match operation.kind {
        OperationKind::Toggle => format!("{} = !{}", target, target),
        kind => format!("{} {} {}", target, kind.symbol(), operation.value),
    }
}

fn option_references(option: &SegmentOption, id: &VariableId) -> bool {
    option.conditions.iter().any(|c| c.references(id))
        || option.operations.iter().any(|o| o.variable_id == *id)
}

/// Render the chapter outline pane
pub fn render(state: &mut ChapterOutlineState, shared: &mut SharedState<'_>, ui: &mut Ui) -> Vec<AppAction> {
    let chapter: &Chapter = &*shared.chapter;
    let names = state.names(chapter).clone();

    ui.horizontal(|ui| {
        ui.heading(t!("outline.heading").to_string());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let selected_text = state
                .filter
                .as_ref()
                .map(|id| names.name_of(id))
                .unwrap_or_else(|| "-".to_string());
            egui::ComboBox::from_id_salt("outline_variable_filter")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut state.filter, None, "-");
                    for (id, name) in names.ordered() {
                        ui.selectable_value(&mut state.filter, Some(id.clone()), name);
                    }
                });
        });
    });
    ui.separator();

    if chapter.branches.is_empty() {
        ui.weak(t!("outline.no_branches").to_string());
        return Vec::new();
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for branch in &chapter.branches {
            let mut title = if branch.name.is_empty() {
                branch.id.clone()
            } else {
                branch.name.clone()
            };
            if branch.is_endings_branch {
                title = format!("{} ({})", title, t!("outline.endings"));
            }

            egui::CollapsingHeader::new(title)
                .id_salt(("branch", &branch.id))
                .default_open(true)
                .show(ui, |ui| {
                    for segment in &branch.segments {
                        ui.label(egui::RichText::new(&segment.id).strong());
                        for option in &segment.options {
                            if let Some(filter) = &state.filter {
                                if !option_references(option, filter) {
                                    continue;
                                }
                            }
                            render_option(ui, option, &names);
                        }
                    }
                });
        }
    });

    Vec::new()
}

fn render_option(ui: &mut Ui, option: &SegmentOption, names: &VariableNames) {
    ui.indent(("option", option.text.as_str()), |ui| {
        ui.label(format!("\u{2192} {}", option.text));
        for condition in &option.conditions {
            ui.colored_label(
                Color32::from_rgb(120, 170, 255),
                format!("if {}", describe_condition(condition, names)),
            );
        }
        for operation in &option.operations {
            ui.colored_label(
                Color32::from_rgb(140, 210, 140),
                describe_operation(operation, names),
            );
        }
    });
}
