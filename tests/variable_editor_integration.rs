//! Integration tests for the variable list editor
//!
//! These tests drive the editor through its public API the way the window
//! does:
//! - Adding flags and numbers after the selection
//! - Moving rows and the boundary rules
//! - Deleting with confirmation and reference cleanup
//! - Editing names and values inline

mod common;

use common::builders::{ChapterBuilder, VariableBuilder};
use common::{Fixture, ScriptedPrompter};
use quest_editor::editor::{EditOutcome, MenuAction, MoveDirection, ValueControl};
use quest_editor::types::{
    Comparison, Condition, Operation, OperationKind, VariableKind, VariableValue,
};
use quest_editor::{EditorSettings, QuestEditorError};

fn three_flags() -> Fixture {
    Fixture::new(ChapterBuilder::new("c").flags(&["a", "b", "c"]).build())
}

#[test]
fn test_add_flag_after_selection() {
    let mut fx = three_flags();
    let mut prompter = ScriptedPrompter::picking(VariableKind::Bool);

    let (editor, mut ctx) = fx.parts();
    let outcome = editor
        .run_menu_action(MenuAction::AddVariable, Some(0), &mut prompter, &mut ctx)
        .unwrap();

    assert!(matches!(outcome, EditOutcome::Added { index: 1, .. }));
    assert_eq!(fx.chapter.variables[1].initial_value, VariableValue::Bool(false));
    let row = fx.editor.view().row(1).unwrap();
    assert!(row.is_bool_row());
    assert!(row.is_attached());
    assert_eq!(*row.control(), ValueControl::Toggle { checked: false });
    assert_eq!(fx.list_ids(), fx.row_ids());
    assert_eq!(fx.file_state.dirty_marks(), 1);
}

#[test]
fn test_add_number_after_selection() {
    let mut fx = three_flags();
    let mut prompter = ScriptedPrompter::picking(VariableKind::Number);

    let (editor, mut ctx) = fx.parts();
    editor
        .run_menu_action(MenuAction::AddVariable, Some(2), &mut prompter, &mut ctx)
        .unwrap();

    assert_eq!(fx.chapter.variables.len(), 4);
    assert_eq!(fx.chapter.variables[3].initial_value, VariableValue::Number(0.0));
    let row = fx.editor.view().row(3).unwrap();
    assert!(row.is_number_row());
    assert_eq!(*row.control(), ValueControl::Spinner { value: 0.0 });
}

#[test]
fn test_add_without_selection_goes_first() {
    let mut fx = three_flags();
    let (editor, mut ctx) = fx.parts();
    editor
        .add_variable(None, Some(VariableKind::Number), &mut ctx)
        .unwrap();

    assert!(fx.chapter.variables[0].initial_value.as_number().is_some());
    assert_eq!(fx.list_ids(), fx.row_ids());
}

#[test]
fn test_cancelled_type_picker_adds_nothing() {
    let mut fx = three_flags();
    let mut prompter = ScriptedPrompter::default();

    let (editor, mut ctx) = fx.parts();
    let outcome = editor
        .run_menu_action(MenuAction::AddVariable, Some(0), &mut prompter, &mut ctx)
        .unwrap();

    assert_eq!(outcome, EditOutcome::Unchanged);
    assert_eq!(fx.chapter.variables.len(), 3);
    assert_eq!(fx.file_state.dirty_marks(), 0);
}

#[test]
fn test_delete_removes_references_and_variable() {
    let chapter = ChapterBuilder::new("c")
        .flags(&["v0", "v1"])
        .branch_with_option(
            "main",
            false,
            vec![Condition::against_value(
                "v1".into(),
                Comparison::Equal,
                VariableValue::Bool(true),
            )],
            vec![Operation::new(
                "v1".into(),
                OperationKind::Assign,
                VariableValue::Bool(false),
            )],
        )
        .build();
    let mut fx = Fixture::new(chapter);
    let mut prompter = ScriptedPrompter::confirming(true);

    let (editor, mut ctx) = fx.parts();
    let outcome = editor
        .run_menu_action(MenuAction::Delete, Some(1), &mut prompter, &mut ctx)
        .unwrap();

    match outcome {
        EditOutcome::Deleted { index, id, cleanup } => {
            assert_eq!(index, 1);
            assert_eq!(id.as_str(), "v1");
            assert_eq!(cleanup.conditions_removed, 1);
            assert_eq!(cleanup.operations_removed, 1);
        }
        other => panic!("Expected a delete, got {:?}", other),
    }
    assert_eq!(prompter.asked_to_delete, ["v1"]);
    assert_eq!(fx.list_ids(), ["v0"]);
    assert_eq!(fx.row_ids(), ["v0"]);
    assert_eq!(fx.chapter.reference_count(&"v1".into()), 0);
    let option = &fx.chapter.branches[0].segments[0].options[0];
    assert!(option.conditions.is_empty());
    assert!(option.operations.is_empty());
}

#[test]
fn test_delete_leaves_endings_branch_untouched() {
    let chapter = ChapterBuilder::new("c")
        .flags(&["v1"])
        .branch_with_option(
            "endings",
            true,
            vec![Condition::against_value(
                "v1".into(),
                Comparison::Equal,
                VariableValue::Bool(true),
            )],
            vec![Operation::new(
                "v1".into(),
                OperationKind::Toggle,
                VariableValue::Bool(true),
            )],
        )
        .build();
    let endings_before = chapter.branches[0].clone();
    let mut fx = Fixture::new(chapter);

    let (editor, mut ctx) = fx.parts();
    editor.delete_variable(0, true, &mut ctx).unwrap();

    assert!(fx.chapter.variables.is_empty());
    assert_eq!(fx.chapter.branches[0], endings_before);
}

#[test]
fn test_delete_also_matches_variable_comparisons() {
    let chapter = ChapterBuilder::new("c")
        .flags(&["a", "b"])
        .branch_with_option(
            "main",
            false,
            vec![
                Condition::against_variable("a".into(), Comparison::Equal, &"b".into()),
                Condition::against_value("a".into(), Comparison::Equal, VariableValue::Bool(true)),
            ],
            Vec::new(),
        )
        .build();
    let mut fx = Fixture::new(chapter);

    let (editor, mut ctx) = fx.parts();
    editor.delete_variable(1, true, &mut ctx).unwrap();

    let conditions = &fx.chapter.branches[0].segments[0].options[0].conditions;
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].right, "true");
}

#[test]
fn test_declined_delete_changes_nothing() {
    let chapter = ChapterBuilder::new("c")
        .flags(&["v1"])
        .branch_with_option(
            "main",
            false,
            Vec::new(),
            vec![Operation::new(
                "v1".into(),
                OperationKind::Toggle,
                VariableValue::Bool(true),
            )],
        )
        .build();
    let before = chapter.clone();
    let mut fx = Fixture::new(chapter);
    let mut prompter = ScriptedPrompter::confirming(false);

    let (editor, mut ctx) = fx.parts();
    let outcome = editor
        .run_menu_action(MenuAction::Delete, Some(0), &mut prompter, &mut ctx)
        .unwrap();

    assert_eq!(outcome, EditOutcome::Unchanged);
    assert_eq!(fx.chapter, before);
    assert_eq!(fx.editor.view().len(), 1);
    assert_eq!(fx.file_state.dirty_marks(), 0);
    assert!(!fx.file_state.is_dirty());
}

#[test]
fn test_toggle_sets_value_with_one_dirty_mark() {
    let mut fx = three_flags();
    let (editor, mut ctx) = fx.parts();
    editor.on_bool_toggled(1, true, &mut ctx).unwrap();

    assert_eq!(fx.chapter.variables[1].initial_value, VariableValue::Bool(true));
    assert_eq!(fx.file_state.dirty_marks(), 1);
}

#[test]
fn test_number_edit_is_exact_and_unclamped() {
    let chapter = ChapterBuilder::new("c")
        .variable(VariableBuilder::new("gold").number(10.0))
        .build();
    let mut fx = Fixture::new(chapter);

    let (editor, mut ctx) = fx.parts();
    editor.on_number_changed(0, -3.5, &mut ctx).unwrap();
    assert_eq!(fx.chapter.variables[0].initial_value, VariableValue::Number(-3.5));

    let (editor, mut ctx) = fx.parts();
    editor.on_number_changed(0, f64::MAX, &mut ctx).unwrap();
    assert_eq!(
        fx.chapter.variables[0].initial_value,
        VariableValue::Number(f64::MAX)
    );
    assert_eq!(fx.file_state.dirty_marks(), 2);
}

#[test]
fn test_move_boundaries_are_disabled_and_noop() {
    let mut fx = three_flags();

    let first = fx.editor.request_context_menu(Some(0));
    assert!(!first.is_enabled(MenuAction::Move(MoveDirection::Up)));
    assert!(first.is_enabled(MenuAction::Move(MoveDirection::Down)));

    let last = fx.editor.request_context_menu(Some(2));
    assert!(last.is_enabled(MenuAction::Move(MoveDirection::Up)));
    assert!(!last.is_enabled(MenuAction::Move(MoveDirection::Down)));

    let (editor, mut ctx) = fx.parts();
    assert_eq!(
        editor
            .move_variable(Some(0), MoveDirection::Up, &mut ctx)
            .unwrap(),
        EditOutcome::Unchanged
    );
    let (editor, mut ctx) = fx.parts();
    assert_eq!(
        editor
            .move_variable(Some(2), MoveDirection::Down, &mut ctx)
            .unwrap(),
        EditOutcome::Unchanged
    );
    assert_eq!(fx.list_ids(), ["a", "b", "c"]);
    assert_eq!(fx.file_state.dirty_marks(), 0);
}

#[test]
fn test_move_swaps_and_reselects() {
    let mut fx = three_flags();
    let (editor, mut ctx) = fx.parts();
    let outcome = editor
        .move_variable(Some(0), MoveDirection::Down, &mut ctx)
        .unwrap();

    assert_eq!(outcome, EditOutcome::Moved { from: 0, to: 1 });
    assert!(outcome.changes_structure());
    assert_eq!(fx.list_ids(), ["b", "a", "c"]);
    assert_eq!(fx.row_ids(), ["b", "a", "c"]);
    assert_eq!(fx.editor.selected(), Some(1));
    assert!(fx.editor.view().row(1).unwrap().is_attached());
}

#[test]
fn test_reordering_disabled_hides_move_items() {
    let mut fx = Fixture::with_settings(
        ChapterBuilder::new("c").flags(&["a", "b"]).build(),
        EditorSettings {
            allow_reordering: false,
        },
    );
    let menu = fx.editor.request_context_menu(Some(0));
    assert!(!menu.contains(MenuAction::Move(MoveDirection::Down)));

    let mut prompter = ScriptedPrompter::default();
    let (editor, mut ctx) = fx.parts();
    let outcome = editor
        .run_menu_action(
            MenuAction::Move(MoveDirection::Down),
            Some(0),
            &mut prompter,
            &mut ctx,
        )
        .unwrap();
    assert_eq!(outcome, EditOutcome::Unchanged);
    assert_eq!(fx.list_ids(), ["a", "b"]);
}

#[test]
fn test_delete_disabled_on_empty_list() {
    let fx = Fixture::new(ChapterBuilder::new("c").build());
    let menu = fx.editor.request_context_menu(None);
    assert!(menu.is_enabled(MenuAction::AddVariable));
    assert!(!menu.is_enabled(MenuAction::Delete));
}

#[test]
fn test_rename_only_through_name_column() {
    let mut fx = three_flags();

    let (editor, mut ctx) = fx.parts();
    editor.on_label_edited(0, 0, "has_key", &mut ctx).unwrap();
    assert_eq!(fx.chapter.variables[0].name, "has_key");
    assert_eq!(fx.editor.view().row(0).unwrap().label(), "has_key");

    let (editor, mut ctx) = fx.parts();
    let outcome = editor.on_label_edited(0, 1, "ignored", &mut ctx).unwrap();
    assert_eq!(outcome, EditOutcome::Unchanged);
    assert_eq!(fx.chapter.variables[0].name, "has_key");
    assert_eq!(fx.file_state.dirty_marks(), 1);
}

#[test]
fn test_stale_row_index_is_an_error() {
    let mut fx = three_flags();
    let (editor, mut ctx) = fx.parts();
    let err = editor.on_bool_toggled(7, true, &mut ctx).unwrap_err();
    assert!(matches!(
        err,
        QuestEditorError::RowOutOfRange { index: 7, len: 3 }
    ));
    assert_eq!(fx.file_state.dirty_marks(), 0);
}

#[test]
fn test_mixed_sequence_keeps_rows_in_list_order() {
    let mut fx = three_flags();
    let mut picker = ScriptedPrompter::picking(VariableKind::Number);
    let mut confirm = ScriptedPrompter::confirming(true);

    let (editor, mut ctx) = fx.parts();
    editor
        .run_menu_action(MenuAction::AddVariable, Some(1), &mut picker, &mut ctx)
        .unwrap();
    let (editor, mut ctx) = fx.parts();
    editor
        .run_menu_action(
            MenuAction::Move(MoveDirection::Up),
            Some(2),
            &mut picker,
            &mut ctx,
        )
        .unwrap();
    let (editor, mut ctx) = fx.parts();
    editor
        .run_menu_action(MenuAction::Delete, Some(0), &mut confirm, &mut ctx)
        .unwrap();

    assert_eq!(fx.chapter.variables.len(), 3);
    assert_eq!(fx.list_ids(), fx.row_ids());
    assert!(fx.editor.view().rows().iter().all(|r| r.is_attached()));
    assert_eq!(fx.file_state.dirty_marks(), 3);
}
