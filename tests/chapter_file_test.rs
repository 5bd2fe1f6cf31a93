//! Tests for chapter files and persisted app state
//!
//! Exercises the on-disk formats with real files in temporary directories.

mod common;

use common::builders::{ChapterBuilder, VariableBuilder};
use common::Fixture;
use quest_editor::config::{AppState, ChapterFile, CHAPTER_FILE_VERSION};
use quest_editor::editor::MoveDirection;
use quest_editor::i18n::Language;
use quest_editor::model::FileState;
use quest_editor::types::{Comparison, Condition, VariableValue};
use quest_editor::QuestEditorError;
use tempfile::TempDir;

#[test]
fn test_chapter_file_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("prologue.questchapter");

    let chapter = ChapterBuilder::new("Prologue")
        .variable(VariableBuilder::new("gold").name("Gold").number(-2.5))
        .variable(VariableBuilder::new("key").flag(true))
        .branch_with_option(
            "main",
            false,
            vec![Condition::against_value(
                "gold".into(),
                Comparison::Greater,
                VariableValue::Number(3.0),
            )],
            Vec::new(),
        )
        .build();

    ChapterFile::new(chapter.clone()).save(&path).unwrap();
    let loaded = ChapterFile::load(&path).unwrap();

    assert_eq!(loaded.version, CHAPTER_FILE_VERSION);
    assert_eq!(loaded.chapter, chapter);
}

#[test]
fn test_chapter_file_preserves_edited_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ch.questchapter");

    let mut fx = Fixture::new(ChapterBuilder::new("c").flags(&["a", "b", "c"]).build());
    let (editor, mut ctx) = fx.parts();
    editor
        .move_variable(Some(2), MoveDirection::Up, &mut ctx)
        .unwrap();

    ChapterFile::new(fx.chapter.clone()).save(&path).unwrap();
    fx.file_state.saved_to(&path);
    assert!(!fx.file_state.is_dirty());

    let loaded = ChapterFile::load(&path).unwrap();
    let ids: Vec<_> = loaded
        .chapter
        .variables
        .iter()
        .map(|v| v.id.to_string())
        .collect();
    assert_eq!(ids, ["a", "c", "b"]);
}

#[test]
fn test_value_edits_survive_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("values.questchapter");

    let chapter = ChapterBuilder::new("c")
        .variable(VariableBuilder::new("gold").number(1.0))
        .variable(VariableBuilder::new("key").flag(false))
        .build();
    let mut fx = Fixture::new(chapter);

    let (editor, mut ctx) = fx.parts();
    editor.on_number_changed(0, f64::MIN, &mut ctx).unwrap();
    let (editor, mut ctx) = fx.parts();
    editor.on_bool_toggled(1, true, &mut ctx).unwrap();

    // Non-finite numbers would serialize as null and break reloading
    for value in [f64::INFINITY, f64::NAN] {
        let (editor, mut ctx) = fx.parts();
        let err = editor.on_number_changed(0, value, &mut ctx).unwrap_err();
        assert!(matches!(err, QuestEditorError::NonFiniteNumber { .. }));
    }
    assert_eq!(fx.file_state.dirty_marks(), 2);

    ChapterFile::new(fx.chapter.clone()).save(&path).unwrap();
    let loaded = ChapterFile::load(&path).unwrap();

    assert_eq!(
        loaded.chapter.variables[0].initial_value,
        VariableValue::Number(f64::MIN)
    );
    assert_eq!(
        loaded.chapter.variables[1].initial_value,
        VariableValue::Bool(true)
    );
    assert_eq!(loaded.chapter, fx.chapter);
}

#[test]
fn test_chapter_file_missing_and_corrupt() {
    let dir = TempDir::new().unwrap();

    let missing = ChapterFile::load(dir.path().join("nope.questchapter"));
    assert!(matches!(missing, Err(QuestEditorError::ChapterFile(_))));

    let corrupt = dir.path().join("bad.questchapter");
    std::fs::write(&corrupt, "{ not json").unwrap();
    assert!(matches!(
        ChapterFile::load(&corrupt),
        Err(QuestEditorError::ChapterFile(_))
    ));
}

#[test]
fn test_app_state_round_trip() {
    let dir = TempDir::new().unwrap();
    let chapter_path = dir.path().join("ch.questchapter");
    let state_path = dir.path().join("app_state.json");

    let mut state = AppState::default();
    state.add_recent_chapter(&chapter_path, "Chapter One");
    state.ui_preferences.language = Language::Russian;
    state.ui_preferences.dark_mode = false;
    state.editor.allow_reordering = false;
    state.save_to(&state_path).unwrap();

    let loaded = AppState::load_from(&state_path).unwrap();
    assert_eq!(loaded.get_last_chapter(), Some(chapter_path.as_path()));
    assert_eq!(loaded.recent_chapters[0].name, "Chapter One");
    assert_eq!(loaded.ui_preferences.language, Language::Russian);
    assert!(!loaded.ui_preferences.dark_mode);
    assert!(!loaded.editor.allow_reordering);
}

#[test]
fn test_app_state_missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let state = AppState::load_from(&dir.path().join("absent.json")).unwrap();
    assert!(state.recent_chapters.is_empty());
    assert!(state.editor.allow_reordering);
}

#[test]
fn test_cleanup_missing_chapters() {
    let dir = TempDir::new().unwrap();
    let present = dir.path().join("present.questchapter");
    ChapterFile::new(ChapterBuilder::new("p").build())
        .save(&present)
        .unwrap();

    let mut state = AppState::default();
    state.add_recent_chapter(&present, "p");
    state.add_recent_chapter(dir.path().join("gone.questchapter"), "gone");
    state.cleanup_missing_chapters();

    assert_eq!(state.recent_chapters.len(), 1);
    assert_eq!(state.recent_chapters[0].path, present);
    assert_eq!(state.get_last_chapter(), None);
}

#[test]
fn test_file_state_title_tracks_saves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("intro.questchapter");

    let mut fx = Fixture::new(ChapterBuilder::new("c").flags(&["a"]).build());
    let (editor, mut ctx) = fx.parts();
    editor.on_bool_toggled(0, true, &mut ctx).unwrap();
    assert!(fx.file_state.title().ends_with('*'));

    fx.file_state.saved_to(&path);
    assert_eq!(fx.file_state.display_name(), "intro.questchapter");
    assert!(!fx.file_state.title().ends_with('*'));
    assert_eq!(FileState::opened(&path).path(), Some(path.as_path()));
}
