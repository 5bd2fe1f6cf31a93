//! Frontend module for egui UI
//!
//! This module provides the editor window using eframe/egui.
//!
//! # Layout
//!
//! - Menu bar: File (new, open, recent, save) and View (theme, language,
//!   reordering)
//! - Left panel: the variable tree of the open chapter
//! - Central panel: the chapter outline
//! - Bottom bar: file status and the last error
//!
//! # Main Types
//!
//! - [`QuestEditorApp`] - Main application state implementing [`eframe::App`]
//! - [`SharedState`] - Borrowed state handed to panes
//! - [`AppAction`] - Requests panes send back to the application

pub mod dialogs;
pub mod panes;
pub mod state;

pub use state::{AppAction, SharedState};

use dialogs::{
    show_dialog, DiscardChangesAction, DiscardChangesContext, DiscardChangesDialog,
    DiscardChangesState, PendingFileAction,
};
use panes::{ChapterOutlineState, VariableTreeState};

use crate::config::{AppState, ChapterFile, CHAPTER_FILE_EXTENSION};
use crate::editor::{EditOutcome, VariableListEditor};
use crate::i18n::{self, Language};
use crate::model::{DefaultVariableFactory, FileState};
use crate::types::Chapter;
use egui::Color32;
use rust_i18n::t;
use std::path::{Path, PathBuf};

/// Main application state
pub struct QuestEditorApp {
    chapter: Chapter,
    file_state: FileState,
    factory: DefaultVariableFactory,
    app_state: AppState,

    // Panes
    variable_tree: VariableTreeState,
    outline: ChapterOutlineState,

    // Unsaved changes dialog
    discard_open: bool,
    discard_state: DiscardChangesState,

    last_error: Option<String>,
    window_title: String,
}

impl QuestEditorApp {
    /// Create the application for eframe
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        chapter: Chapter,
        file_state: FileState,
        app_state: AppState,
    ) -> Self {
        Self::with_chapter(chapter, file_state, app_state)
    }

    /// Create the application state without a window
    pub fn with_chapter(chapter: Chapter, file_state: FileState, app_state: AppState) -> Self {
        i18n::set_language(app_state.ui_preferences.language);

        let mut editor = VariableListEditor::new(app_state.editor);
        editor.initialize(&chapter.variables);

        Self {
            chapter,
            file_state,
            factory: DefaultVariableFactory::new(),
            app_state,
            variable_tree: VariableTreeState::new(editor),
            outline: ChapterOutlineState::default(),
            discard_open: false,
            discard_state: DiscardChangesState::default(),
            last_error: None,
            window_title: String::new(),
        }
    }

    pub fn chapter(&self) -> &Chapter {
        &self.chapter
    }

    pub fn file_state(&self) -> &FileState {
        &self.file_state
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn variable_editor(&self) -> &VariableListEditor {
        &self.variable_tree.editor
    }

    pub fn outline(&self) -> &ChapterOutlineState {
        &self.outline
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the unsaved-changes dialog is waiting for an answer
    pub fn is_discard_pending(&self) -> bool {
        self.discard_open
    }

    /// Replace the open chapter and rebuild every view of it
    fn load(&mut self, chapter: Chapter, file_state: FileState) {
        self.chapter = chapter;
        self.file_state = file_state;
        self.variable_tree = VariableTreeState::new(VariableListEditor::new(self.app_state.editor));
        self.variable_tree.editor.initialize(&self.chapter.variables);
        self.outline = ChapterOutlineState::default();
    }

    /// Handle an action emitted by a pane or the menu
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::NewChapter => self.request_file_action(PendingFileAction::NewChapter),
            AppAction::OpenChapter(path) => {
                self.request_file_action(PendingFileAction::OpenChapter(path))
            }
            AppAction::SaveChapter => {
                let path = self
                    .file_state
                    .path()
                    .map(Path::to_path_buf)
                    .or_else(pick_save_path);
                if let Some(path) = path {
                    self.save_chapter_to(&path);
                }
            }
            AppAction::SaveChapterAs(path) => self.save_chapter_to(&path),
            AppAction::VariablesEdited(outcome) => self.on_variables_edited(&outcome),
            AppAction::SetLanguage(language) => {
                i18n::set_language(language);
                self.app_state.ui_preferences.language = language;
            }
            AppAction::SetDarkMode(dark) => {
                self.app_state.ui_preferences.dark_mode = dark;
            }
            AppAction::SetAllowReordering(allow) => {
                self.app_state.editor.allow_reordering = allow;
                self.variable_tree.editor.set_settings(self.app_state.editor);
            }
        }
    }

    fn on_variables_edited(&mut self, outcome: &EditOutcome) {
        match outcome {
            EditOutcome::Deleted { id, cleanup, .. } if !cleanup.is_empty() => {
                tracing::info!(
                    "Removed {} references to deleted variable {}",
                    cleanup.total(),
                    id
                );
                self.outline.invalidate();
            }
            EditOutcome::Renamed { .. } => self.outline.invalidate(),
            outcome if outcome.changes_structure() => self.outline.invalidate(),
            _ => {}
        }
    }

    /// Run a file action, asking first if it would drop unsaved changes
    fn request_file_action(&mut self, pending: PendingFileAction) {
        if self.file_state.is_dirty() {
            self.discard_state = DiscardChangesState::for_action(pending);
            self.discard_open = true;
        } else {
            self.perform_file_action(pending);
        }
    }

    fn perform_file_action(&mut self, pending: PendingFileAction) {
        match pending {
            PendingFileAction::NewChapter => {
                tracing::info!("Starting a new chapter");
                self.load(
                    Chapter::new(t!("app.untitled_chapter").to_string()),
                    FileState::untitled(),
                );
            }
            PendingFileAction::OpenChapter(path) => self.open_chapter(&path),
        }
    }

    fn open_chapter(&mut self, path: &Path) {
        match ChapterFile::load(path) {
            Ok(file) => {
                tracing::info!("Opened chapter {:?}", path);
                self.app_state.add_recent_chapter(path, &file.chapter.name);
                self.load(file.chapter, FileState::opened(path));
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to open chapter: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn save_chapter_to(&mut self, path: &Path) {
        let file = ChapterFile::new(self.chapter.clone());
        match file.save(path) {
            Ok(()) => {
                tracing::info!("Saved chapter to {:?}", path);
                self.file_state.saved_to(path);
                self.app_state.add_recent_chapter(path, &self.chapter.name);
                if let Err(e) = self.app_state.save() {
                    tracing::warn!("Failed to save app state: {}", e);
                }
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to save chapter: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context, actions: &mut Vec<AppAction>) {
        use egui::{Key, Modifiers};

        ctx.input_mut(|i| {
            if i.consume_key(Modifiers::COMMAND, Key::S) {
                actions.push(AppAction::SaveChapter);
            }
            if i.consume_key(Modifiers::COMMAND, Key::N) {
                actions.push(AppAction::NewChapter);
            }
        });
    }

    fn render_menu_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<AppAction>) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button(t!("file.menu").to_string(), |ui| {
                if ui.button(t!("file.new").to_string()).clicked() {
                    actions.push(AppAction::NewChapter);
                    ui.close();
                }
                if ui.button(t!("file.open").to_string()).clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter(t!("file.filter").to_string(), &[CHAPTER_FILE_EXTENSION])
                        .pick_file()
                    {
                        actions.push(AppAction::OpenChapter(path));
                    }
                    ui.close();
                }
                ui.add_enabled_ui(!self.app_state.recent_chapters.is_empty(), |ui| {
                    ui.menu_button(t!("file.open_recent").to_string(), |ui| {
                        for recent in &self.app_state.recent_chapters {
                            if ui.button(recent.label()).clicked() {
                                actions.push(AppAction::OpenChapter(recent.path.clone()));
                                ui.close();
                            }
                        }
                    });
                });
                ui.separator();
                if ui.button(t!("file.save").to_string()).clicked() {
                    actions.push(AppAction::SaveChapter);
                    ui.close();
                }
                if ui.button(t!("file.save_as").to_string()).clicked() {
                    if let Some(path) = pick_save_path() {
                        actions.push(AppAction::SaveChapterAs(path));
                    }
                    ui.close();
                }
            });

            ui.menu_button(t!("view.menu").to_string(), |ui| {
                let mut dark = self.app_state.ui_preferences.dark_mode;
                if ui.checkbox(&mut dark, t!("view.dark_mode").to_string()).changed() {
                    actions.push(AppAction::SetDarkMode(dark));
                }
                let mut allow = self.app_state.editor.allow_reordering;
                if ui
                    .checkbox(&mut allow, t!("view.allow_reordering").to_string())
                    .changed()
                {
                    actions.push(AppAction::SetAllowReordering(allow));
                }
                ui.separator();
                ui.label(t!("view.language").to_string());
                let current = self.app_state.ui_preferences.language;
                for language in Language::all() {
                    if ui
                        .radio(current == *language, language.display_name())
                        .clicked()
                    {
                        actions.push(AppAction::SetLanguage(*language));
                        ui.close();
                    }
                }
            });
        });
    }

    fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(self.file_state.title());
            ui.separator();
            ui.label(format!(
                "{}: {}",
                t!("variables.heading"),
                self.chapter.variables.len()
            ));

            let mut dismiss = false;
            if let Some(error) = &self.last_error {
                ui.separator();
                ui.colored_label(Color32::RED, error);
                dismiss = ui.small_button("\u{00d7}").clicked();
            }
            if dismiss {
                self.last_error = None;
            }
        });
    }
}

fn pick_save_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter(t!("file.filter").to_string(), &[CHAPTER_FILE_EXTENSION])
        .set_file_name(format!("chapter.{}", CHAPTER_FILE_EXTENSION))
        .save_file()
}

impl eframe::App for QuestEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        self.handle_keyboard_shortcuts(ctx, &mut actions);

        let title = format!("{} - {}", self.file_state.title(), t!("app.title"));
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }

        if ctx.style().visuals.dark_mode != self.app_state.ui_preferences.dark_mode {
            if self.app_state.ui_preferences.dark_mode {
                ctx.set_visuals(egui::Visuals::dark());
            } else {
                ctx.set_visuals(egui::Visuals::light());
            }
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui, &mut actions);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        {
            let mut shared = SharedState {
                chapter: &mut self.chapter,
                file_state: &mut self.file_state,
                factory: &mut self.factory,
                last_error: &mut self.last_error,
            };

            let panel = egui::SidePanel::left("variables_panel")
                .resizable(true)
                .default_width(self.app_state.ui_preferences.variable_panel_width)
                .show(ctx, |ui| {
                    panes::variable_tree::render(&mut self.variable_tree, &mut shared, ui)
                });
            actions.extend(panel.inner);
            self.app_state.ui_preferences.variable_panel_width = panel.response.rect.width();

            egui::CentralPanel::default().show(ctx, |ui| {
                actions.extend(panes::chapter_outline::render(&mut self.outline, &mut shared, ui));
            });

            actions.extend(panes::variable_tree::render_dialogs(
                &mut self.variable_tree,
                &mut shared,
                ctx,
            ));
        }

        if let Some(DiscardChangesAction::Discard(pending)) = show_dialog::<DiscardChangesDialog>(
            ctx,
            &mut self.discard_open,
            &mut self.discard_state,
            DiscardChangesContext,
        ) {
            self.perform_file_action(pending);
        }

        for action in actions {
            self.handle_action(action);
        }
    }

    /// Called by eframe periodically and on shutdown
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
        if self.file_state.is_dirty() {
            tracing::debug!(
                "{} has unsaved changes",
                self.file_state.display_name()
            );
        }
    }
}
