//! Quest Editor - Main Entry Point
//!
//! Opens the chapter given on the command line, or the last chapter that was
//! open, in the variable editor window.

use quest_editor::{
    config::{AppState, ChapterFile},
    frontend::QuestEditorApp,
    i18n,
    model::FileState,
    types::Chapter,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,quest_editor=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Quest Editor");

    // Load application state (recent chapters, preferences, etc.)
    let mut app_state = AppState::load_or_default();

    // Clean up any missing recent chapters
    app_state.cleanup_missing_chapters();
    i18n::set_language(app_state.ui_preferences.language);

    // A path on the command line wins over the last session
    let requested = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| app_state.get_last_chapter().map(|p| p.to_path_buf()));

    let (chapter, file_state) = match requested {
        Some(path) => {
            tracing::info!("Opening chapter {:?}", path);
            match ChapterFile::load(&path) {
                Ok(file) => {
                    app_state.add_recent_chapter(&path, &file.chapter.name);
                    (file.chapter, FileState::opened(&path))
                }
                Err(e) => {
                    tracing::warn!("Failed to load chapter: {}", e);
                    (
                        Chapter::new(i18n::untitled_chapter_name()),
                        FileState::untitled(),
                    )
                }
            }
        }
        None => (
            Chapter::new(i18n::untitled_chapter_name()),
            FileState::untitled(),
        ),
    };

    // Configure eframe options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 640.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title(i18n::app_title()),
        ..Default::default()
    };

    eframe::run_native(
        "Quest Editor",
        native_options,
        Box::new(|cc| {
            if app_state.ui_preferences.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            Ok(Box::new(QuestEditorApp::new(
                cc,
                chapter,
                file_state,
                app_state,
            )))
        }),
    )
}
