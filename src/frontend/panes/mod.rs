//! Pane modules for the editor window
//!
//! Each pane provides a render function that takes its own state, SharedState, and &mut Ui.
//! Panes return Vec<AppAction> instead of mutating application state directly.

pub mod chapter_outline;
pub mod variable_tree;

pub use chapter_outline::ChapterOutlineState;
pub use variable_tree::VariableTreeState;
