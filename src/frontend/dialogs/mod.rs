//! Dialog trait system for unified dialog management
//!
//! This module provides a generic trait-based system for dialogs in the application.
//! Each dialog implements the `Dialog` trait, encapsulating its state, actions, and rendering.
//!
//! Modal dialogs block the rest of the UI until answered; dismissing one
//! (Escape or a click outside) counts as cancelling it.

use egui::{Align2, Context, Id, Ui};

/// Actions that a dialog can return after rendering
#[derive(Debug, Clone, Default)]
pub enum DialogAction<A> {
    /// Keep the dialog open, no action needed
    #[default]
    None,
    /// Close the dialog without performing any action
    Close,
    /// Close the dialog and perform the specified action
    CloseWithAction(A),
    /// Keep the dialog open but perform the specified action
    Action(A),
}

impl<A> DialogAction<A> {
    /// Check if the action indicates the dialog should close
    pub fn should_close(&self) -> bool {
        matches!(self, DialogAction::Close | DialogAction::CloseWithAction(_))
    }

    /// Extract the action if present
    pub fn into_action(self) -> Option<A> {
        match self {
            DialogAction::CloseWithAction(a) | DialogAction::Action(a) => Some(a),
            _ => None,
        }
    }
}

/// Trait for dialog state management
///
/// Dialog state structs should implement this trait to enable
/// proper lifecycle management (reset on close, validation, etc.)
pub trait DialogState: Default {
    /// Reset the dialog state to its default values
    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if the dialog has valid data to proceed with its action
    fn is_valid(&self) -> bool {
        true
    }
}

/// Configuration for dialog window appearance and behavior
#[derive(Debug, Clone)]
pub struct DialogWindowConfig {
    /// Default width of the dialog window
    pub default_width: f32,
    /// Whether the dialog can be resized
    pub resizable: bool,
    /// Optional anchor position (alignment and offset)
    pub anchor: Option<(Align2, [f32; 2])>,
    /// Whether the dialog should be modal (dim background, block input)
    pub modal: bool,
}

impl Default for DialogWindowConfig {
    fn default() -> Self {
        Self {
            default_width: 400.0,
            resizable: true,
            anchor: None,
            modal: false,
        }
    }
}

impl DialogWindowConfig {
    /// Create a centered modal dialog configuration
    pub fn centered_modal(width: f32) -> Self {
        Self {
            default_width: width,
            resizable: false,
            anchor: Some((Align2::CENTER_CENTER, [0.0, 0.0])),
            modal: true,
        }
    }
}

/// A dialog: its state, the action it produces and what it needs to render
///
/// See [`VariableTypeDialog`] for a small implementation.
pub trait Dialog {
    /// The state type for this dialog
    type State: DialogState;

    /// The action type this dialog can produce
    type Action;

    /// The context type needed to render this dialog
    type Context<'a>;

    /// Get the (localized) window title for this dialog
    fn title(state: &Self::State) -> String;

    /// Get the window configuration for this dialog
    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig::default()
    }

    /// Render the dialog content
    ///
    /// This method should render the dialog's UI and return an action
    /// indicating what should happen (close, perform action, etc.)
    fn render(
        state: &mut Self::State,
        ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action>;
}

/// Show `D` while `is_open`, resetting its state once it closes
///
/// Returns the action the dialog produced this frame, if any.
pub fn show_dialog<D: Dialog>(
    ctx: &Context,
    is_open: &mut bool,
    state: &mut D::State,
    dialog_ctx: D::Context<'_>,
) -> Option<D::Action> {
    if !*is_open {
        return None;
    }

    let config = D::window_config();
    let title = D::title(state);

    let action = if config.modal {
        let response = egui::Modal::new(Id::new(("modal_dialog", std::any::type_name::<D>())))
            .show(ctx, |ui| {
                ui.set_width(config.default_width);
                ui.heading(&title);
                ui.separator();
                D::render(state, dialog_ctx, ui)
            });
        if response.should_close() && !response.inner.should_close() {
            DialogAction::Close
        } else {
            response.inner
        }
    } else {
        let mut window = egui::Window::new(&title)
            .collapsible(false)
            .resizable(config.resizable)
            .default_width(config.default_width);

        if let Some((align, offset)) = config.anchor {
            window = window.anchor(align, offset);
        }

        window
            .show(ctx, |ui| D::render(state, dialog_ctx, ui))
            .and_then(|r| r.inner)
            .unwrap_or(DialogAction::None)
    };

    if action.should_close() {
        *is_open = false;
        state.reset();
    }

    action.into_action()
}

pub mod delete_confirm;
pub mod discard_changes;
pub mod variable_type;

pub use delete_confirm::{
    DeleteConfirmAction, DeleteConfirmContext, DeleteConfirmDialog, DeleteConfirmState,
};
pub use discard_changes::{
    DiscardChangesAction, DiscardChangesContext, DiscardChangesDialog, DiscardChangesState,
    PendingFileAction,
};
pub use variable_type::{
    VariableTypeAction, VariableTypeContext, VariableTypeDialog, VariableTypeState,
};
