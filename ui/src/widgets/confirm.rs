//! Generic yes/no confirmation dialog.
//!
//! Fully controlled by its owner: visibility and message come in, the
//! clicked action comes out. No internal state. The message may be empty,
//! which happens transiently before a selection exists.

use egui::{Context, Window};

/// What the user did with the dialog this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmChoice {
    /// Dialog not open, or untouched this frame.
    #[default]
    None,
    Confirmed,
    Cancelled,
}

pub fn confirm_modal(ctx: &Context, open: bool, message: &str) -> ConfirmChoice {
    if !open {
        return ConfirmChoice::None;
    }

    let mut choice = ConfirmChoice::None;

    Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    choice = ConfirmChoice::Cancelled;
                }
                if ui.button("Confirm").clicked() {
                    choice = ConfirmChoice::Confirmed;
                }
            });
        });

    choice
}
