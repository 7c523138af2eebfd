//! The users page: a Typora-style bordered table plus the toolbar that
//! drives the create/edit and delete dialogs.

use chrono::Utc;
use egui::{Color32, CornerRadius, Frame, Grid, RichText, ScrollArea, Stroke, Ui};
use roster_business::{ApiConfig, User, relative_age};

use super::form::show_user_form_modal;
use super::state::UsersState;
use crate::widgets::{ConfirmChoice, confirm_modal};

const HEADER_BG: Color32 = Color32::from_rgb(245, 245, 245);
const BORDER: Color32 = Color32::from_rgb(200, 200, 200);

/// Row actions collected while iterating and applied afterwards, so the
/// grid closure never needs a mutable borrow of the whole state.
enum PageAction {
    Add,
    Edit(User),
    Delete(User),
}

fn header_cell(ui: &mut Ui, text: &str) {
    Frame::new().fill(HEADER_BG).inner_margin(8.0).show(ui, |ui| {
        ui.label(RichText::new(text).strong());
    });
}

fn data_cell(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    Frame::new().inner_margin(8.0).show(ui, add_contents);
}

pub fn users_page(state: &mut UsersState, config: &ApiConfig, ui: &mut Ui) {
    if state.take_fetch_request() {
        state.is_loading = true;
        roster_business::users::api::fetch_users(config, state.events_sender(), ui.ctx().clone());
    }

    let mut action: Option<PageAction> = None;

    ui.horizontal(|ui| {
        ui.heading("Users");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("\u{2795} Add").clicked() {
                action = Some(PageAction::Add);
            }
            if state.is_loading {
                ui.spinner();
                ui.weak("Loading...");
            }
        });
    });
    ui.add_space(8.0);

    Frame::new()
        .stroke(Stroke::new(1.0, BORDER))
        .corner_radius(CornerRadius::same(4))
        .show(ui, |ui| {
            ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                Grid::new("users_table")
                    .num_columns(5)
                    .striped(true)
                    .min_col_width(ui.available_width() / 6.0)
                    .spacing([0.0, 0.0])
                    .show(ui, |ui| {
                        header_cell(ui, "Username/Email");
                        header_cell(ui, "Full Name");
                        header_cell(ui, "Role");
                        header_cell(ui, "Created At");
                        header_cell(ui, "Details");
                        ui.end_row();

                        for user in &state.users {
                            data_cell(ui, |ui| {
                                ui.vertical(|ui| {
                                    ui.label(&user.username);
                                    ui.small(&user.email);
                                });
                            });
                            data_cell(ui, |ui| {
                                ui.label(&user.full_name);
                            });
                            data_cell(ui, |ui| {
                                ui.label(user.role.as_str());
                            });
                            data_cell(ui, |ui| {
                                ui.label(relative_age(user.created_at, Utc::now()));
                            });
                            data_cell(ui, |ui| {
                                ui.horizontal(|ui| {
                                    if ui
                                        .button("\u{2699}")
                                        .on_hover_text("Edit user")
                                        .clicked()
                                    {
                                        action = Some(PageAction::Edit(user.clone()));
                                    }
                                    if ui
                                        .button("\u{1F5D1}")
                                        .on_hover_text("Delete user")
                                        .clicked()
                                    {
                                        action = Some(PageAction::Delete(user.clone()));
                                    }
                                });
                            });
                            ui.end_row();
                        }
                    });

                if state.users.is_empty() && !state.is_loading {
                    ui.add_space(16.0);
                    ui.vertical_centered(|ui| {
                        ui.weak("No users yet");
                    });
                    ui.add_space(16.0);
                }
            });
        });

    match action {
        Some(PageAction::Add) => state.open_create(),
        Some(PageAction::Edit(user)) => state.open_edit(user),
        Some(PageAction::Delete(user)) => state.open_delete(user),
        None => {}
    }

    if state.form_open {
        show_user_form_modal(state, config, ui);
    }

    match confirm_modal(ui.ctx(), state.delete_open, &state.delete_message()) {
        ConfirmChoice::Confirmed => {
            if let Some(id) = state.selected.as_ref().map(|user| user.id.clone()) {
                state.is_loading = true;
                roster_business::users::api::delete_user(
                    config,
                    &id,
                    state.events_sender(),
                    ui.ctx().clone(),
                );
            }
        }
        ConfirmChoice::Cancelled => state.close_modals(),
        ConfirmChoice::None => {}
    }
}
