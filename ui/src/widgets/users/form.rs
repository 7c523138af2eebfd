//! The create/edit user dialog.
//!
//! Rendering is driven entirely by [`UserFormState`]; this module only
//! wires widgets to its transitions and issues the HTTP calls. Two calls
//! can leave here: the full submission when Save is pressed, and the
//! immediate partial role update when the selector changes on an existing
//! user.

use egui::{Align2, Color32, ComboBox, Grid, RichText, TextEdit, Ui, Window};
use roster_business::users::api;
use roster_business::{ApiConfig, Field, UserPayload, UserRole};

use super::state::UsersState;

pub fn show_user_form_modal(state: &mut UsersState, config: &ApiConfig, ui: &mut Ui) {
    let mut close_requested = false;
    let mut submit_requested = false;
    let mut role_changed = false;

    let title = if state.form.is_edit() {
        "Modify User"
    } else {
        "Create User"
    };

    let form = &mut state.form;
    Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if ui.small_button("\u{2716}").clicked() {
                    close_requested = true;
                }
            });

            Grid::new("user_form_fields")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Role");
                    let previous = form.values.role;
                    ComboBox::from_id_salt("user_role")
                        .selected_text(form.values.role.as_str())
                        .show_ui(ui, |ui| {
                            for role in UserRole::ALL {
                                ui.selectable_value(&mut form.values.role, role, role.as_str());
                            }
                        });
                    if form.values.role != previous && form.is_edit() {
                        role_changed = true;
                    }
                    ui.end_row();

                    for field in Field::ALL {
                        let editable = field != Field::Username || form.username_editable();
                        ui.label(field.label());
                        ui.vertical(|ui| {
                            let edit = TextEdit::singleline(form.value_mut(field))
                                .password(field == Field::Password);
                            let response = ui.add_enabled(editable, edit);
                            if response.changed() {
                                form.field_changed(field);
                            }
                            if response.lost_focus() {
                                form.field_blurred(field);
                            }
                            if let Some(error) = form.visible_error(field) {
                                ui.label(RichText::new(error).color(Color32::RED).small());
                            }
                        });
                        ui.end_row();
                    }
                });

            if let Some(error) = &form.submit_error {
                ui.add_space(4.0);
                ui.label(RichText::new(error).color(Color32::RED));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(form.can_submit(), egui::Button::new("Save"))
                    .clicked()
                {
                    submit_requested = true;
                }
                if form.submitting {
                    ui.spinner();
                }
            });
        });

    // Role changes on an existing user persist immediately, independent of
    // the Save button.
    if role_changed {
        if let Some(id) = state.form.editing_id().map(str::to_owned) {
            state.is_loading = true;
            api::change_role(
                config,
                &id,
                state.form.values.role,
                state.events_sender(),
                ui.ctx().clone(),
            );
        }
    }

    if submit_requested && state.form.submit_attempt() {
        state.is_loading = true;
        let payload = UserPayload::from(&state.form.values);
        match state.form.editing_id().map(str::to_owned) {
            Some(id) => api::update_user(config, &id, &payload, state.events_sender(), ui.ctx().clone()),
            None => api::create_user(config, &payload, state.events_sender(), ui.ctx().clone()),
        }
    }

    if close_requested {
        state.close_form();
    }
}

#[cfg(test)]
mod user_form_tests {
    use chrono::{TimeZone, Utc};
    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_business::User;

    use super::*;

    fn sample_user() -> User {
        User {
            id: "u-42".to_owned(),
            username: "alice".to_owned(),
            full_name: "Alice Smith".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "pw".to_owned(),
            role: UserRole::Teacher,
            created_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        }
    }

    fn harness(state: &mut UsersState) -> Harness<'_, &mut UsersState> {
        let config = ApiConfig::new("http://localhost:0", "dev");
        Harness::new_ui_state(
            move |ui, state: &mut &mut UsersState| {
                show_user_form_modal(state, &config, ui);
            },
            state,
        )
    }

    #[test]
    fn test_create_dialog_title_and_fields() {
        let mut state = UsersState::with_users(Vec::new());
        state.open_create();
        let harness = harness(&mut state);

        assert!(harness.query_by_label("Create User").is_some());
        for field in Field::ALL {
            assert!(
                harness.query_by_label(field.label()).is_some(),
                "missing field {}",
                field.label()
            );
        }
        assert!(harness.query_by_label("Role").is_some());
        assert!(harness.query_by_label("Save").is_some());
    }

    #[test]
    fn test_edit_dialog_title() {
        let mut state = UsersState::with_users(Vec::new());
        state.open_edit(sample_user());
        let harness = harness(&mut state);
        assert!(harness.query_by_label("Modify User").is_some());
    }

    #[test]
    fn test_close_button_closes_dialog() {
        let mut state = UsersState::with_users(Vec::new());
        state.open_create();
        let mut harness = harness(&mut state);
        harness.step();

        harness.get_by_label("\u{2716}").click();
        harness.step();

        assert!(!harness.state().form_open);
    }

    #[test]
    fn test_submit_error_is_displayed() {
        let mut state = UsersState::with_users(Vec::new());
        state.open_create();
        state.form.submit_failure("Username already exists".to_owned());
        let harness = harness(&mut state);

        assert!(
            harness
                .query_by_label_contains("Username already exists")
                .is_some()
        );
    }
}
