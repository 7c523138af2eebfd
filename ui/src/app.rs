use roster_business::{ApiConfig, Route};

use crate::widgets::users::{UsersState, users_page};

/// Top-level application: configuration, routing, and the users page state.
pub struct RosterApp {
    config: ApiConfig,
    route: Route,
    users: UsersState,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            route: Route::default(),
            users: UsersState::new(),
        }
    }

    pub fn users(&self) -> &UsersState {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut UsersState {
        &mut self.users
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply asynchronous HTTP outcomes before rendering this frame.
        self.users.drain_events();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.heading("Roster Admin");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.config.stage.as_str());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.route {
            Route::Users => {
                users_page(&mut self.users, &self.config, ui);
            }
        });
    }
}
