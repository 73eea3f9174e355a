use eframe::egui;

use crate::egui_app::session::{SessionAction, SessionStore};

pub fn render(ui: &mut egui::Ui, store: &mut SessionStore) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading("Welcome to Dashboard");
        ui.add_space(16.0);

        if let Some(user) = &store.state().user {
            ui.label("Welcome back!");
            ui.label(format!("Email: {}", user.email));
            ui.label(format!("User ID: {}", user.id));
        }

        ui.add_space(20.0);

        if ui.button("Sign Out").clicked() {
            store.dispatch(SessionAction::Logout);
        }
    });
}
