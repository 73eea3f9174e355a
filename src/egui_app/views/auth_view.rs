use eframe::egui;

use crate::egui_app::app::AuthApp;
use crate::egui_app::session::SessionAction;
use crate::shared::validation::password_strength;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 70, 70);
const OK_COLOR: egui::Color32 = egui::Color32::from_rgb(80, 170, 90);

pub fn render(ui: &mut egui::Ui, app: &mut AuthApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        ui.heading(if app.is_signup_mode {
            "Create Account"
        } else {
            "Sign In"
        });
        ui.add_space(16.0);

        // Global error banner, dismissible without touching the store
        let error = app.store.state().error.clone();
        if let Some(error) = error {
            if !app.dismissed_error {
                ui.horizontal(|ui| {
                    ui.colored_label(ERROR_COLOR, &error);
                    if ui.small_button("x").clicked() {
                        app.dismiss_error();
                    }
                });
                ui.add_space(8.0);
            }
        }

        let input_width = 280.0;

        // Email field
        let mut email = app.store.state().email.clone();
        ui.label("Email");
        if ui
            .add_sized([input_width, 24.0], egui::TextEdit::singleline(&mut email))
            .changed()
        {
            app.store.dispatch(SessionAction::SetEmail(email));
        }
        if let Some(error) = &app.email_error {
            ui.colored_label(ERROR_COLOR, error);
        }
        ui.add_space(8.0);

        // Password field
        let mut password = app.store.state().password.clone();
        ui.label("Password");
        if ui
            .add_sized(
                [input_width, 24.0],
                egui::TextEdit::singleline(&mut password).password(true),
            )
            .changed()
        {
            app.store.dispatch(SessionAction::SetPassword(password));
        }
        if let Some(error) = &app.password_error {
            ui.colored_label(ERROR_COLOR, error);
        }

        // Advisory requirements checklist, sign-up only
        if app.is_signup_mode && !app.store.state().password.is_empty() {
            render_strength(ui, &app.store.state().password);
        }
        ui.add_space(8.0);

        // Confirm password field, sign-up only
        if app.is_signup_mode {
            let mut confirm = app.store.state().confirm_password.clone();
            ui.label("Confirm Password");
            if ui
                .add_sized(
                    [input_width, 24.0],
                    egui::TextEdit::singleline(&mut confirm).password(true),
                )
                .changed()
            {
                app.store.dispatch(SessionAction::SetConfirmPassword(confirm));
            }
            if let Some(error) = &app.confirm_password_error {
                ui.colored_label(ERROR_COLOR, error);
            }
            ui.add_space(8.0);
        }

        ui.add_space(12.0);

        let is_loading = app.store.state().is_loading;
        let submit_label = match (app.is_signup_mode, is_loading) {
            (true, true) => "Creating account...",
            (true, false) => "Create Account",
            (false, true) => "Signing in...",
            (false, false) => "Sign In",
        };
        let submit = ui.add_enabled(
            !is_loading,
            egui::Button::new(submit_label).min_size(egui::vec2(input_width, 32.0)),
        );
        if submit.clicked() {
            app.handle_submit();
        }

        if is_loading {
            ui.add_space(8.0);
            ui.spinner();
        }

        ui.add_space(16.0);

        // Mode toggle
        ui.horizontal(|ui| {
            ui.label(if app.is_signup_mode {
                "Already have an account?"
            } else {
                "Don't have an account?"
            });
            let toggle_label = if app.is_signup_mode {
                "Sign In"
            } else {
                "Create Account"
            };
            if ui.link(toggle_label).clicked() {
                app.toggle_auth_mode();
            }
        });
    });
}

fn render_strength(ui: &mut egui::Ui, password: &str) {
    let strength = password_strength(password);
    ui.add_space(4.0);
    ui.label("Password Requirements:");
    for (met, label) in [
        (strength.requirements.length, "8+ characters"),
        (strength.requirements.lowercase, "Lowercase letter"),
        (strength.requirements.uppercase, "Uppercase letter"),
        (strength.requirements.number, "Number"),
        (strength.requirements.special, "Special character"),
    ] {
        let (mark, color) = if met { ("ok", OK_COLOR) } else { ("--", ERROR_COLOR) };
        ui.colored_label(color, format!("{mark} {label}"));
    }
    ui.label(format!("Strength: {}", strength.label.as_str()));
}
