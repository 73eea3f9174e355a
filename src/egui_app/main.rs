/**
 * egui Native Desktop App - Main Entry Point
 *
 * This is the main entry point for the desktop auth client. The app
 * restores any persisted session at startup and shows either the auth
 * form or the dashboard.
 */
use eframe::egui;
use signon::egui_app::AuthApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([400.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Signon",
        options,
        Box::new(|_cc| Ok(Box::new(AuthApp::new()))),
    )
}
