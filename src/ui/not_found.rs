use eframe::egui::{RichText, Ui};

use crate::route::Route;
use crate::state::AppState;

/// Shown for paths no page is registered for.
pub fn not_found_page(ui: &mut Ui, state: &mut AppState, path: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(48.0);
        ui.heading(RichText::new("404").size(48.0));
        ui.label(format!("No page at {path}"));
        if ui.button("Return to Home").clicked() {
            state.navigate(Route::Home);
        }
    });
}
