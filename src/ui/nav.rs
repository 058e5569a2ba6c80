use eframe::egui::{self, Color32, RichText, Ui};

use crate::catalog::fixtures;
use crate::route::{Route, NAV_LINKS};
use crate::state::AppState;

/// Below this width the links collapse into a toggleable menu.
const COLLAPSE_WIDTH: f32 = 720.0;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top navigation bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    let collapsed = ui.available_width() < COLLAPSE_WIDTH;

    egui::menu::bar(ui, |ui: &mut Ui| {
        if ui
            .add(egui::Button::new(RichText::new("📖 CourseDeck").strong()).frame(false))
            .clicked()
        {
            state.navigate(Route::Home);
        }

        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open catalog…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Built-in catalog").clicked() {
                state.set_catalog(fixtures::catalog());
                ui.close_menu();
            }
        });

        ui.separator();

        if collapsed {
            let icon = if state.menu_open { "✖" } else { "☰" };
            if ui.button(icon).clicked() {
                state.toggle_menu();
            }
        } else {
            nav_links(ui, state);
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    if collapsed && state.menu_open {
        ui.vertical(|ui: &mut Ui| nav_links(ui, state));
    }
}

fn nav_links(ui: &mut Ui, state: &mut AppState) {
    for (name, path) in NAV_LINKS {
        if ui
            .selectable_label(state.route.is_active(path), name)
            .clicked()
        {
            state.navigate_path(path);
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open course catalog")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_catalog_file(&path);
    }
}
