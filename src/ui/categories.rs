use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;
use crate::ui::widgets;

/// One tile per catalog category; clicking opens the filtered course list.
pub fn categories_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading(RichText::new("Categories").size(28.0));
    ui.label(RichText::new("Browse the catalog by subject.").weak());
    ui.add_space(8.0);

    let categories: Vec<String> = state.catalog.categories().to_vec();
    if categories.is_empty() {
        ui.label("The catalog is empty.");
        return;
    }

    let mut chosen = None;
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for category in &categories {
            let count = state.catalog.count_in_category(category);
            egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                ui.set_width(widgets::CARD_WIDTH);
                widgets::badge(ui, category, state.category_colors.color_for(category));
                ui.label(RichText::new(category).strong().size(18.0));
                let noun = if count == 1 { "course" } else { "courses" };
                ui.label(format!("{count} {noun}"));
                if ui.button("Browse").clicked() {
                    chosen = Some(category.clone());
                }
            });
        }
    });

    if let Some(category) = chosen {
        state.browse_category(&category);
    }
}
