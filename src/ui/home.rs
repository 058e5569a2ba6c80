use eframe::egui::{self, RichText, Ui};

use crate::catalog::fixtures;
use crate::catalog::model::Course;
use crate::route::Route;
use crate::state::{AppState, ViewMode};
use crate::ui::courses::card_grid;

/// Render the landing page: hero, headline numbers and featured courses.
pub fn home_page(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(16.0);
        ui.heading(RichText::new("Learn Without Limits").size(36.0).strong());
        ui.label(
            RichText::new(
                "Discover courses from expert instructors and build the skills you need, at your own pace.",
            )
            .size(16.0),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui: &mut Ui| {
            if ui.button("Explore Courses").clicked() {
                state.navigate(Route::Courses);
            }
            if ui.button("My Progress").clicked() {
                state.navigate(Route::Progress);
            }
        });
    });
    ui.add_space(16.0);

    ui.columns(4, |cols: &mut [Ui]| {
        for (col, (label, value)) in cols.iter_mut().zip(fixtures::site_stats()) {
            col.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(value).size(24.0).strong());
                ui.label(RichText::new(label).weak());
            });
        }
    });
    ui.add_space(16.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Featured Courses");
        if ui.link("View All Courses").clicked() {
            state.navigate(Route::Courses);
        }
    });
    ui.separator();

    let featured: Vec<Course> = fixtures::featured(&state.catalog)
        .into_iter()
        .cloned()
        .collect();
    if let Some(id) = card_grid(ui, &featured, state, ViewMode::Grid) {
        state.navigate(Route::CourseDetails(id));
    }

    ui.add_space(16.0);
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading("Ready to Start Learning?");
            ui.label("Join thousands of learners and take the next step in your career.");
            if ui.button("Browse Catalog").clicked() {
                state.navigate(Route::Courses);
            }
        });
    });
}
