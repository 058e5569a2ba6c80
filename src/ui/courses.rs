use eframe::egui::{self, RichText, Ui};

use crate::catalog::model::{Course, Level};
use crate::catalog::query::{SortKey, ALL};
use crate::route::Route;
use crate::state::{AppState, ViewMode};
use crate::ui::widgets;

// ---------------------------------------------------------------------------
// Courses page
// ---------------------------------------------------------------------------

/// Render the searchable course list.
pub fn courses_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading(RichText::new("All Courses").size(28.0));
    ui.label(
        RichText::new(
            "Discover our complete catalog of courses and find the perfect learning path for you.",
        )
        .weak(),
    );
    ui.add_space(8.0);

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        filter_bar(ui, state);
        ui.separator();
        result_bar(ui, state);
    });
    ui.add_space(8.0);

    if state.visible_indices.is_empty() {
        no_results(ui, state);
        return;
    }

    let courses: Vec<Course> = state.visible_courses().cloned().collect();
    if let Some(id) = card_grid(ui, &courses, state, state.view_mode) {
        state.navigate(Route::CourseDetails(id));
    }
}

fn filter_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        // ---- Search ----
        ui.label("🔍");
        let mut term = state.query.term.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut term)
                .hint_text("Search by title or keyword...")
                .desired_width(260.0),
        );
        if response.changed() {
            state.set_search_term(&term);
        }

        // ---- Category ----
        let categories: Vec<String> = state.catalog.categories().to_vec();
        let current = state.query.category.clone();
        egui::ComboBox::from_id_salt("category")
            .selected_text(option_label(&current, "All Categories"))
            .show_ui(ui, |ui: &mut Ui| {
                if ui.selectable_label(current == ALL, "All Categories").clicked() {
                    state.set_category(ALL);
                }
                for category in &categories {
                    if ui.selectable_label(current == *category, category).clicked() {
                        state.set_category(category);
                    }
                }
            });

        // ---- Level ----
        let current = state.query.level.clone();
        egui::ComboBox::from_id_salt("level")
            .selected_text(option_label(&current, "All Levels"))
            .show_ui(ui, |ui: &mut Ui| {
                if ui.selectable_label(current == ALL, "All Levels").clicked() {
                    state.set_level(ALL);
                }
                for level in Level::ALL {
                    if ui
                        .selectable_label(current == level.as_str(), level.as_str())
                        .clicked()
                    {
                        state.set_level(level.as_str());
                    }
                }
            });

        // ---- Sort ----
        let current = state.query.sort;
        egui::ComboBox::from_id_salt("sort_by")
            .selected_text(current.label())
            .show_ui(ui, |ui: &mut Ui| {
                for key in SortKey::CHOICES {
                    if ui.selectable_label(current == key, key.label()).clicked() {
                        state.set_sort(key);
                    }
                }
            });
    });
}

fn option_label<'a>(value: &'a str, all_label: &'a str) -> &'a str {
    if value == ALL {
        all_label
    } else {
        value
    }
}

fn result_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} courses found", state.visible_indices.len()));
        if state.has_active_filters() && ui.small_button("Clear Filters").clicked() {
            state.clear_filters();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.selectable_value(&mut state.view_mode, ViewMode::List, "☰ List");
            ui.selectable_value(&mut state.view_mode, ViewMode::Grid, "▦ Grid");
        });
    });
}

fn no_results(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(24.0);
        ui.heading("No courses found");
        ui.label("Try adjusting your search terms or filters to find more courses.");
        if ui.button("Clear All Filters").clicked() {
            state.clear_filters();
        }
    });
}

/// Lay out course cards. Returns the id of the course the learner opened.
pub fn card_grid(
    ui: &mut Ui,
    courses: &[Course],
    state: &AppState,
    mode: ViewMode,
) -> Option<String> {
    let mut opened = None;
    let mut card = |ui: &mut Ui, course: &Course| {
        let progress = state.course_progress(&course.id);
        if widgets::course_card(ui, course, &state.category_colors, progress) {
            opened = Some(course.id.clone());
        }
    };

    match mode {
        ViewMode::Grid => {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for course in courses {
                    card(ui, course);
                }
            });
        }
        ViewMode::List => {
            ui.vertical(|ui: &mut Ui| {
                for course in courses {
                    card(ui, course);
                }
            });
        }
    }
    opened
}
