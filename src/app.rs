use eframe::egui;

use crate::config::{self, Config};
use crate::route::Route;
use crate::state::AppState;
use crate::ui::{categories, courses, details, home, nav, not_found, progress};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CourseDeckApp {
    pub state: AppState,
    /// Settings as last written to disk.
    config: Config,
}

impl CourseDeckApp {
    pub fn new(config: Config) -> Self {
        Self {
            state: AppState::from_config(&config),
            config,
        }
    }

    /// Persist sort and view mode once they differ from the saved settings.
    fn save_preferences(&mut self) {
        let current = self.state.to_config(&self.config);
        if current == self.config {
            return;
        }
        match config::save(&current) {
            Ok(()) => log::debug!("Saved settings: {current:?}"),
            Err(e) => log::warn!("Could not save settings: {e}"),
        }
        self.config = current;
    }
}

impl Default for CourseDeckApp {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl eframe::App for CourseDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: navigation ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            nav::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: current page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.route.clone() {
                    Route::Home => home::home_page(ui, &mut self.state),
                    Route::Courses => courses::courses_page(ui, &mut self.state),
                    Route::CourseDetails(id) => details::details_page(ui, &mut self.state, &id),
                    Route::Progress => progress::progress_page(ui, &mut self.state),
                    Route::Categories => categories::categories_page(ui, &mut self.state),
                    Route::NotFound(path) => not_found::not_found_page(ui, &mut self.state, &path),
                });
        });

        self.save_preferences();
    }
}
