use coursedeck::app::CourseDeckApp;
use coursedeck::config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = config::load().unwrap_or_else(|e| {
        log::warn!("Using default settings: {e}");
        config::Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CourseDeck – Course Catalog",
        options,
        Box::new(|cc| {
            // Install image loaders so course covers (png/jpg) can be shown.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(CourseDeckApp::new(config)))
        }),
    )
}
