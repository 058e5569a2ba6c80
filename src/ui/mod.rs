//! egui views. Each page is a free function rendering from `&mut AppState`.
pub mod categories;
pub mod courses;
pub mod details;
pub mod home;
pub mod nav;
pub mod not_found;
pub mod progress;
pub mod widgets;
