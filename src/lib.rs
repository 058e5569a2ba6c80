pub mod app;
pub mod catalog;
pub mod color;
pub mod config;
pub mod route;
pub mod state;
pub mod ui;
