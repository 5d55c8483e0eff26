pub mod app;
pub mod config;
pub mod data;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod notebook;
pub mod persistence;
pub mod progression;
pub mod session;
pub mod speech;
pub mod ui;
pub mod view_models;

pub use app::GeoQuestApp;
