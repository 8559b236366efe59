// Dioxus UI module - customer screens
pub mod app;
pub mod components;
pub mod navigation;
pub mod router;
pub mod views;

pub use app::App;
