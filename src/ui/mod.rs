// src/ui/mod.rs
pub mod central_panel;
pub mod main_window;
pub mod session;
pub mod side_panel;
pub mod status_bar;

pub use main_window::run_main_window;
pub use session::CaveSession;

/// Title of the application window.
pub const WINDOW_TITLE: &str = "Cave Gen";
/// Side length of one painted cell, in points.
pub const TILE_SIZE: f32 = 6.0;
/// Extra room around the canvas for the panels.
pub const CANVAS_PADDING: f32 = 250.0;
