//! # Main Window Module
//!
//! Assembles the panels into an eframe application:
//! - a left side panel with the four cave actions and parameter editors,
//! - a central canvas painting the grid,
//! - a bottom status bar with the last action and cave statistics.
//!
//! `run_main_window()` launches the window and blocks until it closes.

use std::error::Error;
use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use crate::cave::CaveEngine;
use crate::ui::central_panel::CentralPanel;
use crate::ui::session::CaveSession;
use crate::ui::side_panel::SidePanel;
use crate::ui::status_bar::StatusBar;
use crate::ui::{CANVAS_PADDING, TILE_SIZE, WINDOW_TITLE};

pub struct MainWindow {
    side_panel: SidePanel,
    central_panel: CentralPanel,
    status_bar: StatusBar,
}

impl MainWindow {
    pub fn new(session: Arc<RwLock<CaveSession>>) -> Self {
        Self {
            side_panel: SidePanel::new(Arc::clone(&session)),
            central_panel: CentralPanel::new(Arc::clone(&session)),
            status_bar: StatusBar::new(session),
        }
    }
}

impl eframe::App for MainWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side and bottom panels must be laid out before the central one.
        self.side_panel.update(ctx);
        self.status_bar.update(ctx);
        self.central_panel.update(ctx);
    }
}

/// Window size that fits a `width × height` grid plus the controls.
pub fn canvas_size(width: usize, height: usize) -> egui::Vec2 {
    egui::vec2(
        width as f32 * TILE_SIZE + CANVAS_PADDING,
        height as f32 * TILE_SIZE + CANVAS_PADDING,
    )
}

/// Opens the cave window around `engine`.
pub fn run_main_window(engine: CaveEngine) -> Result<(), Box<dyn Error>> {
    let size = canvas_size(engine.config().width, engine.config().height);
    let session = Arc::new(RwLock::new(CaveSession::new(engine)));

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(size),
        resizable: true,
        ..Default::default()
    };

    info!("Opening {} window ({}x{})", WINDOW_TITLE, size.x, size.y);
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Box::new(MainWindow::new(session))),
    );
    // run_native returns () so we simply return Ok.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_for_default_grid() {
        let size = canvas_size(100, 100);
        assert_eq!(size, egui::vec2(850.0, 850.0));
    }
}
