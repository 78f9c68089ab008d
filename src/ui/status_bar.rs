// src/ui/status_bar.rs

use std::sync::Arc;
use egui::Context;
use parking_lot::RwLock;

use crate::ui::session::CaveSession;

pub struct StatusBar {
    session: Arc<RwLock<CaveSession>>,
}

impl StatusBar {
    pub fn new(session: Arc<RwLock<CaveSession>>) -> Self {
        Self { session }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let session = self.session.read(); // Keep the read lock short.

            let hover_label = match session.hovered {
                Some((x, y, cell)) => format!("({}, {}) {}", x, y, cell),
                None => String::new(),
            };

            ui.horizontal(|ui| {
                ui.label(&session.status_message);
                ui.label(hover_label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(session.engine().stats().summary());
                });
            });
        });
    }
}
