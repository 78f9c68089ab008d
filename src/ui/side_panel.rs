// src/ui/side_panel.rs

use std::sync::Arc;
use egui::{Context, Ui};
use parking_lot::RwLock;

use crate::config::MAX_NEIGHBOR_LIMIT;
use crate::ui::session::CaveSession;

/// Largest grid dimension offered by the editors.
const MAX_DIMENSION: usize = 400;

/// Left-side panel with the action buttons and the parameter editors.
pub struct SidePanel {
    session: Arc<RwLock<CaveSession>>,
}

impl SidePanel {
    pub fn new(session: Arc<RwLock<CaveSession>>) -> Self {
        Self { session }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::SidePanel::left("controls_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.show_actions(ui);
                ui.separator();
                self.show_parameters(ui);
            });
    }

    fn show_actions(&self, ui: &mut Ui) {
        ui.heading("Actions");
        if ui.button("Do Simulation Step").clicked() {
            self.session.write().do_simulation_step();
        }
        if ui.button("New World").clicked() {
            self.session.write().new_world();
        }
        if ui.button("Place Treasure").clicked() {
            self.session.write().place_treasure();
        }
        if ui.button("Place Player").clicked() {
            self.session.write().place_player();
        }
    }

    /// Edits the pending configuration. Nothing changes on screen until
    /// "Generate" is pressed.
    fn show_parameters(&self, ui: &mut Ui) {
        ui.heading("Parameters");
        let mut session = self.session.write();
        let config = &mut session.pending_config;

        ui.add(egui::Slider::new(&mut config.chance_to_start_alive, 0.0..=1.0).text("Start alive"));
        ui.add(egui::Slider::new(&mut config.birth_limit, 0..=MAX_NEIGHBOR_LIMIT).text("Birth limit"));
        ui.add(egui::Slider::new(&mut config.death_limit, 0..=MAX_NEIGHBOR_LIMIT).text("Death limit"));
        ui.add(egui::Slider::new(&mut config.steps, 0..=10).text("Steps"));
        ui.add(egui::Slider::new(&mut config.width, 1..=MAX_DIMENSION).text("Width"));
        ui.add(egui::Slider::new(&mut config.height, 1..=MAX_DIMENSION).text("Height"));

        if ui.button("Generate").clicked() {
            session.generate();
        }
    }
}
