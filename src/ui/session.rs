// src/ui/session.rs

use log::error;

use crate::cave::{CaveEngine, Cell};
use crate::config::CaveConfig;

/// State shared by every panel: the engine plus what the UI shows about it.
///
/// Each action method runs exactly one engine operation and records a status
/// line, so a button press maps to one call under the write lock.
pub struct CaveSession {
    engine: CaveEngine,
    /// Parameters being edited in the side panel, applied on "New World".
    pub pending_config: CaveConfig,
    pub status_message: String,
    /// Cell under the pointer, if any.
    pub hovered: Option<(usize, usize, Cell)>,
}

impl CaveSession {
    pub fn new(engine: CaveEngine) -> Self {
        let pending_config = engine.config().clone();
        Self {
            engine,
            pending_config,
            status_message: "Welcome to Cave Gen!".to_owned(),
            hovered: None,
        }
    }

    pub fn engine(&self) -> &CaveEngine {
        &self.engine
    }

    pub fn do_simulation_step(&mut self) {
        self.engine.step();
        self.status_message = format!("Simulation step {}", self.engine.stats().generation);
    }

    /// Generates with the edited parameters.
    pub fn generate(&mut self) {
        if let Err(e) = self.engine.set_config(self.pending_config.clone()) {
            error!("Rejected configuration: {}", e);
            self.status_message = e.to_string();
            return;
        }
        self.engine.generate();
        self.status_message = "Generated a new cave".to_owned();
    }

    /// Resets to the "New World" parameters, then generates.
    pub fn new_world(&mut self) {
        self.engine.reset_and_generate();
        self.pending_config = self.engine.config().clone();
        self.status_message = "New world".to_owned();
    }

    pub fn place_treasure(&mut self) {
        let placed = self.engine.place_treasure();
        self.status_message = format!("Placed {} treasure", placed);
    }

    pub fn place_player(&mut self) {
        self.status_message = match self.engine.place_player() {
            Some((x, y)) => format!("Player placed at ({}, {})", x, y),
            None => "No spawn found, try again".to_owned(),
        };
    }

    /// Records the cell under the pointer; out-of-grid positions clear it.
    pub fn hover(&mut self, x: usize, y: usize) {
        self.hovered = self.engine.cell(x, y).ok().map(|cell| (x, y, cell));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> CaveSession {
        let config = CaveConfig {
            width: 20,
            height: 15,
            ..CaveConfig::default()
        };
        CaveSession::new(CaveEngine::seeded(config, 99).unwrap())
    }

    #[test]
    fn test_new_world_resets_pending_config() {
        let mut session = session();
        session.pending_config.steps = 9;
        session.new_world();
        assert_eq!(session.pending_config.steps, 2);
        assert_eq!(session.engine().config().steps, 2);
    }

    #[test]
    fn test_generate_rejects_invalid_pending_config() {
        let mut session = session();
        let before = session.engine().grid().clone();
        session.pending_config.width = 0;
        session.generate();
        assert_eq!(session.engine().grid(), &before);
        assert!(session.status_message.contains("invalid configuration"));
    }

    #[test]
    fn test_generate_applies_pending_dimensions() {
        let mut session = session();
        session.pending_config.width = 33;
        session.generate();
        assert_eq!(session.engine().grid().width(), 33);
    }

    #[test]
    fn test_hover_outside_grid_clears() {
        let mut session = session();
        session.hover(3, 4);
        assert!(matches!(session.hovered, Some((3, 4, _))));
        session.hover(20, 0);
        assert_eq!(session.hovered, None);
    }

    #[test]
    fn test_actions_update_status() {
        let mut session = session();
        session.do_simulation_step();
        assert_eq!(session.status_message, "Simulation step 4");
        session.place_treasure();
        assert!(session.status_message.starts_with("Placed"));
        session.place_player();
        assert!(session.engine().grid().count(Cell::Player) <= 1);
    }
}
