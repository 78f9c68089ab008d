// src/cave/stats.rs

use crate::cave::{Cell, Grid};

/// Summary of the current cave, refreshed after every engine operation.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CaveStats {
    pub alive: usize,
    pub dead: usize,
    pub treasure: usize,
    pub player: Option<(usize, usize)>,
    /// Simulation steps applied since the last `generate`.
    pub generation: usize,
}

impl CaveStats {
    pub fn collect(grid: &Grid, generation: usize) -> Self {
        let mut stats = CaveStats {
            generation,
            ..CaveStats::default()
        };
        for (x, y) in grid.positions() {
            match grid.at(x, y) {
                Cell::Alive => stats.alive += 1,
                Cell::Dead => stats.dead += 1,
                Cell::Treasure => stats.treasure += 1,
                Cell::Player => {
                    if stats.player.is_none() {
                        stats.player = Some((x, y));
                    }
                }
            }
        }
        stats
    }

    pub fn summary(&self) -> String {
        let player = match self.player {
            Some((x, y)) => format!("({}, {})", x, y),
            None => "none".to_owned(),
        };
        format!(
            "Generation {} | walls {} | floor {} | treasure {} | player {}",
            self.generation, self.alive, self.dead, self.treasure, player
        )
    }
}
