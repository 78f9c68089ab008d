// src/cave/engine.rs

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cave::{Cell, CaveStats, Grid};
use crate::config::CaveConfig;
use crate::error::Result;

/// A floor cell with at least this many alive neighbors becomes treasure.
pub const TREASURE_LIMIT: u8 = 5;
/// A floor cell with at most this many alive neighbors may become the spawn.
pub const PLAYER_LIMIT: u8 = 1;

/// Fills a new grid at random: each cell is `Alive` when its draw is below
/// `chance_to_start_alive`. Draws happen in scan order, one per cell.
pub fn seed_grid<R: Rng + ?Sized>(config: &CaveConfig, rng: &mut R) -> Grid {
    let mut grid = Grid::new(config.width, config.height);
    for x in 0..config.width {
        for y in 0..config.height {
            if rng.random::<f64>() < config.chance_to_start_alive {
                grid.put(x, y, Cell::Alive);
            }
        }
    }
    grid
}

/// One smoothing pass. The result is computed entirely from `grid`; no cell
/// sees a neighbor's updated value. Markings collapse back to plain floor or
/// wall.
pub fn simulation_step(grid: &Grid, config: &CaveConfig) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height());
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let neighbors = grid.count_alive_neighbors(x, y);
            let alive = if grid.at(x, y).is_alive() {
                neighbors >= config.death_limit
            } else {
                neighbors > config.birth_limit
            };
            if alive {
                next.put(x, y, Cell::Alive);
            }
        }
    }
    next
}

/// Marks every floor cell with at least [`TREASURE_LIMIT`] alive neighbors
/// as treasure. Returns how many cells were marked.
pub fn place_treasure(grid: &mut Grid) -> usize {
    let mut placed = 0;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if grid.at(x, y) == Cell::Dead && grid.count_alive_neighbors(x, y) >= TREASURE_LIMIT {
                grid.put(x, y, Cell::Treasure);
                placed += 1;
            }
        }
    }
    placed
}

/// Places at most one player spawn in a single scan.
///
/// Any existing `Player` cell is cleared when the scan reaches it, even after
/// a new spawn was placed earlier in the same scan. The first open floor cell
/// with at most [`PLAYER_LIMIT`] alive neighbors whose draw exceeds
/// `threshold` becomes the spawn; later cells are not considered. It is
/// possible for no cell to win, in which case the grid has no player.
pub fn place_player<R: Rng + ?Sized>(
    grid: &mut Grid,
    threshold: f64,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let mut placed = None;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if grid.at(x, y) == Cell::Player {
                grid.put(x, y, Cell::Dead);
            }
            if grid.at(x, y) != Cell::Dead {
                continue;
            }
            let neighbors = grid.count_alive_neighbors(x, y);
            if neighbors <= PLAYER_LIMIT && placed.is_none() && rng.random::<f64>() > threshold {
                grid.put(x, y, Cell::Player);
                placed = Some((x, y));
            }
        }
    }
    placed
}

/// Owns a cave grid together with the configuration and random source used
/// to produce it.
///
/// Operations run to completion one at a time. Callers that share an engine
/// (the UI does, behind a lock) must not interleave calls.
pub struct CaveEngine<R: Rng = StdRng> {
    config: CaveConfig,
    rng: R,
    grid: Grid,
    generation: usize,
    stats: CaveStats,
}

impl CaveEngine<StdRng> {
    /// An engine whose draws are reproducible from `seed`.
    pub fn seeded(config: CaveConfig, seed: u64) -> Result<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// An engine seeded from the operating system.
    pub fn from_entropy(config: CaveConfig) -> Result<Self> {
        Self::new(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> CaveEngine<R> {
    /// Validates `config` and generates the first cave.
    pub fn new(config: CaveConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let mut engine = Self {
            grid: Grid::new(config.width, config.height),
            config,
            rng,
            generation: 0,
            stats: CaveStats::default(),
        };
        engine.generate();
        Ok(engine)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Reads one cell for rendering.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell> {
        self.grid.get(x, y)
    }

    pub fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Replaces the configuration. The current grid is left alone until the
    /// next `generate`.
    pub fn set_config(&mut self, config: CaveConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn stats(&self) -> &CaveStats {
        &self.stats
    }

    /// Seeds a new grid and smooths it `steps` times, discarding the old one.
    pub fn generate(&mut self) -> &Grid {
        let mut grid = seed_grid(&self.config, &mut self.rng);
        for _ in 0..self.config.steps {
            grid = simulation_step(&grid, &self.config);
        }
        self.grid = grid;
        self.generation = self.config.steps;
        self.refresh_stats();
        info!(
            "Generated {}x{} cave ({} steps): {} walls",
            self.grid.width(),
            self.grid.height(),
            self.config.steps,
            self.stats.alive
        );
        &self.grid
    }

    /// Restores the "New World" parameters and generates.
    pub fn reset_and_generate(&mut self) -> &Grid {
        self.config = self.config.regeneration_defaults();
        info!("Configuration reset to regeneration defaults");
        self.generate()
    }

    /// Applies one more smoothing pass to the current grid.
    pub fn step(&mut self) -> &Grid {
        self.grid = simulation_step(&self.grid, &self.config);
        self.generation += 1;
        self.refresh_stats();
        debug!(
            "Simulation step {}: {} walls",
            self.generation, self.stats.alive
        );
        &self.grid
    }

    /// Marks treasure cells; returns how many were added.
    pub fn place_treasure(&mut self) -> usize {
        let placed = place_treasure(&mut self.grid);
        self.refresh_stats();
        info!("Placed {} treasure cells", placed);
        placed
    }

    /// Moves the player spawn; `None` if no cell won its draw this time.
    pub fn place_player(&mut self) -> Option<(usize, usize)> {
        let placed = place_player(
            &mut self.grid,
            self.config.chance_to_start_alive,
            &mut self.rng,
        );
        self.refresh_stats();
        match placed {
            Some((x, y)) => info!("Placed player at ({}, {})", x, y),
            None => warn!("No cell qualified for the player spawn"),
        }
        placed
    }

    fn refresh_stats(&mut self) {
        self.stats = CaveStats::collect(&self.grid, self.generation);
    }
}
