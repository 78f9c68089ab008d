// src/cave/mod.rs
//! The cave grid engine: cells, the grid, smoothing and placement.

pub mod cell;
pub mod engine;
pub mod grid;
pub mod stats;

pub use cell::Cell;
pub use engine::{
    place_player, place_treasure, seed_grid, simulation_step, CaveEngine, PLAYER_LIMIT,
    TREASURE_LIMIT,
};
pub use grid::Grid;
pub use stats::CaveStats;
