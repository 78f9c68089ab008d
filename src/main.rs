#![warn(non_snake_case)]
//! # Cave Gen Main Entry Point
//!
//! Generates a cellular-automaton cave and shows it in an eframe/egui
//! window where it can be stepped, regenerated and populated with treasure
//! and a player spawn.
//!
//! ## Usage
//!
//! `cave_gen [CONFIG.json]`
//!
//! The optional argument names a JSON configuration file; invalid files are
//! logged and the defaults are used instead. Set `CAVE_SEED` for a
//! reproducible cave and `RUST_LOG` for logging. Built with the `headless`
//! feature, the cave is printed to stdout instead of opening a window.
//!
//! ## License
//! Licensed under the MIT License.

use std::env;
use std::error::Error;

use cave_gen::cave::CaveEngine;
use cave_gen::config::CaveConfig;
use cave_gen::ui;
use log::{error, info, warn};

/// Environment variable holding an optional `u64` seed.
const SEED_VAR: &str = "CAVE_SEED";

/// Reads the configuration named on the command line, if any.
fn load_config() -> CaveConfig {
    match env::args().nth(1) {
        Some(path) => match CaveConfig::load(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path);
                config
            }
            Err(e) => {
                error!("Could not load {}: {}. Using defaults.", path, e);
                CaveConfig::default()
            }
        },
        None => CaveConfig::default(),
    }
}

fn seed_from_env() -> Option<u64> {
    let raw = env::var(SEED_VAR).ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            warn!("Ignoring {}={:?}: not an unsigned integer", SEED_VAR, raw);
            None
        }
    }
}

/// Prints the generated cave with treasure and a player placed.
fn run_headless(mut engine: CaveEngine) {
    engine.place_treasure();
    engine.place_player();
    print!("{}", engine.grid());
    println!("{}", engine.stats().summary());
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("Cave Gen starting...");

    let config = load_config();
    let engine = match seed_from_env() {
        Some(seed) => {
            info!("Using seed {}", seed);
            CaveEngine::seeded(config, seed)?
        }
        None => CaveEngine::from_entropy(config)?,
    };

    if cfg!(feature = "headless") || !cfg!(feature = "gui") {
        run_headless(engine);
    } else {
        ui::run_main_window(engine)?;
    }

    info!("Cave Gen exiting.");
    Ok(())
}
