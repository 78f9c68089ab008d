// src/lib.rs

pub mod cave;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{CaveError, Result};
