pub mod board;
pub mod calibration;
pub mod config;
pub mod consts;
pub mod error;
pub mod game;
pub mod geometry;
pub mod judge;
pub mod strategy;
// cmd and reports belong to the binary (main.rs).

pub use error::{DartsError, DartsResult};
