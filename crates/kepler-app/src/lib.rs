//! Kepler's second law visualizer: animation state, the fixed-tick driver,
//! interactive commands, and the sector area table.

pub mod app;
pub mod command;
mod error;
pub mod frame;
pub mod game_loop;
pub mod platform;
pub mod state;
pub mod table;

pub use app::{App, Flow, FrameSummary};
pub use error::AppError;
