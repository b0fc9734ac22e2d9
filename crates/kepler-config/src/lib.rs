//! Configuration for the Kepler areas visualizer.
//!
//! Settings persist to disk as RON, accept CLI overrides via clap, and are
//! validated at this boundary so the orbit math only ever sees parameters
//! it can handle.

mod cli;
mod config;
mod error;
mod validate;

pub use cli::CliArgs;
pub use config::{
    AnimationConfig, AreaReadout, Config, DebugConfig, OrbitConfig, RenderConfig, TableConfig,
};
pub use error::ConfigError;
pub use validate::{ECCENTRICITY_STEP, INTERVAL_RANGE, snap_eccentricity, validate_interval};
