//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{AreaReadout, Config};

/// Kepler's second law visualizer.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "kepler-areas", about = "Kepler's second law: equal areas in equal times")]
pub struct CliArgs {
    /// Orbital eccentricity (0.0 - 0.9, step 0.05).
    #[arg(short, long)]
    pub eccentricity: Option<f64>,

    /// Sector interval in days (10 - 60).
    #[arg(short, long)]
    pub interval: Option<u32>,

    /// Initial clock value in days.
    #[arg(short, long)]
    pub time: Option<f64>,

    /// Directory to write PNG frames into.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write numbered frames instead of overwriting `frame.png`.
    #[arg(long)]
    pub record: bool,

    /// Start the animation immediately.
    #[arg(long)]
    pub autostart: bool,

    /// Render a single frame, print the table, and exit.
    #[arg(long)]
    pub snapshot: bool,

    /// Print the area table as JSON.
    #[arg(long)]
    pub json: bool,

    /// Show analytic sector areas instead of the fixed teaching value.
    #[arg(long)]
    pub computed_areas: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(e) = args.eccentricity {
            self.orbit.eccentricity = e;
        }
        if let Some(dt) = args.interval {
            self.orbit.interval_days = dt;
        }
        if let Some(ref dir) = args.output {
            self.render.output_dir = Some(dir.clone());
        }
        if args.record {
            self.render.record = true;
        }
        if args.autostart {
            self.animation.autostart = true;
        }
        if args.computed_areas {
            self.table.area_readout = AreaReadout::Computed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
