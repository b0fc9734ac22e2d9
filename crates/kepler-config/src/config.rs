//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use kepler_math::Orbit;
use serde::{Deserialize, Serialize};

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::validate::{snap_eccentricity, validate_interval};

/// Top-level visualizer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Orbit shape and sector interval.
    pub orbit: OrbitConfig,
    /// Animation clock settings.
    pub animation: AnimationConfig,
    /// Frame rendering settings.
    pub render: RenderConfig,
    /// Area table settings.
    pub table: TableConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// User-adjustable orbit parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Eccentricity, snapped to 0.05 steps in `[0.0, 0.9]`.
    pub eccentricity: f64,
    /// Sector interval length in days, `[10, 60]`.
    pub interval_days: u32,
}

/// Animation clock configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Days the clock advances per tick.
    pub time_step: f64,
    /// Wall-clock milliseconds per tick.
    pub tick_ms: u64,
    /// Start running instead of paused.
    pub autostart: bool,
}

/// Frame rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Points sampled along the orbit curve.
    pub orbit_samples: usize,
    /// Directory for PNG frames. No frames are written when unset.
    pub output_dir: Option<PathBuf>,
    /// Write every frame as a numbered file instead of overwriting one.
    pub record: bool,
}

/// What the area column of the sector table shows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AreaReadout {
    /// The fixed teaching value shown for every sector.
    #[default]
    Placeholder,
    /// The analytic swept area of each sector.
    Computed,
}

/// Area table configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub area_readout: AreaReadout,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            eccentricity: 0.5,
            interval_days: 30,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_step: 2.0,
            tick_ms: 10,
            autostart: false,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 700,
            height: 600,
            orbit_samples: 200,
            output_dir: None,
            record: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

impl OrbitConfig {
    /// Build the validated orbit, snapping eccentricity onto its grid.
    pub fn orbit(&self) -> Result<Orbit, ConfigError> {
        Ok(Orbit::new(snap_eccentricity(self.eccentricity)?))
    }
}

impl Config {
    /// Check every range-limited setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.orbit.orbit()?;
        validate_interval(self.orbit.interval_days)?;

        if !(self.animation.time_step.is_finite() && self.animation.time_step > 0.0) {
            return Err(ConfigError::Invalid {
                field: "time_step",
                reason: format!("{} is not a positive number", self.animation.time_step),
            });
        }
        if self.animation.tick_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.render.width == 0 || self.render.height == 0 {
            return Err(ConfigError::Invalid {
                field: "render",
                reason: format!(
                    "frame size {}x{} is empty",
                    self.render.width, self.render.height
                ),
            });
        }
        if self.render.orbit_samples < 2 {
            return Err(ConfigError::Invalid {
                field: "orbit_samples",
                reason: format!("need at least 2, got {}", self.render.orbit_samples),
            });
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    ///
    /// `args` are re-applied on top of the file before comparing, so a
    /// config started with CLI overrides only counts as changed when the
    /// file itself differs.
    pub fn reload(&self, config_dir: &Path, args: &CliArgs) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let mut new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        new_config.apply_cli_overrides(args);

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
