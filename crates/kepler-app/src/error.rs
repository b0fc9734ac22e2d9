//! Application-level error type.

use kepler_config::ConfigError;
use kepler_math::OrbitError;
use kepler_render::RenderError;

use crate::platform::PlatformError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Orbit(#[from] OrbitError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("failed to serialize area table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to start command reader: {0}")]
    Io(#[from] std::io::Error),
}
