use crate::core::data::grid_size::GridSizeError;
use thiserror::Error;

/// Fatal startup problems, reported before the loop ever runs a frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("invalid grid size: {0}")]
    GridSize(#[from] GridSizeError),
    #[error("initial zoom must be positive and finite, got {0}")]
    InvalidZoom(f64),
    #[error("initial center must be finite, got ({x}, {y})")]
    InvalidCenter { x: f64, y: f64 },
    #[error("initial accuracy base must be finite, got {0}")]
    InvalidAccuracyBase(f64),
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidEnvironmentValue { name: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum LoopError<E: std::error::Error + 'static> {
    #[error("presentation sink failed: {0}")]
    Present(#[source] E),
}
