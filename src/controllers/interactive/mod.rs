//! Interactive frame loop for real-time fractal exploration.
//!
//! # Architecture
//!
//! The loop follows the ports & adapters pattern:
//! - **Input**: an [`InputSource`] reporting quit and held commands each frame
//! - **Output**: a [`PresentationSink`] receiving each finished frame grid
//! - **Core**: the viewport and escape-time evaluator from `core/`

mod controller;
pub mod data;
pub mod errors;
pub mod ports;

pub use controller::{InteractiveLoop, LoopState};
pub use data::explorer_config::{ExplorerConfig, headless_frames_from_env};
pub use data::frame_stats::FrameStats;
pub use errors::{ConfigurationError, LoopError};
pub use ports::{InputSource, PresentationSink};
