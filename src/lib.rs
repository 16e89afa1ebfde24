mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use crate::controllers::interactive::{
    ConfigurationError, ExplorerConfig, FrameStats, InputSource, InteractiveLoop, LoopError,
    LoopState, PresentationSink, headless_frames_from_env,
};
pub use crate::core::data::depth::{Depth, IN_SET, MAX_DEPTH_CAP};
pub use crate::core::data::frame_grid::FrameGrid;
pub use crate::core::data::grid_size::{GridSize, GridSizeError};
pub use crate::core::data::plane_point::PlanePoint;
pub use crate::core::fractals::quartic::evaluate;
pub use crate::core::viewport::{Command, CommandSet, InputSnapshot, Viewport, ViewportSettings};
pub use crate::input::scripted::ScriptedInput;
pub use crate::presenters::file::ppm::{PpmFileSink, PpmSinkError};

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, RunGuiCommand};

#[doc(hidden)]
pub mod bench_support {
    pub use crate::adapters::pixel_format::copy_depths_to_rgba;
    pub use crate::core::actions::fill_frame_grid::{fill_frame_grid_rayon, fill_frame_grid_serial};
    pub use crate::core::fractals::quartic::QuarticAlgorithm;
}
