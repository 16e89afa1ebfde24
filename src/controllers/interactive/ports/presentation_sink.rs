use crate::core::data::frame_grid::FrameGrid;

/// Displays a finished frame grid.
///
/// Depth values are non-negative or the `-1` in-set sentinel; turning them
/// into colour is up to the sink.
pub trait PresentationSink {
    type Error: std::error::Error + 'static;

    fn present(&mut self, grid: &FrameGrid) -> Result<(), Self::Error>;
}
