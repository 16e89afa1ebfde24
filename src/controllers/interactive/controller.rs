use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::data::frame_stats::FrameStats;
use crate::controllers::interactive::errors::{ConfigurationError, LoopError};
use crate::controllers::interactive::ports::input_source::InputSource;
use crate::controllers::interactive::ports::presentation_sink::PresentationSink;
use crate::core::actions::fill_frame_grid::fill_frame_grid_rayon::fill_frame_grid_rayon;
use crate::core::data::frame_grid::FrameGrid;
use crate::core::fractals::quartic::algorithm::QuarticAlgorithm;
use crate::core::viewport::apply::apply_commands;
use crate::core::viewport::viewport::Viewport;
use log::{debug, info};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Quitting,
}

/// Single-threaded frame loop: poll input, move the viewport, refill the
/// grid in parallel, present.
///
/// The grid is lent mutably to the fill and then immutably to the sink, so
/// the next frame never starts before the sink has returned.
pub struct InteractiveLoop<I, S>
where
    I: InputSource,
    S: PresentationSink,
{
    viewport: Viewport,
    grid: FrameGrid,
    input: I,
    sink: S,
    state: LoopState,
    stats: FrameStats,
    report_interval_frames: u64,
}

impl<I, S> InteractiveLoop<I, S>
where
    I: InputSource,
    S: PresentationSink,
{
    /// Validates `config` and builds a loop in the `Running` state.
    ///
    /// Fails with a [`ConfigurationError`] before any frame is produced when
    /// the grid is smaller than the minimum pixel count.
    pub fn new(config: &ExplorerConfig, input: I, sink: S) -> Result<Self, ConfigurationError> {
        let size = config.validate()?;
        let viewport = config.viewport();

        info!(
            "Starting explorer: {}x{} grid, center ({}, {}), zoom {}, accuracy base {}",
            size.width(),
            size.height(),
            viewport.center().x,
            viewport.center().y,
            viewport.zoom(),
            viewport.accuracy_base()
        );

        Ok(Self {
            viewport,
            grid: FrameGrid::new(size),
            input,
            sink,
            state: LoopState::Running,
            stats: FrameStats::default(),
            report_interval_frames: config.report_interval_frames,
        })
    }

    /// Runs one frame. A quit signal is honoured before any work is done, so
    /// nothing is presented after it.
    pub fn step(&mut self) -> Result<LoopState, LoopError<S::Error>> {
        if self.state == LoopState::Quitting {
            return Ok(LoopState::Quitting);
        }

        let start = Instant::now();
        let snapshot = self.input.poll();

        if snapshot.quit {
            info!("Quit requested after {} frames", self.stats.frames);
            self.state = LoopState::Quitting;
            return Ok(LoopState::Quitting);
        }

        apply_commands(&mut self.viewport, snapshot.commands);

        let max_depth = self.viewport.depth_cap();
        debug!(
            "Accuracy base {:.2}, depth cap {}",
            self.viewport.accuracy_base(),
            max_depth
        );

        let algorithm = QuarticAlgorithm::new(
            self.grid.size(),
            self.viewport.center(),
            self.viewport.zoom(),
            max_depth,
        );
        fill_frame_grid_rayon(&mut self.grid, &algorithm);

        self.sink.present(&self.grid).map_err(LoopError::Present)?;

        self.stats.record_frame(start.elapsed(), max_depth);
        if self.stats.is_report_due(self.report_interval_frames) {
            info!(
                "Frame: {} | FPS: {:.1} | Depth cap: {}",
                self.stats.frames,
                self.stats.frame_rate().unwrap_or(f64::INFINITY),
                max_depth
            );
        }

        Ok(LoopState::Running)
    }

    /// Steps until the input source asks to quit and returns the number of
    /// frames presented.
    pub fn run(&mut self) -> Result<u64, LoopError<S::Error>> {
        while self.step()? == LoopState::Running {}

        Ok(self.stats.frames)
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn grid(&self) -> &FrameGrid {
        &self.grid
    }

    #[must_use]
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
