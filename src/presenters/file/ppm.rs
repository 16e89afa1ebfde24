use crate::controllers::interactive::ports::presentation_sink::PresentationSink;
use crate::core::data::frame_grid::FrameGrid;
use crate::storage::write_ppm::write_ppm_file;
use log::debug;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to write {path}: {source}")]
pub struct PpmSinkError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

/// Headless sink that writes every presented frame to one PPM file, so the
/// file always holds the most recent frame.
#[derive(Debug)]
pub struct PpmFileSink {
    path: PathBuf,
    frames_written: u64,
}

impl PpmFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            frames_written: 0,
        }
    }

    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl PresentationSink for PpmFileSink {
    type Error = PpmSinkError;

    fn present(&mut self, grid: &FrameGrid) -> Result<(), Self::Error> {
        write_ppm_file(grid, &self.path).map_err(|source| PpmSinkError {
            path: self.path.clone(),
            source,
        })?;

        self.frames_written += 1;
        debug!("Wrote frame {} to {}", self.frames_written, self.path.display());
        Ok(())
    }
}
