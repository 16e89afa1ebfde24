use crate::controllers::interactive::errors::ConfigurationError;
use crate::core::data::grid_size::GridSize;
use crate::core::data::plane_point::PlanePoint;
use crate::core::viewport::settings::ViewportSettings;
use crate::core::viewport::viewport::{DEFAULT_ACCURACY_BASE, DEFAULT_ZOOM, Viewport};

pub const WIDTH_ENV: &str = "QUARTIC_WIDTH";
pub const HEIGHT_ENV: &str = "QUARTIC_HEIGHT";
pub const FRAMES_ENV: &str = "QUARTIC_FRAMES";

const DEFAULT_HEADLESS_FRAMES: usize = 1;

/// Startup parameters for the interactive loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub center: PlanePoint,
    pub zoom: f64,
    pub accuracy_base: f64,
    pub viewport_settings: ViewportSettings,
    /// Log a frame report every this many frames; 0 disables the report.
    pub report_interval_frames: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            center: PlanePoint::ORIGIN,
            zoom: DEFAULT_ZOOM,
            accuracy_base: DEFAULT_ACCURACY_BASE,
            viewport_settings: ViewportSettings::default(),
            report_interval_frames: 50,
        }
    }
}

impl ExplorerConfig {
    /// Checks everything the loop relies on and returns the grid size.
    pub fn validate(&self) -> Result<GridSize, ConfigurationError> {
        let size = GridSize::new(self.width, self.height)?;

        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ConfigurationError::InvalidZoom(self.zoom));
        }

        if !self.center.is_finite() {
            return Err(ConfigurationError::InvalidCenter {
                x: self.center.x,
                y: self.center.y,
            });
        }

        if !self.accuracy_base.is_finite() {
            return Err(ConfigurationError::InvalidAccuracyBase(self.accuracy_base));
        }

        Ok(size)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.center, self.zoom, self.accuracy_base, self.viewport_settings)
    }

    /// Applies `QUARTIC_WIDTH` / `QUARTIC_HEIGHT` from the process
    /// environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigurationError> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(width) = parse_override(WIDTH_ENV, &lookup)? {
            self.width = width;
        }

        if let Some(height) = parse_override(HEIGHT_ENV, &lookup)? {
            self.height = height;
        }

        Ok(self)
    }
}

/// Number of frames a headless run renders, from `QUARTIC_FRAMES`.
/// Defaults to 1; zero is rejected since no frame would ever be written.
pub fn headless_frames_from_env() -> Result<usize, ConfigurationError> {
    headless_frames(|name| std::env::var(name).ok())
}

fn headless_frames<F>(lookup: F) -> Result<usize, ConfigurationError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match parse_override(FRAMES_ENV, &lookup)? {
        None => Ok(DEFAULT_HEADLESS_FRAMES),
        Some(0) => Err(ConfigurationError::InvalidEnvironmentValue {
            name: FRAMES_ENV,
            value: "0".to_string(),
        }),
        Some(frames) => Ok(frames),
    }
}

fn parse_override<T, F>(name: &'static str, lookup: &F) -> Result<Option<T>, ConfigurationError>
where
    T: std::str::FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigurationError::InvalidEnvironmentValue { name, value }),
    }
}
