use crate::core::data::depth::MAX_DEPTH_CAP;
use crate::core::data::plane_point::PlanePoint;
use crate::core::viewport::settings::ViewportSettings;

pub const DEFAULT_ZOOM: f64 = 500.0;
pub const DEFAULT_ACCURACY_BASE: f64 = 2.7;

/// Camera state mapping the pixel grid onto the plane.
///
/// `zoom` is pixels per unit length and always lies within the settings'
/// zoom range; `accuracy_base` never drops below `min_accuracy_base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: PlanePoint,
    zoom: f64,
    accuracy_base: f64,
    settings: ViewportSettings,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            PlanePoint::ORIGIN,
            DEFAULT_ZOOM,
            DEFAULT_ACCURACY_BASE,
            ViewportSettings::default(),
        )
    }
}

impl Viewport {
    #[must_use]
    pub fn new(
        center: PlanePoint,
        zoom: f64,
        accuracy_base: f64,
        settings: ViewportSettings,
    ) -> Self {
        let accuracy_base = if accuracy_base.is_nan() {
            settings.min_accuracy_base
        } else {
            accuracy_base.max(settings.min_accuracy_base)
        };

        let mut viewport = Self {
            center,
            zoom: settings.min_zoom,
            accuracy_base,
            settings,
        };

        viewport.set_zoom(zoom);
        viewport
    }

    #[must_use]
    pub fn center(&self) -> PlanePoint {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn accuracy_base(&self) -> f64 {
        self.accuracy_base
    }

    #[must_use]
    pub fn settings(&self) -> &ViewportSettings {
        &self.settings
    }

    /// Moves the center by a screen-space offset, so on-screen speed is the
    /// same at every zoom level.
    /// Pans by a pixel delta measured at `zoom`, which may differ from the
    /// current zoom when a zoom was applied earlier in the same frame.
    pub fn pan_at_zoom(&mut self, dx: f64, dy: f64, zoom: f64) {
        let moved = PlanePoint::new(self.center.x + dx / zoom, self.center.y + dy / zoom);

        if moved.is_finite() {
            self.center = moved;
        }
    }

    pub fn zoom_in(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.set_zoom(self.zoom * factor);
        }
    }

    pub fn zoom_out(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.set_zoom(self.zoom / factor);
        }
    }

    pub fn adjust_accuracy(&mut self, delta: f64) {
        let adjusted = self.accuracy_base + delta;

        self.accuracy_base = if adjusted.is_nan() {
            self.accuracy_base
        } else {
            adjusted.max(self.settings.min_accuracy_base)
        };
    }

    /// `floor(scale * ln(zoom) / ln(accuracy_base))`, never below the
    /// configured floor. Zoom levels at or below 1 give a non-positive
    /// logarithm and fall back to the floor.
    #[must_use]
    pub fn depth_cap(&self) -> u32 {
        let floor_cap = self.settings.min_depth_cap.max(1);
        let cap = self.settings.depth_cap_scale * self.zoom.ln() / self.accuracy_base.ln();

        if cap.is_nan() || cap < f64::from(floor_cap) {
            return floor_cap;
        }

        if cap >= f64::from(MAX_DEPTH_CAP) {
            return MAX_DEPTH_CAP;
        }

        cap.floor() as u32
    }

    fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_nan() {
            return;
        }

        self.zoom = zoom.clamp(self.settings.min_zoom, self.settings.max_zoom);
    }
}
