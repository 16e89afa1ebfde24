/// Per-tick step sizes and clamping limits applied to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSettings {
    /// Pan distance per held tick, in screen pixels.
    pub pan_step_pixels: f64,
    pub zoom_factor: f64,
    pub accuracy_step: f64,
    pub min_accuracy_base: f64,
    pub depth_cap_scale: f64,
    pub min_depth_cap: u32,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            pan_step_pixels: 10.0,
            zoom_factor: 1.05,
            accuracy_step: 0.1,
            min_accuracy_base: 1.1,
            depth_cap_scale: 20.0,
            min_depth_cap: 1,
            min_zoom: 1e-12,
            max_zoom: 1e15,
        }
    }
}
