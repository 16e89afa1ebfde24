use crate::core::actions::fill_frame_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::depth::{Depth, IN_SET, MAX_DEPTH_CAP};
use crate::core::data::grid_size::GridSize;
use crate::core::data::plane_point::PlanePoint;
use crate::core::util::pixel_to_plane_coords::pixel_to_plane_coords;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time iteration of `z <- z^4 + c` from `z = 0`.
///
/// Returns the zero-based index of the iteration after which `|z|^2 > 4`
/// first holds, so any `c` with `|c| > 2` reports `0`. At most
/// `max_depth + 1` iterations run; an orbit that stays bounded through all
/// of them reports [`IN_SET`]. A NaN magnitude counts as escaped.
#[must_use]
pub fn escape_depth(c: Complex, max_depth: u32) -> Depth {
    let max_depth = max_depth.min(MAX_DEPTH_CAP);
    let mut z = Complex::ZERO;

    for depth in 0..=max_depth {
        z = z.fourth_power() + c;

        let magnitude_squared = z.magnitude_squared();
        if magnitude_squared > ESCAPE_RADIUS_SQUARED || magnitude_squared.is_nan() {
            return depth as Depth;
        }
    }

    IN_SET
}

/// Depth of a single pixel of a `size` grid viewed through `center`/`zoom`.
#[must_use]
pub fn evaluate(pixel_index: usize, size: GridSize, center: PlanePoint, zoom: f64, max_depth: u32) -> Depth {
    escape_depth(pixel_to_plane_coords(pixel_index, size, center, zoom), max_depth)
}

/// One frame's worth of evaluation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarticAlgorithm {
    size: GridSize,
    center: PlanePoint,
    zoom: f64,
    max_depth: u32,
}

impl QuarticAlgorithm {
    #[must_use]
    pub fn new(size: GridSize, center: PlanePoint, zoom: f64, max_depth: u32) -> Self {
        Self { size, center, zoom, max_depth }
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl FractalAlgorithm for QuarticAlgorithm {
    fn compute(&self, pixel_index: usize) -> Depth {
        evaluate(pixel_index, self.size, self.center, self.zoom, self.max_depth)
    }
}
