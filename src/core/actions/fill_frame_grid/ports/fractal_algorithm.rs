use crate::core::data::depth::Depth;

/// Per-pixel escape-time evaluation over a flat row-major pixel index.
///
/// Implementations must be pure so pixels can be computed in any order.
pub trait FractalAlgorithm {
    fn compute(&self, pixel_index: usize) -> Depth;
}
