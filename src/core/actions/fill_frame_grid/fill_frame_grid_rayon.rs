use rayon::prelude::*;

use crate::core::actions::fill_frame_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_grid::FrameGrid;

/// Overwrites every slot of `grid` in parallel using rayon's work-stealing
/// scheduler, one task per row.
///
/// Each task writes only the row slice it was handed, so no synchronisation
/// is needed beyond the implicit join when the call returns.
pub fn fill_frame_grid_rayon<Alg>(grid: &mut FrameGrid, algorithm: &Alg)
where
    Alg: FractalAlgorithm + Sync,
{
    let width = grid.width() as usize;

    grid.depths_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, slots)| {
            let row_start = row * width;

            for (col, slot) in slots.iter_mut().enumerate() {
                *slot = algorithm.compute(row_start + col);
            }
        });
}
