use crate::core::actions::fill_frame_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_grid::FrameGrid;

/// Single-threaded reference fill, in index order.
pub fn fill_frame_grid_serial<Alg: FractalAlgorithm>(grid: &mut FrameGrid, algorithm: &Alg) {
    for (index, slot) in grid.depths_mut().iter_mut().enumerate() {
        *slot = algorithm.compute(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::depth::{Depth, IN_SET};
    use crate::core::data::grid_size::GridSize;

    struct StubConstantAlgorithm(Depth);

    impl FractalAlgorithm for StubConstantAlgorithm {
        fn compute(&self, _: usize) -> Depth {
            self.0
        }
    }

    #[test]
    fn test_serial_fills_every_slot() {
        let mut grid = FrameGrid::new(GridSize::new(32, 64).unwrap());

        fill_frame_grid_serial(&mut grid, &StubConstantAlgorithm(IN_SET));

        assert_eq!(grid.len(), 2048);
        assert!(grid.depths().iter().all(|&d| d == IN_SET));
    }
}
