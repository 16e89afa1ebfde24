use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::plane_point::PlanePoint;

/// Maps a flat row-major pixel index to its point on the plane.
///
/// The grid center lands on `center`; one pixel spans `1 / zoom` plane
/// units. Columns grow along the real axis, rows along the imaginary axis.
#[must_use]
pub fn pixel_to_plane_coords(index: usize, size: GridSize, center: PlanePoint, zoom: f64) -> Complex {
    let (col, row) = size.column_row(index);
    let half_width = f64::from(size.width()) / 2.0;
    let half_height = f64::from(size.height()) / 2.0;

    Complex {
        real: (col as f64 - half_width) / zoom + center.x,
        imag: (row as f64 - half_height) / zoom + center.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> GridSize {
        GridSize::new(width, height).unwrap()
    }

    #[test]
    fn middle_pixel_maps_to_center() {
        let grid = size(64, 64);
        let center = PlanePoint::new(-0.75, 0.25);
        let index = grid.index_of(32, 32);

        assert_eq!(pixel_to_plane_coords(index, grid, center, 500.0), Complex { real: -0.75, imag: 0.25 });
    }

    #[test]
    fn top_left_pixel_is_half_a_grid_away() {
        let grid = size(64, 32);

        let c = pixel_to_plane_coords(0, grid, PlanePoint::ORIGIN, 16.0);

        assert_eq!(c, Complex { real: -2.0, imag: -1.0 });
    }

    #[test]
    fn columns_move_along_real_axis_and_rows_along_imaginary() {
        let grid = size(40, 30);
        let zoom = 10.0;
        let origin = pixel_to_plane_coords(grid.index_of(5, 5), grid, PlanePoint::ORIGIN, zoom);
        let right = pixel_to_plane_coords(grid.index_of(6, 5), grid, PlanePoint::ORIGIN, zoom);
        let below = pixel_to_plane_coords(grid.index_of(5, 6), grid, PlanePoint::ORIGIN, zoom);

        assert!((right.real - origin.real - 0.1).abs() < 1e-12);
        assert_eq!(right.imag, origin.imag);
        assert!((below.imag - origin.imag - 0.1).abs() < 1e-12);
        assert_eq!(below.real, origin.real);
    }

    #[test]
    fn odd_dimensions_use_fractional_half() {
        let grid = size(33, 33);

        let c = pixel_to_plane_coords(grid.index_of(16, 16), grid, PlanePoint::ORIGIN, 1.0);

        assert_eq!(c, Complex { real: -0.5, imag: -0.5 });
    }

    #[test]
    fn non_square_grid_uses_width_for_columns() {
        // A 128x16 grid: index 127 is the last column of the first row.
        let grid = size(128, 16);

        let c = pixel_to_plane_coords(127, grid, PlanePoint::ORIGIN, 1.0);

        assert_eq!(c, Complex { real: 63.0, imag: -8.0 });
    }
}
