pub mod complex;
pub mod depth;
pub mod frame_grid;
pub mod grid_size;
pub mod plane_point;
