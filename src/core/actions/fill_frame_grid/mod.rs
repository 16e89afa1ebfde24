pub mod fill_frame_grid_rayon;
pub mod fill_frame_grid_serial;
pub mod ports;

pub use fill_frame_grid_rayon::fill_frame_grid_rayon;
pub use fill_frame_grid_serial::fill_frame_grid_serial;
