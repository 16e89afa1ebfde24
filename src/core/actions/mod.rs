pub mod fill_frame_grid;
