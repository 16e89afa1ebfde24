use crate::adapters::pixel_format::copy_depths_to_rgba;
use crate::controllers::interactive::ports::presentation_sink::PresentationSink;
use crate::core::data::frame_grid::FrameGrid;
use crate::core::data::grid_size::GridSize;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Presents frame grids through a `pixels` framebuffer the size of the grid,
/// scaled onto the window surface.
pub struct PixelsSink {
    pixels: Pixels<'static>,
}

impl PixelsSink {
    pub fn new(window: &'static Window, size: GridSize) -> Result<Self, pixels::Error> {
        let surface_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(surface_size.width, surface_size.height, window);
        let pixels = Pixels::new(size.width(), size.height(), surface_texture)?;

        Ok(Self { pixels })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

impl PresentationSink for PixelsSink {
    type Error = pixels::Error;

    fn present(&mut self, grid: &FrameGrid) -> Result<(), Self::Error> {
        copy_depths_to_rgba(grid.depths(), self.pixels.frame_mut());
        self.pixels.render()
    }
}
