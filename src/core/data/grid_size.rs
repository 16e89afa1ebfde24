use thiserror::Error;

/// Smallest pixel count the interactive loop accepts.
pub const MIN_GRID_PIXELS: u64 = 1024;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GridSizeError {
    #[error("grid dimensions must be positive: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("too few pixels: {width}x{height} is below the minimum of {minimum}")]
    TooFewPixels { width: u32, height: u32, minimum: u64 },
}

/// Pixel dimensions of the frame grid: `width` columns by `height` rows,
/// flattened row-major (`index = row * width + col`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 {
            return Err(GridSizeError::ZeroDimension { width, height });
        }

        if u64::from(width) * u64::from(height) < MIN_GRID_PIXELS {
            return Err(GridSizeError::TooFewPixels {
                width,
                height,
                minimum: MIN_GRID_PIXELS,
            });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Splits a flat pixel index into `(col, row)`.
    #[must_use]
    pub fn column_row(&self, index: usize) -> (usize, usize) {
        let width = self.width as usize;
        (index % width, index / width)
    }
}

#[cfg(test)]
impl GridSize {
    pub(crate) fn index_of(&self, col: usize, row: usize) -> usize {
        row * self.width as usize + col
    }
}
