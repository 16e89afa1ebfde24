use crate::core::data::depth::Depth;
use crate::core::data::grid_size::GridSize;

/// Per-frame buffer of depth values, one per pixel, row-major.
///
/// The length is fixed at construction; every frame overwrites the contents
/// in place.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGrid {
    size: GridSize,
    depths: Vec<Depth>,
}

impl FrameGrid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            depths: vec![0; size.area()],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    #[must_use]
    pub fn depths(&self) -> &[Depth] {
        &self.depths
    }

    pub fn depths_mut(&mut self) -> &mut [Depth] {
        &mut self.depths
    }
}

#[cfg(test)]
impl FrameGrid {
    pub(crate) fn len(&self) -> usize {
        self.depths.len()
    }

    pub(crate) fn get(&self, col: usize, row: usize) -> Option<Depth> {
        if col >= self.size.width() as usize || row >= self.size.height() as usize {
            return None;
        }

        self.depths.get(self.size.index_of(col, row)).copied()
    }
}
