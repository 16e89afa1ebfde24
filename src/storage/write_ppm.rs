use std::io::Write;
use std::path::Path;

use crate::adapters::pixel_format::depths_to_rgb;
use crate::core::data::frame_grid::FrameGrid;

/// Writes `grid` as a binary (P6) PPM image.
pub fn write_ppm<W: Write>(grid: &FrameGrid, mut out: W) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", grid.width(), grid.height())?;
    writeln!(out, "255")?;
    out.write_all(&depths_to_rgb(grid.depths()))?;
    out.flush()
}

pub fn write_ppm_file(grid: &FrameGrid, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let file = std::fs::File::create(filepath)?;
    write_ppm(grid, std::io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::depth::IN_SET;
    use crate::core::data::grid_size::GridSize;

    #[test]
    fn test_write_ppm_header_and_body() {
        let size = GridSize::new(32, 32).unwrap();
        let mut grid = FrameGrid::new(size);
        grid.depths_mut()[0] = IN_SET;
        let mut out = Vec::new();

        write_ppm(&grid, &mut out).unwrap();

        let header = b"P6\n32 32\n255\n";
        assert!(out.starts_with(header));
        assert_eq!(out.len(), header.len() + 32 * 32 * 3);
        assert_eq!(&out[header.len()..header.len() + 6], &[255, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn test_write_ppm_file_creates_file() {
        let grid = FrameGrid::new(GridSize::new(64, 16).unwrap());
        let path = std::env::temp_dir().join(format!("quartic_write_ppm_{}.ppm", std::process::id()));

        write_ppm_file(&grid, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(written.starts_with(b"P6\n64 16\n255\n"));
    }
}
