//! Depth-to-pixel conversion helpers for presentation adapters.
//!
//! Each depth is written as a packed `0x00RRGGBB` integer, the way a raw
//! integer array is copied onto a 32-bit display surface. The `-1` in-set
//! sentinel therefore shows as white and small depths as shades of blue.

use crate::core::data::depth::Depth;

/// Unpacks a depth value into `[r, g, b]`.
#[must_use]
pub fn depth_to_rgb(depth: Depth) -> [u8; 3] {
    let packed = depth as u32;

    [(packed >> 16) as u8, (packed >> 8) as u8, packed as u8]
}

/// Copies depth values into an RGBA buffer, setting alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 4`.
pub fn copy_depths_to_rgba(src: &[Depth], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (&depth, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        let [r, g, b] = depth_to_rgb(depth);
        dst_pixel[0] = r;
        dst_pixel[1] = g;
        dst_pixel[2] = b;
        dst_pixel[3] = 255;
    }
}

/// Converts depth values into a tightly packed RGB byte buffer.
#[must_use]
pub fn depths_to_rgb(src: &[Depth]) -> Vec<u8> {
    src.iter().flat_map(|&depth| depth_to_rgb(depth)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::depth::IN_SET;

    #[test]
    fn test_in_set_sentinel_is_white() {
        assert_eq!(depth_to_rgb(IN_SET), [255, 255, 255]);
    }

    #[test]
    fn test_small_depths_are_blue_channel() {
        assert_eq!(depth_to_rgb(0), [0, 0, 0]);
        assert_eq!(depth_to_rgb(125), [0, 0, 125]);
    }

    #[test]
    fn test_larger_depths_spill_into_green_and_red() {
        assert_eq!(depth_to_rgb(0x01_02_03), [1, 2, 3]);
        assert_eq!(depth_to_rgb(256), [0, 1, 0]);
    }

    #[test]
    fn test_copy_depths_to_rgba_known_values() {
        let src = vec![IN_SET, 0, 7, 0x00_10_00];
        let mut dst = vec![0; src.len() * 4];

        copy_depths_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![255, 255, 255, 255, 0, 0, 0, 255, 0, 0, 7, 255, 0, 16, 0, 255]
        );
    }

    #[test]
    fn test_copy_depths_to_rgba_empty_buffers() {
        let src: Vec<Depth> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_depths_to_rgba(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_depths_to_rgba_rejects_mismatched_buffer() {
        let src = vec![1, 2];
        let mut dst = vec![0; 4];

        copy_depths_to_rgba(&src, &mut dst);
    }

    #[test]
    fn test_depths_to_rgb_packs_three_bytes_per_pixel() {
        let rgb = depths_to_rgb(&[IN_SET, 3]);

        assert_eq!(rgb, vec![255, 255, 255, 0, 0, 3]);
    }
}
