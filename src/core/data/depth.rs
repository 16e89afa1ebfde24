/// Escape depth of a single pixel: the iteration index at which the orbit
/// escaped, or [`IN_SET`] when it never did within the depth cap.
pub type Depth = i32;

/// Sentinel depth for points that did not escape.
pub const IN_SET: Depth = -1;

/// Largest depth cap whose depths still fit a [`Depth`].
pub const MAX_DEPTH_CAP: u32 = Depth::MAX as u32;

/// Returns true when `depth` is [`IN_SET`] or lies in `[0, max_depth]`.
#[cfg(test)]
pub(crate) fn is_valid_depth(depth: Depth, max_depth: u32) -> bool {
    depth == IN_SET || (depth >= 0 && (depth as u32) <= max_depth)
}
