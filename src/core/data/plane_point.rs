/// A position on the complex plane expressed as plain `(x, y)` coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        assert_eq!(PlanePoint::ORIGIN, PlanePoint::new(0.0, 0.0));
    }

    #[test]
    fn finiteness_checks_both_axes() {
        assert!(PlanePoint::new(1.0, -1.0).is_finite());
        assert!(!PlanePoint::new(f64::NAN, 0.0).is_finite());
        assert!(!PlanePoint::new(0.0, f64::INFINITY).is_finite());
    }
}
