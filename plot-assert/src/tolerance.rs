//! Numeric near-equality with absolute and relative tolerance.

/// Combined absolute and relative tolerance.
///
/// `a` is close to `b` when `|a - b| <= absolute + relative * |b|`. The check
/// is asymmetric in the same way: `b` is the reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute tolerance (default: 1e-5).
    pub absolute: f64,
    /// Relative tolerance (default: 1e-3).
    pub relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: 1e-5,
            relative: 1e-3,
        }
    }
}

impl Tolerance {
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Zero tolerance: only exactly equal values are close.
    pub fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Whether `a` is within tolerance of `b`.
    ///
    /// Infinities are close only to the same infinity; NaN is never close.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        (a - b).abs() <= self.absolute + self.relative * b.abs()
    }

    /// Whether both slices have the same length and are pairwise close.
    pub fn all_close(&self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.is_close(*x, *y))
    }
}
