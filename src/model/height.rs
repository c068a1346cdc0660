//! Measured-height newtypes and the comparison tolerance.
//!
//! Layout measurements are expected to be non-negative. Out-of-contract
//! values (negative, NaN) are clamped to zero by the smart constructors
//! instead of being rejected, so every downstream comparison works on
//! well-formed numbers.

/// Clamp a raw measurement into the valid `[0, +inf]` range.
///
/// `f64::max` discards NaN, so NaN measurements also land on zero.
fn clamp_measurement(raw: f64) -> f64 {
    raw.max(0.0)
}

/// Last known height of the viewport available to the content.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ContainerHeight(f64);

impl ContainerHeight {
    /// A container that has not been laid out yet.
    pub const ZERO: Self = Self(0.0);

    /// Create a container height, clamping negative or NaN input to zero.
    pub fn new(height: f64) -> Self {
        Self(clamp_measurement(height))
    }

    /// Get the raw value in layout units.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl From<f64> for ContainerHeight {
    fn from(height: f64) -> Self {
        Self::new(height)
    }
}

/// Last known natural (unconstrained) height of the content.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ContentHeight(f64);

impl ContentHeight {
    /// Content that has not been measured yet.
    pub const ZERO: Self = Self(0.0);

    /// Create a content height, clamping negative or NaN input to zero.
    pub fn new(height: f64) -> Self {
        Self(clamp_measurement(height))
    }

    /// Get the raw value in layout units.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl From<f64> for ContentHeight {
    fn from(height: f64) -> Self {
        Self::new(height)
    }
}

/// Absolute slack used when comparing two heights.
///
/// Absorbs floating-point noise between repeated measurements of the same
/// logical size, e.g. while the host re-lays out text after a font change.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Production tolerance, in layout units.
    pub const DEFAULT: Self = Self(0.01);

    /// Get the raw value in layout units.
    pub fn get(&self) -> f64 {
        self.0
    }

    /// `|a - b| < tolerance`.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.0
    }

    /// `value > limit + tolerance`.
    pub fn exceeds(&self, value: f64, limit: f64) -> bool {
        value > limit + self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
