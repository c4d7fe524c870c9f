//! Fixed scalar inputs for the benchmark pipeline.

/// The six scalar inputs fed to a compute path: two vectors' worth of
/// components.
///
/// The harness constructs a fresh value via [`ScalarInputs::reference`]
/// before every measured batch, so no iteration can observe state left
/// behind by a prior run. Nothing in the current pipeline mutates these,
/// which makes the reset a regression guard rather than a correctness
/// requirement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalarInputs {
    /// First vector, x component.
    pub x1: f64,
    /// First vector, y component.
    pub y1: f64,
    /// First vector, z component.
    pub z1: f64,
    /// Second vector, x component.
    pub x2: f64,
    /// Second vector, y component.
    pub y2: f64,
    /// Second vector, z component.
    pub z2: f64,
}

impl ScalarInputs {
    /// The fixed reference constants used by every benchmark run.
    pub fn reference() -> Self {
        Self {
            x1: 123.4,
            y1: 234.5,
            z1: 345.6,
            x2: 456.7,
            y2: 567.8,
            z2: 678.9,
        }
    }

    /// Restore the reference constants in place.
    pub fn reset(&mut self) {
        *self = Self::reference();
    }
}

impl Default for ScalarInputs {
    fn default() -> Self {
        Self::reference()
    }
}
