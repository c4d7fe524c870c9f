//! The two vector value types under comparison.
//!
//! [`FixedVec3`] and [`OpenVec3`] carry identical data and identical
//! arithmetic. They differ only in field visibility: `FixedVec3` components
//! are private and assigned exactly once in [`FixedVec3::new`], while
//! `OpenVec3` components are `pub` and could be reassigned by any holder.
//! Keeping the arithmetic textually identical is what makes the benchmark
//! comparison meaningful, so any change to one type's formulas must be
//! mirrored in the other.

/// A 3D vector whose components are fixed at construction.
///
/// There is no way to reassign a component after `new`; every operation
/// consumes the value and returns a fresh one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedVec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl FixedVec3 {
    /// Construct a vector from three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Cross product `self × other`, producing a new vector.
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared magnitude: `x² + y² + z²`.
    pub fn magnitude_sq(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

/// A 3D vector with publicly writable components.
///
/// Structurally identical to [`FixedVec3`]; the `pub` fields (and the `mut`
/// bindings in the open compute path) are the only difference. No code in
/// this workspace actually mutates a component after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpenVec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl OpenVec3 {
    /// Construct a vector from three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Cross product `self × other`, producing a new vector.
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared magnitude: `x² + y² + z²`.
    pub fn magnitude_sq(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_vector_has_zero_magnitude() {
        assert_eq!(FixedVec3::new(0.0, 0.0, 0.0).magnitude_sq(), 0.0);
        assert_eq!(OpenVec3::new(0.0, 0.0, 0.0).magnitude_sq(), 0.0);
    }

    #[test]
    fn cross_with_self_is_zero() {
        let v = FixedVec3::new(123.4, 234.5, 345.6);
        assert_eq!(v.cross(v), FixedVec3::new(0.0, 0.0, 0.0));

        let w = OpenVec3::new(123.4, 234.5, 345.6);
        assert_eq!(w.cross(w), OpenVec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn reference_scenario_matches_inline_formula() {
        let a = FixedVec3::new(123.4, 234.5, 345.6);
        let b = FixedVec3::new(456.7, 567.8, 678.9);
        let c = a.cross(b);

        let expected = FixedVec3::new(
            234.5 * 678.9 - 345.6 * 567.8,
            345.6 * 456.7 - 123.4 * 678.9,
            123.4 * 567.8 - 234.5 * 456.7,
        );
        assert_eq!(c, expected);
        assert_eq!(c.magnitude_sq(), expected.magnitude_sq());
    }

    proptest! {
        /// Both types compute bit-identical cross products for the same inputs.
        #[test]
        fn fixed_and_open_cross_agree_bitwise(
            x1 in -1e150f64..1e150, y1 in -1e150f64..1e150, z1 in -1e150f64..1e150,
            x2 in -1e150f64..1e150, y2 in -1e150f64..1e150, z2 in -1e150f64..1e150,
        ) {
            let f = FixedVec3::new(x1, y1, z1).cross(FixedVec3::new(x2, y2, z2));
            let o = OpenVec3::new(x1, y1, z1).cross(OpenVec3::new(x2, y2, z2));
            prop_assert_eq!(f.x.to_bits(), o.x.to_bits());
            prop_assert_eq!(f.y.to_bits(), o.y.to_bits());
            prop_assert_eq!(f.z.to_bits(), o.z.to_bits());
            prop_assert_eq!(f.magnitude_sq().to_bits(), o.magnitude_sq().to_bits());
        }

        /// a × b == -(b × a) component-wise under exact float equality.
        ///
        /// `==` rather than `to_bits` on purpose: the negated path may
        /// produce -0.0 where the direct path produces +0.0.
        #[test]
        fn cross_is_anti_commutative(
            x1 in -1e3f64..1e3, y1 in -1e3f64..1e3, z1 in -1e3f64..1e3,
            x2 in -1e3f64..1e3, y2 in -1e3f64..1e3, z2 in -1e3f64..1e3,
        ) {
            let a = FixedVec3::new(x1, y1, z1);
            let b = FixedVec3::new(x2, y2, z2);
            let ab = a.cross(b);
            let ba = b.cross(a);
            prop_assert_eq!(ab.x, -ba.x);
            prop_assert_eq!(ab.y, -ba.y);
            prop_assert_eq!(ab.z, -ba.z);
        }
    }
}
