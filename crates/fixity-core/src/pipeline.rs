//! The two compute paths the benchmarks compare.
//!
//! Both functions run the same pipeline — construct two vectors, cross the
//! first with the second, return the squared magnitude — and must stay
//! textually parallel. The only differences are the vector type and the
//! binding mutability.

use crate::vector::{FixedVec3, OpenVec3};

/// Compute path over [`FixedVec3`]: immutable bindings, components fixed
/// at construction.
pub fn compute_with_fixed(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> f64 {
    let v1 = FixedVec3::new(x1, y1, z1);
    let v2 = FixedVec3::new(x2, y2, z2);
    v1.cross(v2).magnitude_sq()
}

/// Compute path over [`OpenVec3`]: `mut` bindings on writable-field
/// vectors.
///
/// The bindings are declared mutable so the immutability guarantee is
/// absent from this path, but nothing ever writes through them. The
/// benchmark measures the declaration, not mutation, so do not "fix" the
/// unused `mut`s by adding writes.
#[allow(unused_mut)]
pub fn compute_with_open(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> f64 {
    let mut v1 = OpenVec3::new(x1, y1, z1);
    let mut v2 = OpenVec3::new(x2, y2, z2);
    v1.cross(v2).magnitude_sq()
}
