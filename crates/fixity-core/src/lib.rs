//! Vector value types and compute paths for the fixity benchmarks.
//!
//! This is the leaf crate with zero dependencies. It defines two
//! structurally identical 3D vector types — [`FixedVec3`] with components
//! fixed at construction and [`OpenVec3`] with publicly writable
//! components — plus the arithmetic pipeline (cross product, then squared
//! magnitude) that the benchmark harness drives through both of them.
//!
//! Nothing in this crate ever mutates a component after construction.
//! That is deliberate: the benchmarks isolate the cost of the immutability
//! *declaration* under the optimizer, not the cost of actual mutation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod inputs;
pub mod pipeline;
pub mod vector;

pub use inputs::ScalarInputs;
pub use pipeline::{compute_with_fixed, compute_with_open};
pub use vector::{FixedVec3, OpenVec3};
