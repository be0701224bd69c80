//! Orbit-based spatial layout
//!
//! Maps each node's (group, orbit, slot) encoding to Cartesian coordinates
//! in the same space as group anchors. Pure and stable: no dependency on
//! enrichment or traversal, identical inputs give identical output.

pub mod engine;
pub mod orbits;

pub use engine::{layout, layout_with};
pub use orbits::OrbitTable;
