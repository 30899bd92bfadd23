// Fokker Lattice
//
// Exact 2D integer geometry for Fokker periodicity blocks. A block is the
// parallelogram spanned by two comma vectors with one vertex at the origin;
// every integer point it encloses becomes one note of the resulting scale.
//
// Architecture:
// - point.rs: `LatticePoint` (exponent pair) and the integer cross product
// - parallelogram.rs: `CommaBasis` validation, `Parallelogram` membership
//   predicates (vertex, edge, interior), and the integer `BoundingBox`
//
// Everything here is integer arithmetic. No floating point and no tolerances:
// a point is on an edge exactly when its cross product with that edge is zero.
//
// The interval side (generators, exact ratios, octave folding) lives in
// `fokker_blocks`, which drives this crate.

pub mod parallelogram;
pub mod point;

pub use parallelogram::{
    BoundingBox, CommaBasis, DIMENSION, DimensionMismatch, Parallelogram, Placement, bounding_box,
    contains,
};
pub use point::LatticePoint;
