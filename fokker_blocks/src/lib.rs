// Fokker Periodicity Block Generator
//
// Builds a just-intonation scale from two generator ratios and two comma
// vectors. The commas span a parallelogram on the generator lattice; every
// integer point inside it is an exponent pair whose interval, folded into one
// octave, becomes a scale step. The result is written as a Scala `.scl` file.
//
// Architecture:
// - interval.rs: exact `BigRational` evaluation of lattice positions and
//   octave folding, for any number of generators
// - enumerate.rs: bounding-box scan of the block, membership filter, and
//   per-point evaluation (geometry comes from `fokker_lattice`)
// - scale.rs: exact dedup + sort, optional octave, `.scl` rendering/writing
// - config.rs: `BlockConfig`, JSON-loadable run parameters
// - pipeline.rs: config-to-scale driver used by the CLI
// - error.rs: `BlockError`
//
// All interval arithmetic is exact. Two steps are the same note only when
// their reduced fractions are equal, and ordering never goes through floats.

pub mod config;
pub mod enumerate;
pub mod error;
pub mod interval;
pub mod pipeline;
pub mod scale;
