// Lattice enumeration: from a comma basis to raw block intervals.
//
// Scans the integer bounding box of the block in row-major order, keeps the
// points the block contains, and evaluates each kept point's interval. The
// output is in scan order with duplicates intact; `scale.rs` owns dedup and
// sorting.

use crate::error::BlockError;
use crate::interval::reduce;
use fokker_lattice::CommaBasis;
use num_rational::BigRational;

/// Raw octave-reduced intervals of every lattice point in the block.
pub fn enumerate_block(
    generators: &[BigRational],
    basis: &CommaBasis,
    include_vertices: bool,
) -> Result<Vec<BigRational>, BlockError> {
    basis
        .parallelogram()
        .lattice_points(include_vertices)
        .into_iter()
        .map(|point| reduce(generators, &point.to_position()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fokker_lattice::LatticePoint;
    use num_bigint::BigInt;
    use num_traits::One;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn five_three() -> Vec<BigRational> {
        vec![ratio(5, 1), ratio(3, 1)]
    }

    fn classic_basis() -> CommaBasis {
        CommaBasis::new(LatticePoint::new(-1, 4), LatticePoint::new(-3, 0))
    }

    #[test]
    fn test_scan_order() {
        let raw = enumerate_block(&five_three(), &classic_basis(), false).unwrap();
        assert_eq!(raw.len(), 14);
        // First accepted point is (-3, 1): 3/125 -> 192/125.
        assert_eq!(raw[0], ratio(192, 125));
        // Last is the origin.
        assert_eq!(raw[13], BigRational::one());
    }

    #[test]
    fn test_vertices_add_commas() {
        let without = enumerate_block(&five_three(), &classic_basis(), false).unwrap();
        let with = enumerate_block(&five_three(), &classic_basis(), true).unwrap();
        assert_eq!(with.len(), without.len() + 3);
        assert!(with.contains(&ratio(81, 80)));
        assert!(with.contains(&ratio(128, 125)));
        // comma0 + comma1 = (-4, 4): 81/625 -> 648/625.
        assert!(with.contains(&ratio(648, 625)));
        assert!(!without.contains(&ratio(81, 80)));
    }

    #[test]
    fn test_wrong_generator_count() {
        let err = enumerate_block(&[ratio(3, 1)], &classic_basis(), false).unwrap_err();
        assert!(matches!(err, BlockError::InvalidDimension { expected: 1, found: 2 }));
    }

    #[test]
    fn test_degenerate_block_keeps_origin() {
        let basis = CommaBasis::new(LatticePoint::new(1, 1), LatticePoint::new(2, 2));
        let raw = enumerate_block(&five_three(), &basis, false).unwrap();
        assert_eq!(raw, vec![BigRational::one()]);
    }
}
