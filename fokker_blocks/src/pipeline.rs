// End-to-end block generation.
//
// config -> validated basis -> comma intervals + enumerated block intervals
// -> assembled scale. Writing the file is left to the caller so that the
// whole computation stays side-effect free.

use crate::config::BlockConfig;
use crate::enumerate::enumerate_block;
use crate::error::BlockError;
use crate::interval::{reduce_all, validate_generators};
use crate::scale::ScaleFile;
use fokker_lattice::{BoundingBox, CommaBasis};

/// Result of one generation run, with the numbers worth reporting.
#[derive(Debug, Clone)]
pub struct GeneratedBlock {
    pub basis: CommaBasis,
    pub bounding_box: BoundingBox,
    /// Lattice points accepted into the block, before dedup.
    pub accepted: usize,
    pub scale: ScaleFile,
}

pub fn generate_block(config: &BlockConfig) -> Result<GeneratedBlock, BlockError> {
    let basis = config.basis()?;
    validate_generators(&config.generators)?;

    let commas = reduce_all(&config.generators, &basis.rows())?;
    let raw = enumerate_block(&config.generators, &basis, config.include_commas)?;
    let accepted = raw.len();
    let scale = ScaleFile::assemble(commas, raw, config.include_octave)
        .with_attribution(config.attribution.clone());

    Ok(GeneratedBlock {
        basis,
        bounding_box: basis.parallelogram().bounding_box(),
        accepted,
        scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_default_run() {
        let block = generate_block(&BlockConfig::default()).unwrap();
        assert_eq!(block.accepted, 14);
        assert_eq!(block.scale.commas, vec![ratio(81, 80), ratio(128, 125)]);
        assert_eq!(block.scale.intervals.len(), 15);
        assert_eq!(block.bounding_box.point_count(), 25);
    }

    #[test]
    fn test_commas_independent_of_vertex_flag() {
        let config = BlockConfig {
            include_commas: true,
            include_octave: false,
            ..Default::default()
        };
        let block = generate_block(&config).unwrap();
        assert_eq!(block.scale.commas, vec![ratio(81, 80), ratio(128, 125)]);
        assert_eq!(block.accepted, 17);
        assert!(block.scale.intervals.contains(&ratio(81, 80)));
        assert_ne!(block.scale.intervals.last(), Some(&ratio(2, 1)));
    }

    #[test]
    fn test_errors_surface() {
        let config = BlockConfig {
            commas: vec![vec![-1, 4]],
            ..Default::default()
        };
        assert!(matches!(
            generate_block(&config),
            Err(BlockError::DimensionMismatch(_))
        ));

        let config = BlockConfig {
            generators: vec![ratio(5, 1), ratio(-3, 1)],
            ..Default::default()
        };
        assert!(matches!(
            generate_block(&config),
            Err(BlockError::NonPositiveGenerator { index: 1, .. })
        ));

        let config = BlockConfig {
            generators: vec![ratio(5, 1), ratio(3, 1), ratio(7, 1)],
            ..Default::default()
        };
        assert!(matches!(
            generate_block(&config),
            Err(BlockError::InvalidDimension { expected: 3, found: 2 })
        ));
    }
}
