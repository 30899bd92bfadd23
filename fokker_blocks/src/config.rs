// Run configuration for block generation.
//
// `BlockConfig` holds everything one run needs: generators, comma rows, the
// vertex and octave flags, the output base name and the attribution line.
// It loads from JSON; any field left out takes its default, and the default
// config is the classic 5-limit block bounded by the syntonic comma (81/80)
// and the lesser diesis (128/125).
//
// Generators are written as ratio strings ("5/1", "3") in JSON and held as
// exact `BigRational`s in memory.

use crate::error::BlockError;
use crate::scale::DEFAULT_ATTRIBUTION;
use fokker_lattice::CommaBasis;
use num_bigint::BigInt;
use num_rational::BigRational;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    /// Generator ratios, one per lattice axis.
    #[serde(with = "ratio_strings")]
    pub generators: Vec<BigRational>,
    /// Comma positions, one row per comma. Must form a 2×2 matrix.
    pub commas: Vec<Vec<i64>>,
    /// Keep the non-origin block vertices (the commas themselves).
    pub include_commas: bool,
    /// Append 2/1 as the last step.
    pub include_octave: bool,
    /// Output path without the `.scl` extension.
    pub output_name: String,
    /// Text after "! Created by" on the first line.
    pub attribution: String,
}

impl Default for BlockConfig {
    fn default() -> Self {
        BlockConfig {
            generators: vec![
                BigRational::from_integer(BigInt::from(5)),
                BigRational::from_integer(BigInt::from(3)),
            ],
            commas: vec![vec![-1, 4], vec![-3, 0]],
            include_commas: false,
            include_octave: true,
            output_name: "output".to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

impl BlockConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        let config: BlockConfig = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// The comma rows as a validated basis.
    pub fn basis(&self) -> Result<CommaBasis, BlockError> {
        Ok(CommaBasis::from_rows(&self.commas)?)
    }
}

/// Serde helpers storing `Vec<BigRational>` as `["5/1", "3/2", ...]`.
mod ratio_strings {
    use crate::interval::parse_ratio;
    use num_rational::BigRational;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ratios: &[BigRational], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(ratios.iter().map(|r| r.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<BigRational>, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        strings
            .iter()
            .map(|s| parse_ratio(s).map_err(serde::de::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fokker_lattice::LatticePoint;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_default_is_classic_block() {
        let config = BlockConfig::default();
        assert_eq!(config.generators, vec![ratio(5, 1), ratio(3, 1)]);
        assert!(!config.include_commas);
        assert!(config.include_octave);
        let basis = config.basis().unwrap();
        assert_eq!(basis.comma0, LatticePoint::new(-1, 4));
        assert_eq!(basis.comma1, LatticePoint::new(-3, 0));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = BlockConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains(r#""5""#), "generators as strings: {json}");
        let restored: BlockConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "generators": ["3/2", "5/4"],
            "include_commas": true
        }"#;
        let config: BlockConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.generators, vec![ratio(3, 2), ratio(5, 4)]);
        assert!(config.include_commas);
        assert!(config.include_octave);
        assert_eq!(config.commas, vec![vec![-1, 4], vec![-3, 0]]);
        assert_eq!(config.output_name, "output");
    }

    #[test]
    fn test_bad_ratio_rejected() {
        let json = r#"{ "generators": ["5/0", "3"] }"#;
        let err = serde_json::from_str::<BlockConfig>(json).unwrap_err();
        assert!(err.to_string().contains("invalid ratio"), "{err}");
    }

    #[test]
    fn test_basis_dimension_mismatch() {
        let config = BlockConfig {
            commas: vec![vec![-1, 4, 0], vec![-3, 0, 1], vec![0, 0, 1]],
            ..Default::default()
        };
        assert!(matches!(config.basis(), Err(BlockError::DimensionMismatch(_))));
    }
}
