// Error type for block generation.
//
// Every failure in the pipeline is a caller configuration problem (wrong
// number of commas, mismatched dimensions, malformed or non-positive ratios)
// or an I/O failure while writing the scale file. None of them is
// recoverable inside the pipeline; they are surfaced to the caller as-is.

use fokker_lattice::DimensionMismatch;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum BlockError {
    /// The comma rows do not form a 2×2 matrix.
    DimensionMismatch(DimensionMismatch),
    /// A lattice position has a different length than the generator vector.
    InvalidDimension { expected: usize, found: usize },
    /// Generators must be strictly positive to be raised to negative powers
    /// and folded into an octave.
    NonPositiveGenerator { index: usize, value: String },
    /// A ratio string such as `"5/1"` could not be parsed.
    InvalidRatio(String),
    Io(io::Error),
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::DimensionMismatch(e) => write!(f, "{e}"),
            BlockError::InvalidDimension { expected, found } => write!(
                f,
                "lattice position has {found} exponents but there are {expected} generators"
            ),
            BlockError::NonPositiveGenerator { index, value } => {
                write!(f, "generator {index} must be positive, got {value}")
            }
            BlockError::InvalidRatio(s) => write!(f, "invalid ratio '{s}'"),
            BlockError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for BlockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlockError::DimensionMismatch(e) => Some(e),
            BlockError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DimensionMismatch> for BlockError {
    fn from(e: DimensionMismatch) -> Self {
        BlockError::DimensionMismatch(e)
    }
}

impl From<io::Error> for BlockError {
    fn from(e: io::Error) -> Self {
        BlockError::Io(e)
    }
}
