// Exact just-intonation intervals from lattice positions.
//
// A lattice position is an exponent vector over the generators. Its interval
// is the product of `generator[k] ^ position[k]`, computed as an exact
// `BigRational` and then folded into the octave by doubling or halving.
//
// The fold checks the lower bound first, then the upper bound, and stops as
// soon as the value is in `[1, 2]`. A value that is exactly 2 (a pure power
// of two) is therefore left at 2 rather than folded to 1. Odd-prime
// generators never produce one.
//
// Evaluation is generic over the number of generators. Only the block
// geometry in `fokker_lattice` is fixed at two dimensions.
//
// Floating point appears only in `cents`, which is for display.

use crate::error::BlockError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, pow};

/// Parse a ratio such as `"5/1"`, `"81/80"` or `"3"`.
pub fn parse_ratio(s: &str) -> Result<BigRational, BlockError> {
    s.trim()
        .parse::<BigRational>()
        .map_err(|_| BlockError::InvalidRatio(s.to_string()))
}

/// The octave, 2/1.
pub fn octave() -> BigRational {
    BigRational::from_integer(BigInt::from(2))
}

/// Reject zero and negative generators.
pub fn validate_generators(generators: &[BigRational]) -> Result<(), BlockError> {
    match generators.iter().position(|g| !g.is_positive()) {
        Some(index) => Err(BlockError::NonPositiveGenerator {
            index,
            value: generators[index].to_string(),
        }),
        None => Ok(()),
    }
}

/// Fold a positive ratio into `[1, 2]` by octaves.
///
/// Non-positive values have no octave class and are returned untouched.
pub fn octave_reduce(mut value: BigRational) -> BigRational {
    if !value.is_positive() {
        return value;
    }
    let one = BigRational::one();
    let two = octave();
    loop {
        if value < one {
            value = value * &two;
        } else if value > two {
            value = value / &two;
        } else {
            return value;
        }
    }
}

/// `base ^ exponent` for any integer exponent. Negative exponents go through
/// the reciprocal, so `base` must be non-zero.
fn exact_pow(base: &BigRational, exponent: i64) -> BigRational {
    let magnitude = exponent.unsigned_abs() as usize;
    if exponent < 0 {
        pow(base.recip(), magnitude)
    } else {
        pow(base.clone(), magnitude)
    }
}

/// Octave-reduced interval of a single lattice position.
pub fn reduce(generators: &[BigRational], position: &[i64]) -> Result<BigRational, BlockError> {
    if position.len() != generators.len() {
        return Err(BlockError::InvalidDimension {
            expected: generators.len(),
            found: position.len(),
        });
    }
    validate_generators(generators)?;
    let product = generators
        .iter()
        .zip(position)
        .fold(BigRational::one(), |acc, (g, &e)| acc * exact_pow(g, e));
    Ok(octave_reduce(product))
}

/// Octave-reduced intervals of each position, in order.
pub fn reduce_all<P: AsRef<[i64]>>(
    generators: &[BigRational],
    positions: &[P],
) -> Result<Vec<BigRational>, BlockError> {
    positions
        .iter()
        .map(|position| reduce(generators, position.as_ref()))
        .collect()
}

/// Size of an interval in cents (1200 per octave).
pub fn cents(value: &BigRational) -> f64 {
    value.to_f64().map_or(f64::NAN, |v| 1200.0 * v.log2())
}
