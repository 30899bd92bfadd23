// Integer lattice coordinates.
//
// A `LatticePoint` is a position in the 2D generator lattice: `x` is the
// exponent applied to the first generator, `y` the exponent applied to the
// second. Comma vectors, parallelogram vertices, and candidate scale notes
// are all lattice points.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A point on the 2D integer lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticePoint {
    pub x: i64,
    pub y: i64,
}

impl LatticePoint {
    pub const ORIGIN: LatticePoint = LatticePoint::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The exponent vector `[x, y]` this point stands for.
    pub fn to_position(self) -> [i64; 2] {
        [self.x, self.y]
    }

    /// Z component of `(a - self) × (b - self)`.
    ///
    /// Positive when `self → a → b` turns counter-clockwise, negative when it
    /// turns clockwise, zero when the three points are collinear. Computed in
    /// `i128`; lattice coordinates stay far below the range where that matters.
    pub fn cross(self, a: LatticePoint, b: LatticePoint) -> i128 {
        let (ax, ay) = (a.x as i128 - self.x as i128, a.y as i128 - self.y as i128);
        let (bx, by) = (b.x as i128 - self.x as i128, b.y as i128 - self.y as i128);
        ax * by - ay * bx
    }
}

impl Add for LatticePoint {
    type Output = LatticePoint;

    fn add(self, other: LatticePoint) -> LatticePoint {
        LatticePoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for LatticePoint {
    type Output = LatticePoint;

    fn sub(self, other: LatticePoint) -> LatticePoint {
        LatticePoint::new(self.x - other.x, self.y - other.y)
    }
}

impl From<[i64; 2]> for LatticePoint {
    fn from(position: [i64; 2]) -> Self {
        LatticePoint::new(position[0], position[1])
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
