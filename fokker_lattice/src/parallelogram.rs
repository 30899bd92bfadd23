// Periodicity block geometry.
//
// A periodicity block is the parallelogram with vertices
// `origin, comma0, comma0 + comma1, comma1`, in that order. This module
// decides, exactly, where an integer point sits relative to that shape and
// which integer points fall inside it.
//
// Membership precedence (the order matters only for vertices):
// 1. A point equal to a non-origin vertex is a `Vertex`. Whether it belongs
//    to the block is the caller's `include_vertices` choice, since these
//    vertices are the commas themselves (and their sum).
// 2. A point on any of the four sides, including the origin, is an `Edge`
//    and always belongs to the block.
// 3. Otherwise the point is `Interior` when strictly enclosed, else `Outside`.
//
// Collinear commas give a zero-area block. Nothing is enclosed strictly, so
// only the points on the degenerate sides are accepted.

use crate::point::LatticePoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lattice dimension the block geometry handles.
pub const DIMENSION: usize = 2;

/// The comma rows handed in do not form a `DIMENSION × DIMENSION` matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// Number of comma rows supplied.
    pub rows: usize,
    /// Total number of coordinates across all rows.
    pub values: usize,
    /// Length of the first row, taken as the lattice dimension.
    pub dimension: usize,
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the number of commas should match the lattice dimension: expected \
             {DIMENSION} rows of {DIMENSION} values, got {} rows with {} values \
             (first row has {})",
            self.rows, self.values, self.dimension
        )
    }
}

impl std::error::Error for DimensionMismatch {}

/// The two comma vectors spanning a periodicity block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommaBasis {
    pub comma0: LatticePoint,
    pub comma1: LatticePoint,
}

impl CommaBasis {
    pub fn new(comma0: LatticePoint, comma1: LatticePoint) -> Self {
        Self { comma0, comma1 }
    }

    /// Build a basis from comma rows as they appear in configuration.
    ///
    /// The rows must form a 2×2 matrix: the first row's length is the
    /// dimension, and the total number of values must be its square.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, DimensionMismatch> {
        let dimension = rows.first().map_or(0, Vec::len);
        let values: usize = rows.iter().map(Vec::len).sum();
        if dimension != DIMENSION || rows.len() != DIMENSION || values != dimension * dimension {
            return Err(DimensionMismatch {
                rows: rows.len(),
                values,
                dimension,
            });
        }
        Ok(Self::new(
            LatticePoint::new(rows[0][0], rows[0][1]),
            LatticePoint::new(rows[1][0], rows[1][1]),
        ))
    }

    /// The commas as exponent rows, in order.
    pub fn rows(&self) -> [[i64; 2]; 2] {
        [self.comma0.to_position(), self.comma1.to_position()]
    }

    /// Determinant of the basis, the signed area of the spanned parallelogram.
    /// Its magnitude is the number of distinct notes in the block.
    pub fn determinant(&self) -> i128 {
        LatticePoint::ORIGIN.cross(self.comma0, self.comma1)
    }

    /// True when the commas are linearly dependent.
    pub fn is_degenerate(&self) -> bool {
        self.determinant() == 0
    }

    pub fn parallelogram(&self) -> Parallelogram {
        Parallelogram::new(*self)
    }
}

/// Inclusive integer bounds covering a set of lattice points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl BoundingBox {
    /// Smallest box containing every point in `points`, starting from `first`.
    pub fn covering(first: LatticePoint, points: &[LatticePoint]) -> Self {
        points.iter().fold(
            BoundingBox {
                x_min: first.x,
                x_max: first.x,
                y_min: first.y,
                y_max: first.y,
            },
            |bb, p| BoundingBox {
                x_min: bb.x_min.min(p.x),
                x_max: bb.x_max.max(p.x),
                y_min: bb.y_min.min(p.y),
                y_max: bb.y_max.max(p.y),
            },
        )
    }

    /// Number of integer points in the box.
    pub fn point_count(&self) -> u64 {
        (self.x_max - self.x_min + 1) as u64 * (self.y_max - self.y_min + 1) as u64
    }

    /// Every integer point in the box, outer loop over `x`, inner over `y`.
    pub fn points(&self) -> impl Iterator<Item = LatticePoint> + use<> {
        let BoundingBox { x_min, x_max, y_min, y_max } = *self;
        (x_min..=x_max).flat_map(move |x| (y_min..=y_max).map(move |y| LatticePoint::new(x, y)))
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x {}..={}, y {}..={}",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

/// Where a point sits relative to a periodicity block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Exactly one of the three non-origin vertices.
    Vertex,
    /// On one of the four sides (the origin lands here).
    Edge,
    /// Strictly enclosed.
    Interior,
    Outside,
}

/// The parallelogram spanned by a `CommaBasis`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parallelogram {
    vertices: [LatticePoint; 4],
}

impl Parallelogram {
    pub fn new(basis: CommaBasis) -> Self {
        Self {
            vertices: [
                LatticePoint::ORIGIN,
                basis.comma0,
                basis.comma0 + basis.comma1,
                basis.comma1,
            ],
        }
    }

    /// Vertices in boundary order: origin, comma0, comma0 + comma1, comma1.
    pub fn vertices(&self) -> &[LatticePoint; 4] {
        &self.vertices
    }

    /// The four sides as `(start, end)` pairs, closing back to the origin.
    pub fn sides(&self) -> impl Iterator<Item = (LatticePoint, LatticePoint)> + '_ {
        (0..4).map(move |i| (self.vertices[i], self.vertices[(i + 1) % 4]))
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::covering(self.vertices[0], &self.vertices[1..])
    }

    /// Classify `point` against the block. See the module header for the
    /// precedence between vertices and edges.
    pub fn classify(&self, point: LatticePoint) -> Placement {
        if point != LatticePoint::ORIGIN && self.vertices.contains(&point) {
            return Placement::Vertex;
        }
        if self.sides().any(|(a, b)| on_segment(point, a, b)) {
            return Placement::Edge;
        }
        if self.encloses(point) {
            Placement::Interior
        } else {
            Placement::Outside
        }
    }

    /// Whether `point` belongs to the block. Non-origin vertices answer with
    /// `include_vertices`; edges and the interior always belong.
    pub fn contains(&self, point: LatticePoint, include_vertices: bool) -> bool {
        match self.classify(point) {
            Placement::Vertex => include_vertices,
            Placement::Edge | Placement::Interior => true,
            Placement::Outside => false,
        }
    }

    /// Strict interior test: the point lies on the same strict side of all
    /// four sides. Works for either winding; a zero-area block encloses nothing.
    fn encloses(&self, point: LatticePoint) -> bool {
        let mut positive = 0;
        let mut negative = 0;
        for (a, b) in self.sides() {
            match a.cross(b, point).signum() {
                1 => positive += 1,
                -1 => negative += 1,
                _ => return false,
            }
        }
        positive == 4 || negative == 4
    }

    /// Every integer point of the block, scanned over the bounding box in
    /// row-major order (outer `x`, inner `y`).
    pub fn lattice_points(&self, include_vertices: bool) -> Vec<LatticePoint> {
        self.bounding_box()
            .points()
            .filter(|&p| self.contains(p, include_vertices))
            .collect()
    }
}

/// True when `p` lies on the closed segment from `a` to `b`.
pub fn on_segment(p: LatticePoint, a: LatticePoint, b: LatticePoint) -> bool {
    a.cross(b, p) == 0
        && a.x.min(b.x) <= p.x
        && p.x <= a.x.max(b.x)
        && a.y.min(b.y) <= p.y
        && p.y <= a.y.max(b.y)
}

/// Bounding box of the block spanned by `comma0` and `comma1`.
pub fn bounding_box(comma0: LatticePoint, comma1: LatticePoint) -> BoundingBox {
    CommaBasis::new(comma0, comma1).parallelogram().bounding_box()
}

/// Whether `point` belongs to the block spanned by `comma0` and `comma1`.
pub fn contains(
    point: LatticePoint,
    comma0: LatticePoint,
    comma1: LatticePoint,
    include_vertices: bool,
) -> bool {
    CommaBasis::new(comma0, comma1)
        .parallelogram()
        .contains(point, include_vertices)
}
