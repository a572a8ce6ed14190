//! The closed set of geometry kinds.

use crate::bbox::BoundingBox;
use crate::error::GeometryError;
use crate::linestring::Linestring;
use crate::point::Point;
use crate::scalar::Coordinate;
use crate::segment::Segment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag naming a geometry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryKind {
    Point,
    Segment,
    Linestring,
    Box,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Segment => "segment",
            Self::Linestring => "linestring",
            Self::Box => "box",
        };
        f.write_str(name)
    }
}

/// Any supported geometry.
///
/// Points are addressed uniformly across kinds: a point has one, a segment
/// its two endpoints, a linestring its vertices, and a box its minimum and
/// maximum corners (in that order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Geometry<T: Coordinate, const D: usize> {
    Point(Point<T, D>),
    Segment(Segment<T, D>),
    Linestring(Linestring<T, D>),
    Box(BoundingBox<T, D>),
}

impl<T: Coordinate, const D: usize> Geometry<T, D> {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::Segment(_) => GeometryKind::Segment,
            Self::Linestring(_) => GeometryKind::Linestring,
            Self::Box(_) => GeometryKind::Box,
        }
    }

    #[inline]
    pub const fn dimension(&self) -> usize {
        D
    }

    pub fn num_points(&self) -> usize {
        match self {
            Self::Point(_) => 1,
            Self::Segment(_) | Self::Box(_) => 2,
            Self::Linestring(line) => line.len(),
        }
    }

    pub fn point(&self, index: usize) -> Result<&Point<T, D>, GeometryError> {
        match (self, index) {
            (Self::Point(p), 0) => Ok(p),
            (Self::Segment(s), i) => s.point(i),
            (Self::Linestring(line), i) => line.point(i),
            (Self::Box(b), 0) => Ok(b.min()),
            (Self::Box(b), 1) => Ok(b.max()),
            (_, index) => Err(GeometryError::OutOfRange {
                index,
                len: self.num_points(),
            }),
        }
    }

    pub fn envelope(&self) -> BoundingBox<T, D> {
        match self {
            Self::Point(p) => BoundingBox::from_point(*p),
            Self::Segment(s) => s.envelope(),
            Self::Linestring(line) => line.envelope(),
            Self::Box(b) => *b,
        }
    }
}

impl<T: Coordinate, const D: usize> From<Point<T, D>> for Geometry<T, D> {
    fn from(point: Point<T, D>) -> Self {
        Self::Point(point)
    }
}

impl<T: Coordinate, const D: usize> From<Segment<T, D>> for Geometry<T, D> {
    fn from(segment: Segment<T, D>) -> Self {
        Self::Segment(segment)
    }
}

impl<T: Coordinate, const D: usize> From<Linestring<T, D>> for Geometry<T, D> {
    fn from(line: Linestring<T, D>) -> Self {
        Self::Linestring(line)
    }
}

impl<T: Coordinate, const D: usize> From<BoundingBox<T, D>> for Geometry<T, D> {
    fn from(bbox: BoundingBox<T, D>) -> Self {
        Self::Box(bbox)
    }
}
