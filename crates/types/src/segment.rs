use crate::bbox::BoundingBox;
use crate::error::GeometryError;
use crate::point::Point;
use crate::scalar::Coordinate;
use serde::{Deserialize, Serialize};

/// A directed line segment from `first` to `second`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment<T: Coordinate, const D: usize> {
    first: Point<T, D>,
    second: Point<T, D>,
}

impl<T: Coordinate, const D: usize> Segment<T, D> {
    #[inline]
    pub fn new(first: Point<T, D>, second: Point<T, D>) -> Self {
        Self { first, second }
    }

    #[inline]
    pub fn first(&self) -> &Point<T, D> {
        &self.first
    }

    #[inline]
    pub fn second(&self) -> &Point<T, D> {
        &self.second
    }

    /// Endpoint by index: 0 is `first`, 1 is `second`.
    pub fn point(&self, index: usize) -> Result<&Point<T, D>, GeometryError> {
        match index {
            0 => Ok(&self.first),
            1 => Ok(&self.second),
            _ => Err(GeometryError::OutOfRange { index, len: 2 }),
        }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> T::Distance {
        self.first.distance(&self.second)
    }

    /// Same segment walked the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.second, self.first)
    }

    pub fn envelope(&self) -> BoundingBox<T, D> {
        BoundingBox::from_corners(self.first, self.second)
    }
}

impl<T: Coordinate> From<geo::Line<T>> for Segment<T, 2> {
    fn from(line: geo::Line<T>) -> Self {
        Self::new(line.start.into(), line.end.into())
    }
}

impl<T: Coordinate> From<Segment<T, 2>> for geo::Line<T> {
    fn from(segment: Segment<T, 2>) -> Self {
        geo::Line::new(segment.first, segment.second)
    }
}
