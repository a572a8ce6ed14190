use crate::bbox::BoundingBox;
use crate::error::GeometryError;
use crate::point::Point;
use crate::scalar::Coordinate;
use crate::segment::Segment;
use num_traits::Zero;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Minimum number of points a linestring is made of.
pub const MIN_LINESTRING_POINTS: usize = 2;

/// An ordered chain of at least two points.
///
/// The segments between consecutive points are derived on demand and never
/// stored.
///
/// # Examples
///
/// ```
/// use pathbox_types::linestring::Linestring;
/// use pathbox_types::point::Point;
///
/// let path = Linestring::new(vec![
///     Point::from_xy(0.0, 0.0),
///     Point::from_xy(3.0, 4.0),
///     Point::from_xy(3.0, 10.0),
/// ])
/// .unwrap();
///
/// assert_eq!(path.segments().count(), 2);
/// assert_eq!(path.length(), 11.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Linestring<T: Coordinate, const D: usize> {
    points: Vec<Point<T, D>>,
}

impl<T: Coordinate, const D: usize> Linestring<T, D> {
    /// # Errors
    ///
    /// [`GeometryError::TooFewPoints`] when fewer than two points are given.
    pub fn new(points: Vec<Point<T, D>>) -> Result<Self, GeometryError> {
        if points.len() < MIN_LINESTRING_POINTS {
            return Err(GeometryError::TooFewPoints {
                required: MIN_LINESTRING_POINTS,
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[Point<T, D>] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Result<&Point<T, D>, GeometryError> {
        self.points.get(index).ok_or(GeometryError::OutOfRange {
            index,
            len: self.points.len(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed linestring.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive segments `(p[i], p[i + 1])` in index order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment<T, D>> + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
    }

    /// Sum of all segment lengths.
    pub fn length(&self) -> T::Distance {
        self.segments()
            .fold(T::Distance::zero(), |total, segment| total + segment.length())
    }

    pub fn envelope(&self) -> BoundingBox<T, D> {
        self.points[1..]
            .iter()
            .fold(BoundingBox::from_point(self.points[0]), |env, p| {
                env.expand_to_include(p)
            })
    }

    /// Consume the linestring, returning its vertices in order.
    pub fn into_points(self) -> Vec<Point<T, D>> {
        self.points
    }
}

impl<T: Coordinate, const D: usize> From<Segment<T, D>> for Linestring<T, D> {
    fn from(segment: Segment<T, D>) -> Self {
        Self {
            points: vec![*segment.first(), *segment.second()],
        }
    }
}

impl<T: Coordinate> TryFrom<geo::LineString<T>> for Linestring<T, 2> {
    type Error = GeometryError;

    fn try_from(line_string: geo::LineString<T>) -> Result<Self, Self::Error> {
        Self::new(line_string.0.into_iter().map(Point::from).collect())
    }
}

impl<T: Coordinate> From<Linestring<T, 2>> for geo::LineString<T> {
    fn from(line_string: Linestring<T, 2>) -> Self {
        line_string
            .into_points()
            .into_iter()
            .map(geo::Coord::from)
            .collect()
    }
}

impl<T: Coordinate + Serialize, const D: usize> Serialize for Linestring<T, D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.points.iter())
    }
}

impl<'de, T: Coordinate + Deserialize<'de>, const D: usize> Deserialize<'de>
    for Linestring<T, D>
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let points = Vec::<Point<T, D>>::deserialize(deserializer)?;
        Self::new(points).map_err(de::Error::custom)
    }
}
