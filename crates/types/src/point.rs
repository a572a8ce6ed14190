use crate::error::GeometryError;
use crate::scalar::Coordinate;
use num_traits::{Float, Zero};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// An N-dimensional point.
///
/// The dimension is part of the type, so two points of different
/// dimensionality can never be compared or measured against each other.
///
/// # Examples
///
/// ```
/// use pathbox_types::point::Point;
///
/// let p = Point::new([1.0, 2.0, 3.0]);
/// assert_eq!(p.dimension(), 3);
/// assert_eq!(p.get(2).unwrap(), 3.0);
/// assert!(p.get(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Coordinate, const D: usize> {
    coords: [T; D],
}

/// A planar point.
pub type Point2<T = f64> = Point<T, 2>;

/// A point in three dimensions.
pub type Point3<T = f64> = Point<T, 3>;

impl<T: Coordinate, const D: usize> Point<T, D> {
    #[inline]
    pub fn new(coords: [T; D]) -> Self {
        Self { coords }
    }

    /// Number of coordinates.
    #[inline]
    pub const fn dimension(&self) -> usize {
        D
    }

    #[inline]
    pub fn coords(&self) -> &[T; D] {
        &self.coords
    }

    /// Coordinate along `axis`.
    ///
    /// Fails with [`GeometryError::OutOfRange`] when `axis >= D`.
    pub fn get(&self, axis: usize) -> Result<T, GeometryError> {
        self.coords
            .get(axis)
            .copied()
            .ok_or(GeometryError::OutOfRange { index: axis, len: D })
    }

    /// Squared Euclidean distance. Cheaper than [`Point::distance`] and
    /// ordered the same way.
    pub fn distance_squared(&self, other: &Self) -> T::Distance {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::Distance::zero(), |acc, (a, b)| {
                let delta = a.to_distance() - b.to_distance();
                acc + delta * delta
            })
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(&self, other: &Self) -> T::Distance {
        self.distance_squared(other).sqrt()
    }
}

impl<T: Coordinate> Point<T, 2> {
    #[inline]
    pub fn from_xy(x: T, y: T) -> Self {
        Self::new([x, y])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.coords[1]
    }
}

impl<T: Coordinate> Point<T, 3> {
    #[inline]
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.coords[2]
    }
}

impl<T: Coordinate, const D: usize> From<[T; D]> for Point<T, D> {
    fn from(coords: [T; D]) -> Self {
        Self::new(coords)
    }
}

impl<T: Coordinate, const D: usize> TryFrom<&[T]> for Point<T, D> {
    type Error = GeometryError;

    fn try_from(coords: &[T]) -> Result<Self, Self::Error> {
        <[T; D]>::try_from(coords)
            .map(Self::new)
            .map_err(|_| GeometryError::DimensionMismatch {
                expected: D,
                found: coords.len(),
            })
    }
}

impl<T: Coordinate> From<geo::Coord<T>> for Point<T, 2> {
    fn from(coord: geo::Coord<T>) -> Self {
        Self::from_xy(coord.x, coord.y)
    }
}

impl<T: Coordinate> From<geo::Point<T>> for Point<T, 2> {
    fn from(point: geo::Point<T>) -> Self {
        point.0.into()
    }
}

impl<T: Coordinate> From<Point<T, 2>> for geo::Coord<T> {
    fn from(point: Point<T, 2>) -> Self {
        geo::Coord {
            x: point.x(),
            y: point.y(),
        }
    }
}

impl<T: Coordinate> From<Point<T, 2>> for geo::Point<T> {
    fn from(point: Point<T, 2>) -> Self {
        geo::Point(point.into())
    }
}

// Serialized as a plain coordinate sequence, e.g. `[1.0, 2.0]`.
impl<T: Coordinate + Serialize, const D: usize> Serialize for Point<T, D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.coords.iter())
    }
}

impl<'de, T: Coordinate + Deserialize<'de>, const D: usize> Deserialize<'de> for Point<T, D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let coords = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(coords.as_slice()).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_access() {
        let p = Point::from_xyz(1.0, 2.0, 3.0);
        assert_eq!(p.get(0).unwrap(), 1.0);
        assert_eq!(p.z(), 3.0);
        assert_eq!(
            p.get(3),
            Err(GeometryError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_distance() {
        let a = Point::from_xy(0.0, 0.0);
        let b = Point::from_xy(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn test_integer_distance_is_floating() {
        let a = Point::from_xy(1i32, 1);
        let b = Point::from_xy(2i32, 2);
        let d: f64 = a.distance(&b);
        assert!((d - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_unsigned_distance_does_not_underflow() {
        let a = Point::from_xy(5u32, 0);
        let b = Point::from_xy(2u32, 4);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_try_from_slice() {
        let p: Point<f64, 3> = Point::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
        assert_eq!(p.coords(), &[1.0, 2.0, 3.0]);

        let err = Point::<f64, 3>::try_from(&[1.0, 2.0][..]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_geo_conversion() {
        let p: Point2 = geo::Point::new(-74.0, 40.7).into();
        assert_eq!(p.x(), -74.0);
        assert_eq!(p.y(), 40.7);

        let back: geo::Coord = p.into();
        assert_eq!(back, geo::coord! { x: -74.0, y: 40.7 });
    }

    #[test]
    fn test_serde_rejects_wrong_dimension() {
        let p: Point2 = serde_json::from_str("[1.0, 2.0]").unwrap();
        assert_eq!(p, Point::from_xy(1.0, 2.0));
        assert!(serde_json::from_str::<Point2>("[1.0, 2.0, 3.0]").is_err());
    }
}
