use crate::error::GeometryError;
use crate::point::Point;
use crate::scalar::Coordinate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// An N-dimensional axis-aligned bounding box.
///
/// The minimum corner never exceeds the maximum corner on any axis. A box
/// whose corners coincide on an axis is valid and flat along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox<T: Coordinate, const D: usize> {
    min: Point<T, D>,
    max: Point<T, D>,
}

impl<T: Coordinate, const D: usize> BoundingBox<T, D> {
    /// Create a bounding box from its minimum and maximum corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidBox`] naming the first axis on which
    /// `min` lies above `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathbox_types::bbox::BoundingBox;
    /// use pathbox_types::point::Point;
    ///
    /// let bbox = BoundingBox::new(Point::from_xy(0.0, 0.0), Point::from_xy(10.0, 10.0)).unwrap();
    /// assert!(bbox.contains_point(&Point::from_xy(5.0, 5.0)));
    ///
    /// assert!(BoundingBox::new(Point::from_xy(1.0, 0.0), Point::from_xy(0.0, 1.0)).is_err());
    /// ```
    pub fn new(min: Point<T, D>, max: Point<T, D>) -> Result<Self, GeometryError> {
        if let Some(axis) = (0..D).find(|&axis| min.coords()[axis] > max.coords()[axis]) {
            return Err(GeometryError::InvalidBox { axis });
        }
        Ok(Self { min, max })
    }

    /// Smallest box containing both corners, in any order.
    pub fn from_corners(a: Point<T, D>, b: Point<T, D>) -> Self {
        let (a, b) = (a.coords(), b.coords());
        Self {
            min: Point::new(std::array::from_fn(|axis| partial_min(a[axis], b[axis]))),
            max: Point::new(std::array::from_fn(|axis| partial_max(a[axis], b[axis]))),
        }
    }

    /// Degenerate box covering a single point.
    pub fn from_point(point: Point<T, D>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    #[inline]
    pub fn min(&self) -> &Point<T, D> {
        &self.min
    }

    #[inline]
    pub fn max(&self) -> &Point<T, D> {
        &self.max
    }

    /// Inclusive on every face.
    pub fn contains_point(&self, point: &Point<T, D>) -> bool {
        (0..D).all(|axis| {
            let c = point.coords()[axis];
            self.min.coords()[axis] <= c && c <= self.max.coords()[axis]
        })
    }

    /// Whether the two boxes share at least one point (touching counts).
    pub fn intersects(&self, other: &Self) -> bool {
        (0..D).all(|axis| {
            self.min.coords()[axis] <= other.max.coords()[axis]
                && other.min.coords()[axis] <= self.max.coords()[axis]
        })
    }

    /// Grow the box so that it also covers `point`.
    pub fn expand_to_include(&self, point: &Point<T, D>) -> Self {
        let (min, max, p) = (self.min.coords(), self.max.coords(), point.coords());
        Self {
            min: Point::new(std::array::from_fn(|axis| partial_min(min[axis], p[axis]))),
            max: Point::new(std::array::from_fn(|axis| partial_max(max[axis], p[axis]))),
        }
    }

    /// Grow the box so that it also covers `other`.
    pub fn merge(&self, other: &Self) -> Self {
        self.expand_to_include(&other.min)
            .expand_to_include(&other.max)
    }
}

#[inline]
fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl<T: Coordinate> From<geo::Rect<T>> for BoundingBox<T, 2> {
    fn from(rect: geo::Rect<T>) -> Self {
        // geo::Rect keeps its corners ordered
        Self {
            min: rect.min().into(),
            max: rect.max().into(),
        }
    }
}

impl<T: Coordinate> From<BoundingBox<T, 2>> for geo::Rect<T> {
    fn from(bbox: BoundingBox<T, 2>) -> Self {
        geo::Rect::new(bbox.min, bbox.max)
    }
}

impl<'de, T: Coordinate + Deserialize<'de>, const D: usize> Deserialize<'de>
    for BoundingBox<T, D>
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        #[derive(Deserialize)]
        struct Corners<T: Coordinate, const D: usize> {
            min: Point<T, D>,
            max: Point<T, D>,
        }

        let corners = Corners::<T, D>::deserialize(deserializer)?;
        Self::new(corners.min, corners.max).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox<f64, 2> {
        BoundingBox::new(Point::from_xy(0.0, 0.0), Point::from_xy(1.0, 1.0)).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_axis() {
        let err = BoundingBox::new(
            Point::from_xyz(0.0, 5.0, 0.0),
            Point::from_xyz(1.0, 4.0, 1.0),
        )
        .unwrap_err();
        assert_eq!(err, GeometryError::InvalidBox { axis: 1 });
    }

    #[test]
    fn test_flat_box_is_valid() {
        let flat = BoundingBox::new(Point::from_xy(0, 3), Point::from_xy(10, 3)).unwrap();
        assert!(flat.contains_point(&Point::from_xy(4, 3)));
        assert!(!flat.contains_point(&Point::from_xy(4, 4)));
    }

    #[test]
    fn test_from_corners_normalizes() {
        let bbox = BoundingBox::from_corners(Point::from_xy(5.0, -1.0), Point::from_xy(-2.0, 3.0));
        assert_eq!(bbox.min(), &Point::from_xy(-2.0, -1.0));
        assert_eq!(bbox.max(), &Point::from_xy(5.0, 3.0));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let bbox = unit_box();
        assert!(bbox.contains_point(&Point::from_xy(0.0, 0.0)));
        assert!(bbox.contains_point(&Point::from_xy(1.0, 0.5)));
        assert!(!bbox.contains_point(&Point::from_xy(1.0001, 0.5)));
    }

    #[test]
    fn test_intersects() {
        let bbox = unit_box();
        let touching =
            BoundingBox::new(Point::from_xy(1.0, 1.0), Point::from_xy(2.0, 2.0)).unwrap();
        let apart = BoundingBox::new(Point::from_xy(3.0, 3.0), Point::from_xy(4.0, 4.0)).unwrap();

        assert!(bbox.intersects(&touching));
        assert!(touching.intersects(&bbox));
        assert!(!bbox.intersects(&apart));
    }

    #[test]
    fn test_expand_and_merge() {
        let grown = unit_box().expand_to_include(&Point::from_xy(-1.0, 3.0));
        assert_eq!(grown.min(), &Point::from_xy(-1.0, 0.0));
        assert_eq!(grown.max(), &Point::from_xy(1.0, 3.0));

        let other = BoundingBox::from_point(Point::from_xy(4.0, -2.0));
        let merged = unit_box().merge(&other);
        assert_eq!(merged.min(), &Point::from_xy(0.0, -2.0));
        assert_eq!(merged.max(), &Point::from_xy(4.0, 1.0));
    }

    #[test]
    fn test_geo_rect_conversion() {
        let rect = geo::Rect::new(geo::coord! { x: 3.0, y: 0.0 }, geo::coord! { x: 1.0, y: 2.0 });
        let bbox: BoundingBox<f64, 2> = rect.into();
        assert_eq!(bbox.min(), &Point::from_xy(1.0, 0.0));
        assert_eq!(bbox.max(), &Point::from_xy(3.0, 2.0));
    }

    #[test]
    fn test_deserialize_validates_corners() {
        let ok: BoundingBox<f64, 2> =
            serde_json::from_str(r#"{"min": [0.0, 0.0], "max": [2.0, 1.0]}"#).unwrap();
        assert_eq!(ok.max(), &Point::from_xy(2.0, 1.0));

        let bad = serde_json::from_str::<BoundingBox<f64, 2>>(
            r#"{"min": [3.0, 0.0], "max": [2.0, 1.0]}"#,
        );
        assert!(bad.is_err());
    }
}
