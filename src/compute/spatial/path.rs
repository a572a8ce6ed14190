//! Path/box intersection with path-weighted comparable distance.
//!
//! A path (segment or linestring) is walked segment by segment against a
//! box. The returned distance accumulates the full length of every segment
//! that misses the box and, for the first segment that hits it, the length
//! scaled by the relative position of the contact. The walk stops at that
//! first hit; later segments are never tested.
//!
//! The result orders paths by how far they travel before reaching a box,
//! which is what nearest-along-path queries need. It is an approximation and
//! not a geometric distance between the path and the box.

use super::segment::{Intersection, SegmentIntersector, SlabIntersector};
use num_traits::Zero;
use pathbox_types::{
    BoundingBox, Coordinate, Geometry, GeometryError, GeometryKind, Linestring, Point, Segment,
};
use serde::{Deserialize, Serialize};

/// A geometry that can be walked against a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Path<T: Coordinate, const D: usize> {
    Segment(Segment<T, D>),
    Linestring(Linestring<T, D>),
}

impl<T: Coordinate, const D: usize> Path<T, D> {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Segment(_) => GeometryKind::Segment,
            Self::Linestring(_) => GeometryKind::Linestring,
        }
    }

    pub fn num_segments(&self) -> usize {
        match self {
            Self::Segment(_) => 1,
            Self::Linestring(line) => line.len().saturating_sub(1),
        }
    }

    /// Total Euclidean length.
    pub fn length(&self) -> T::Distance {
        match self {
            Self::Segment(segment) => segment.length(),
            Self::Linestring(line) => line.length(),
        }
    }

    pub fn envelope(&self) -> BoundingBox<T, D> {
        match self {
            Self::Segment(segment) => segment.envelope(),
            Self::Linestring(line) => line.envelope(),
        }
    }
}

impl<T: Coordinate, const D: usize> From<Segment<T, D>> for Path<T, D> {
    fn from(segment: Segment<T, D>) -> Self {
        Self::Segment(segment)
    }
}

impl<T: Coordinate, const D: usize> From<Linestring<T, D>> for Path<T, D> {
    fn from(line: Linestring<T, D>) -> Self {
        Self::Linestring(line)
    }
}

impl<T: Coordinate, const D: usize> TryFrom<Geometry<T, D>> for Path<T, D> {
    type Error = GeometryError;

    fn try_from(geometry: Geometry<T, D>) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Segment(segment) => Ok(Self::Segment(segment)),
            Geometry::Linestring(line) => Ok(Self::Linestring(line)),
            other => Err(GeometryError::NotAPath(other.kind())),
        }
    }
}

/// Test `path` against `bbox` with the default slab intersector.
///
/// Returns whether the path touches the box together with the comparable
/// distance travelled along the path: up to the first contact on a hit, the
/// whole path length on a miss.
///
/// # Examples
///
/// ```
/// use pathbox::{BoundingBox, Linestring, Path, Point, path_intersection};
///
/// let bbox = BoundingBox::new(Point::from_xy(0.0, 0.0), Point::from_xy(10.0, 10.0)).unwrap();
/// let path: Path<f64, 2> = Linestring::new(vec![
///     Point::from_xy(20.0, 20.0),
///     Point::from_xy(15.0, 15.0),
///     Point::from_xy(5.0, 5.0),
/// ])
/// .unwrap()
/// .into();
///
/// let result = path_intersection(&bbox, &path);
/// assert!(result.intersects);
/// let expected = 50f64.sqrt() + 200f64.sqrt() * 0.5;
/// assert!((result.distance - expected).abs() < 1e-12);
/// ```
#[inline]
pub fn path_intersection<T: Coordinate, const D: usize>(
    bbox: &BoundingBox<T, D>,
    path: &Path<T, D>,
) -> Intersection<T::Distance> {
    path_intersection_with(bbox, path, &SlabIntersector)
}

/// Same as [`path_intersection`] with a caller-supplied box/segment primitive.
pub fn path_intersection_with<T, const D: usize, I>(
    bbox: &BoundingBox<T, D>,
    path: &Path<T, D>,
    intersector: &I,
) -> Intersection<T::Distance>
where
    T: Coordinate,
    I: SegmentIntersector<T, D> + ?Sized,
{
    match path {
        Path::Segment(segment) => {
            segment_intersection(bbox, segment.first(), segment.second(), intersector)
        }
        Path::Linestring(line) => linestring_intersection(bbox, line.points(), intersector),
    }
}

fn segment_intersection<T, const D: usize, I>(
    bbox: &BoundingBox<T, D>,
    a: &Point<T, D>,
    b: &Point<T, D>,
    intersector: &I,
) -> Intersection<T::Distance>
where
    T: Coordinate,
    I: SegmentIntersector<T, D> + ?Sized,
{
    let length = a.distance(b);
    let contact = intersector.intersect(bbox, a, b);
    if contact.intersects {
        Intersection::hit(length * contact.distance)
    } else {
        Intersection::miss(length)
    }
}

fn linestring_intersection<T, const D: usize, I>(
    bbox: &BoundingBox<T, D>,
    points: &[Point<T, D>],
    intersector: &I,
) -> Intersection<T::Distance>
where
    T: Coordinate,
    I: SegmentIntersector<T, D> + ?Sized,
{
    debug_assert!(
        points.len() >= 2,
        "path linestring needs at least two points, got {}",
        points.len()
    );

    if let [a, b] = points {
        return segment_intersection(bbox, a, b, intersector);
    }

    let mut comparable_distance = T::Distance::zero();
    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let length = a.distance(b);
        let contact = intersector.intersect(bbox, a, b);
        if contact.intersects {
            comparable_distance = comparable_distance + length * contact.distance;
            return Intersection::hit(comparable_distance);
        }
        comparable_distance = comparable_distance + length;
    }

    Intersection::miss(comparable_distance)
}
