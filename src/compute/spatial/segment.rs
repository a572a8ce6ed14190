//! Box/segment intersection.
//!
//! The segment is treated as a parametric ray `a + t * (b - a)` with `t` in
//! `[0, 1]` and clipped against the box one axis (slab) at a time. The
//! surviving interval `[t_near, t_far]` tells both whether the segment touches
//! the box and how far along the segment the first contact lies.

use num_traits::{Float, One, Zero};
use pathbox_types::{BoundingBox, Coordinate, Point};

/// Outcome of testing a path or segment against a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection<F> {
    pub intersects: bool,
    /// Comparable distance; its unit depends on the producer.
    pub distance: F,
}

impl<F> Intersection<F> {
    #[inline]
    pub fn hit(distance: F) -> Self {
        Self {
            intersects: true,
            distance,
        }
    }

    #[inline]
    pub fn miss(distance: F) -> Self {
        Self {
            intersects: false,
            distance,
        }
    }
}

/// A box/segment intersection primitive.
///
/// Implementations report whether the segment from `a` to `b` touches `bbox`
/// and, on a hit, the relative position of the first contact along the
/// segment in `[0, 1]` (0 when `a` already lies inside the box).
pub trait SegmentIntersector<T: Coordinate, const D: usize> {
    fn intersect(
        &self,
        bbox: &BoundingBox<T, D>,
        a: &Point<T, D>,
        b: &Point<T, D>,
    ) -> Intersection<T::Distance>;
}

/// Slab-clipping intersector used by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlabIntersector;

impl<T: Coordinate, const D: usize> SegmentIntersector<T, D> for SlabIntersector {
    #[inline]
    fn intersect(
        &self,
        bbox: &BoundingBox<T, D>,
        a: &Point<T, D>,
        b: &Point<T, D>,
    ) -> Intersection<T::Distance> {
        box_segment_intersection(bbox, a, b)
    }
}

/// Intersect the segment `a -> b` with `bbox`.
///
/// On a hit, `distance` is the relative position in `[0, 1]` where the
/// segment first enters the box. On a miss, `distance` is `1`: the whole
/// segment was travelled without contact. Touching a face, edge or corner
/// counts as a hit.
///
/// # Examples
///
/// ```
/// use pathbox::compute::spatial::box_segment_intersection;
/// use pathbox::{BoundingBox, Point};
///
/// let bbox = BoundingBox::new(Point::from_xy(0.0, 0.0), Point::from_xy(10.0, 10.0)).unwrap();
///
/// let entering = box_segment_intersection(&bbox, &Point::from_xy(15.0, 15.0), &Point::from_xy(5.0, 5.0));
/// assert!(entering.intersects);
/// assert_eq!(entering.distance, 0.5);
///
/// let outside = box_segment_intersection(&bbox, &Point::from_xy(20.0, 20.0), &Point::from_xy(15.0, 15.0));
/// assert!(!outside.intersects);
/// ```
pub fn box_segment_intersection<T: Coordinate, const D: usize>(
    bbox: &BoundingBox<T, D>,
    a: &Point<T, D>,
    b: &Point<T, D>,
) -> Intersection<T::Distance> {
    let zero = T::Distance::zero();
    let one = T::Distance::one();

    let mut t_near = T::Distance::neg_infinity();
    let mut t_far = T::Distance::infinity();

    for axis in 0..D {
        let start = a.coords()[axis].to_distance();
        let end = b.coords()[axis].to_distance();
        let lo = bbox.min().coords()[axis].to_distance();
        let hi = bbox.max().coords()[axis].to_distance();

        let direction = end - start;
        if direction.is_zero() {
            // parallel to this slab: either always inside it or never
            if start < lo || start > hi {
                return Intersection::miss(one);
            }
            continue;
        }

        let mut t_lo = (lo - start) / direction;
        let mut t_hi = (hi - start) / direction;
        if t_hi < t_lo {
            std::mem::swap(&mut t_lo, &mut t_hi);
        }

        if t_near < t_lo {
            t_near = t_lo;
        }
        if t_hi < t_far {
            t_far = t_hi;
        }

        if t_far < zero || t_far < t_near {
            return Intersection::miss(one);
        }
    }

    if one < t_near {
        return Intersection::miss(one);
    }

    Intersection::hit(if zero < t_near { t_near } else { zero })
}
