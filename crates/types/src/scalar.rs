//! Numeric coordinate types.
//!
//! Geometries are generic over their coordinate type. Lengths and distances
//! are always computed in a floating point type: integer coordinates measure
//! in `f64`, floating coordinates keep their own precision.

use geo::{CoordFloat, CoordNum};

/// A coordinate scalar usable in pathbox geometries.
pub trait Coordinate: CoordNum {
    /// The floating point type distances between coordinates are expressed in.
    type Distance: CoordFloat;

    /// Widen the coordinate into the distance type.
    fn to_distance(self) -> Self::Distance;
}

macro_rules! impl_coordinate {
    ($($coord:ty => $dist:ty),* $(,)?) => {
        $(
            impl Coordinate for $coord {
                type Distance = $dist;

                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn to_distance(self) -> $dist {
                    self as $dist
                }
            }
        )*
    };
}

impl_coordinate!(
    i16 => f64,
    i32 => f64,
    i64 => f64,
    u16 => f64,
    u32 => f64,
    f32 => f32,
    f64 => f64,
);
