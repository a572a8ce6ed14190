//! # pathbox-types
//!
//! Geometry kinds used by the pathbox intersection engine.
//!
//! - **Scalars**: [`Coordinate`], the numeric coordinate types (integer or float)
//! - **Point**: [`Point`], N coordinates with the dimension fixed in the type
//! - **Segment**: [`Segment`], two ordered endpoints
//! - **Linestring**: [`Linestring`], at least two points chained into segments
//! - **Box**: [`BoundingBox`], an axis-aligned region with ordered corners
//!
//! [`Geometry`] is the closed sum over all four kinds.
//!
//! ## Examples
//!
//! ```rust
//! use pathbox_types::{BoundingBox, Point, Segment};
//!
//! let bbox = BoundingBox::new(Point::from_xy(0.0, 0.0), Point::from_xy(10.0, 10.0)).unwrap();
//! let segment = Segment::new(Point::from_xy(0.0, 0.0), Point::from_xy(3.0, 4.0));
//!
//! assert_eq!(segment.length(), 5.0);
//! assert!(bbox.contains_point(segment.second()));
//! ```

pub mod bbox;
pub mod error;
pub mod geometry;
pub mod linestring;
pub mod point;
pub mod scalar;
pub mod segment;

pub use bbox::BoundingBox;
pub use error::GeometryError;
pub use geometry::{Geometry, GeometryKind};
pub use linestring::Linestring;
pub use point::{Point, Point2, Point3};
pub use scalar::Coordinate;
pub use segment::Segment;
