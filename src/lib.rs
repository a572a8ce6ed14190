//! Box/path intersection with path-weighted comparable distances.
//!
//! A path (segment or linestring) is walked against an axis-aligned box. The
//! result says whether the path touches the box and how far along the path
//! the first contact lies, which orders boxes for nearest-along-path queries
//! in a spatial index.
//!
//! ```rust
//! use pathbox::{BoundingBox, Path, Point, Segment, path_intersection};
//!
//! let bbox = BoundingBox::new(Point::from_xy(0.0, 0.0), Point::from_xy(1.0, 1.0))?;
//! let path: Path<f64, 2> = Segment::new(Point::from_xy(2.0, 2.0), Point::from_xy(3.0, 3.0)).into();
//!
//! let result = path_intersection(&bbox, &path);
//! assert!(!result.intersects);
//! assert_eq!(result.distance, 2f64.sqrt());
//! # Ok::<(), pathbox::PathboxError>(())
//! ```

pub mod compute;
pub mod config;
pub mod error;
pub mod sync;

pub use config::Config;
pub use error::{GeometryError, PathboxError, Result};

pub use pathbox_types::{
    BoundingBox, Coordinate, Geometry, GeometryKind, Linestring, Point, Point2, Point3, Segment,
};

pub use compute::spatial::{
    IndexStats, Intersection, Path, PathHit, PathIndex, PathMatch, SegmentIntersector,
    SlabIntersector, box_segment_intersection, path_intersection, path_intersection_with,
};

pub use sync::SharedPathIndex;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{PathboxError, Result};

    pub use crate::{BoundingBox, Coordinate, Linestring, Point, Segment};

    pub use crate::{Intersection, Path, path_intersection};

    pub use crate::{Config, PathIndex, SharedPathIndex};
}
