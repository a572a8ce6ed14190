pub mod path;
pub use path::{Path, path_intersection, path_intersection_with};

pub mod rtree;
pub use rtree::{IndexStats, IndexedBox, PathHit, PathIndex, PathMatch};

pub mod segment;
pub use segment::{Intersection, SegmentIntersector, SlabIntersector, box_segment_intersection};
