//! Compute layer: intersection algorithms and the structures built on them.
//!
//! - [`spatial::segment`]: box/segment intersection primitive
//! - [`spatial::path`]: path/box intersection with comparable distance
//! - [`spatial::rtree`]: nearest-along-path queries over an R-tree
//!
//! Everything here is pure computation; no I/O, no shared state.

pub mod spatial;
