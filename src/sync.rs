//! Thread-safe wrapper for sharing a path index.
//!
//! The intersection engine itself holds no state and needs no locking. This
//! module is for callers that keep a [`PathIndex`] alive across threads:
//! `SharedPathIndex` wraps it in `Arc<RwLock<_>>`, so queries run
//! concurrently while inserts and removals take exclusive access.
//!
//! # Examples
//!
//! ```rust
//! use pathbox::{BoundingBox, Path, Point, Segment, SharedPathIndex};
//! use std::thread;
//!
//! let index: SharedPathIndex<u32> = SharedPathIndex::new();
//! index.insert(
//!     "a",
//!     BoundingBox::new(Point::from_xy(0.0, 0.0), Point::from_xy(1.0, 1.0)).unwrap(),
//!     7,
//! );
//!
//! let reader = index.clone();
//! let handle = thread::spawn(move || {
//!     let path: Path<f64, 2> = Segment::new(Point::from_xy(-1.0, 0.5), Point::from_xy(2.0, 0.5)).into();
//!     reader.nearest_along_path(&path).map(|hit| hit.value)
//! });
//!
//! assert_eq!(handle.join().unwrap(), Some(7));
//! ```

use crate::compute::spatial::{Path, PathIndex, PathMatch};
use crate::config::Config;
use parking_lot::RwLock;
use pathbox_types::{BoundingBox, Coordinate};
use rstar::{Point as RstarPoint, RTreeNum};
use std::sync::Arc;

/// Cloneable, thread-safe handle to a [`PathIndex`].
///
/// Query results are returned as owned [`PathMatch`] values so no lock is
/// held once a call returns.
pub struct SharedPathIndex<V, T = f64, const D: usize = 2>
where
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    inner: Arc<RwLock<PathIndex<V, T, D>>>,
}

impl<V, T, const D: usize> Clone for SharedPathIndex<V, T, D>
where
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V, T, const D: usize> SharedPathIndex<V, T, D>
where
    V: Clone,
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    /// Creates an empty shared index with the default configuration.
    pub fn new() -> Self {
        Self::from_index(PathIndex::new())
    }

    /// Creates an empty shared index with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self::from_index(PathIndex::with_config(config))
    }

    /// Wraps an existing index.
    pub fn from_index(index: PathIndex<V, T, D>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Inserts or replaces the entry under `key`. Takes the write lock.
    pub fn insert(&self, key: impl Into<String>, bbox: BoundingBox<T, D>, value: V) -> Option<V> {
        self.inner.write().insert(key, bbox, value)
    }

    /// Removes the entry under `key`. Takes the write lock.
    pub fn remove(&self, key: &str) -> Option<V> {
        self.inner.write().remove(key)
    }

    /// Returns a copy of the box and value stored under `key`.
    pub fn get(&self, key: &str) -> Option<(BoundingBox<T, D>, V)> {
        self.inner
            .read()
            .get(key)
            .map(|(bbox, value)| (*bbox, value.clone()))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Owned form of [`PathIndex::query_along_path`].
    pub fn query_along_path(&self, path: &Path<T, D>, limit: usize) -> Vec<PathMatch<V, T, D>> {
        self.inner
            .read()
            .query_along_path(path, limit)
            .iter()
            .map(|hit| hit.to_match())
            .collect()
    }

    /// Owned form of [`PathIndex::nearest_along_path`].
    pub fn nearest_along_path(&self, path: &Path<T, D>) -> Option<PathMatch<V, T, D>> {
        self.inner
            .read()
            .nearest_along_path(path)
            .map(|hit| hit.to_match())
    }

    /// Owned form of [`PathIndex::query_intersecting`].
    pub fn query_intersecting(&self, path: &Path<T, D>) -> Vec<PathMatch<V, T, D>> {
        self.inner
            .read()
            .query_intersecting(path)
            .iter()
            .map(|hit| hit.to_match())
            .collect()
    }

    /// Run `f` with shared access to the underlying index.
    pub fn read<R>(&self, f: impl FnOnce(&PathIndex<V, T, D>) -> R) -> R {
        f(&self.inner.read())
    }
}

impl<V, T, const D: usize> Default for SharedPathIndex<V, T, D>
where
    V: Clone,
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    fn default() -> Self {
        Self::new()
    }
}
