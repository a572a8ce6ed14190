//! Nearest-along-path queries over an R-tree of boxes.
//!
//! Entries are keyed axis-aligned boxes with an attached value. A query walks
//! a path and returns the entries whose boxes the path touches, ordered by
//! the comparable distance travelled along the path before reaching each box.
//!
//! ## Envelope-Based Pruning
//!
//! The path's own bounding box is used to prune the tree before the exact
//! per-entry walk: only boxes intersecting the path envelope can be touched
//! by the path, so `locate_in_envelope_intersecting` narrows the candidate
//! set in O(log n) and the path walk runs on the survivors only. Pruning can
//! be turned off through [`Config::envelope_pruning`] to compare against a
//! full scan.
//!
//! ## Example
//!
//! ```rust
//! use pathbox::{BoundingBox, Linestring, Path, PathIndex, Point};
//!
//! let mut index: PathIndex<&str> = PathIndex::new();
//! index.insert(
//!     "near",
//!     BoundingBox::new(Point::from_xy(2.0, -1.0), Point::from_xy(3.0, 1.0)).unwrap(),
//!     "first stop",
//! );
//! index.insert(
//!     "far",
//!     BoundingBox::new(Point::from_xy(8.0, -1.0), Point::from_xy(9.0, 1.0)).unwrap(),
//!     "second stop",
//! );
//!
//! let path: Path<f64, 2> = Linestring::new(vec![Point::from_xy(0.0, 0.0), Point::from_xy(10.0, 0.0)])
//!     .unwrap()
//!     .into();
//!
//! let hits = index.query_along_path(&path, 10);
//! assert_eq!(hits[0].key, "near");
//! assert_eq!(hits[1].key, "far");
//! ```

use super::path::{Path, path_intersection};
use crate::config::Config;
use pathbox_types::{BoundingBox, Coordinate};
use rstar::{AABB, Envelope, Point as RstarPoint, RTree, RTreeNum, RTreeObject, SelectionFunction};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// A keyed box stored in the R-tree.
#[derive(Debug, Clone)]
pub struct IndexedBox<V, T: Coordinate, const D: usize> {
    key: String,
    bbox: BoundingBox<T, D>,
    value: V,
}

impl<V, T: Coordinate, const D: usize> IndexedBox<V, T, D> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn bbox(&self) -> &BoundingBox<T, D> {
        &self.bbox
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V, T, const D: usize> RTreeObject for IndexedBox<V, T, D>
where
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    type Envelope = AABB<[T; D]>;

    fn envelope(&self) -> Self::Envelope {
        to_aabb(&self.bbox)
    }
}

fn to_aabb<T, const D: usize>(bbox: &BoundingBox<T, D>) -> AABB<[T; D]>
where
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    AABB::from_corners(*bbox.min().coords(), *bbox.max().coords())
}

/// Descends only into nodes that can hold `envelope` and picks the leaf
/// stored under `key`.
struct SelectByKey<'a, T, const D: usize>
where
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    envelope: AABB<[T; D]>,
    key: &'a str,
}

impl<V, T, const D: usize> SelectionFunction<IndexedBox<V, T, D>> for SelectByKey<'_, T, D>
where
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    fn should_unpack_parent(&self, envelope: &AABB<[T; D]>) -> bool {
        envelope.contains_envelope(&self.envelope)
    }

    fn should_unpack_leaf(&self, leaf: &IndexedBox<V, T, D>) -> bool {
        leaf.key == self.key
    }
}

/// A borrowed query result.
#[derive(Debug, Clone)]
pub struct PathHit<'a, V, T: Coordinate, const D: usize> {
    pub key: &'a str,
    pub bbox: &'a BoundingBox<T, D>,
    pub value: &'a V,
    /// Comparable distance along the path to the first contact with `bbox`.
    pub distance: T::Distance,
}

impl<V: Clone, T: Coordinate, const D: usize> PathHit<'_, V, T, D> {
    pub fn to_match(&self) -> PathMatch<V, T, D> {
        PathMatch {
            key: self.key.to_string(),
            bbox: *self.bbox,
            value: self.value.clone(),
            distance: self.distance,
        }
    }
}

/// An owned query result.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatch<V, T: Coordinate, const D: usize> {
    pub key: String,
    pub bbox: BoundingBox<T, D>,
    pub value: V,
    pub distance: T::Distance,
}

/// Index statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStats<T: Coordinate, const D: usize> {
    pub entries: usize,
    /// Bounds of all stored boxes, `None` when the index is empty.
    pub bounds: Option<BoundingBox<T, D>>,
}

/// R-tree of keyed boxes answering nearest-along-path queries.
pub struct PathIndex<V, T = f64, const D: usize = 2>
where
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    tree: RTree<IndexedBox<V, T, D>>,
    keys: FxHashMap<String, BoundingBox<T, D>>,
    config: Config,
}

impl<V, T, const D: usize> PathIndex<V, T, D>
where
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    /// Creates an empty index with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty index with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            tree: RTree::new(),
            keys: FxHashMap::default(),
            config,
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Insert `value` under `key`, replacing and returning any value already
    /// stored under that key.
    pub fn insert(&mut self, key: impl Into<String>, bbox: BoundingBox<T, D>, value: V) -> Option<V> {
        let key = key.into();
        let previous = self.remove(&key);

        log::debug!(
            "indexing '{}' ({})",
            key,
            if previous.is_some() { "replaced" } else { "new" }
        );

        self.keys.insert(key.clone(), bbox);
        self.tree.insert(IndexedBox { key, bbox, value });
        previous
    }

    /// Removes the entry stored under `key`, returning its value.
    ///
    /// Only tree nodes whose bounds contain the entry's box are visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathbox::{BoundingBox, PathIndex, Point};
    ///
    /// let mut index: PathIndex<u32> = PathIndex::new();
    /// let bbox = BoundingBox::new(Point::from_xy(0.0, 0.0), Point::from_xy(1.0, 1.0)).unwrap();
    /// index.insert("a", bbox, 1);
    ///
    /// assert_eq!(index.remove("a"), Some(1));
    /// assert_eq!(index.remove("a"), None);
    /// assert!(index.is_empty());
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let bbox = self.keys.remove(key)?;
        let removed = self.tree.remove_with_selection_function(SelectByKey {
            envelope: to_aabb(&bbox),
            key,
        });

        if removed.is_none() {
            log::warn!("key '{}' was tracked but missing from the tree", key);
        } else {
            log::debug!("removed '{}' from index", key);
        }
        removed.map(|entry| entry.value)
    }

    /// Returns the box and value stored under `key`.
    pub fn get(&self, key: &str) -> Option<(&BoundingBox<T, D>, &V)> {
        let bbox = self.keys.get(key)?;
        self.tree
            .locate_in_envelope(&to_aabb(bbox))
            .find(|entry| entry.key == key)
            .map(|entry| (&entry.bbox, &entry.value))
    }

    /// Returns true if an entry is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.keys.clear();
    }

    /// Iterates over all entries in tree order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexedBox<V, T, D>> {
        self.tree.iter()
    }

    /// Entry count and the bounds covering every stored box.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathbox::{BoundingBox, PathIndex, Point};
    ///
    /// let mut index: PathIndex<()> = PathIndex::new();
    /// assert_eq!(index.stats().bounds, None);
    ///
    /// index.insert("a", BoundingBox::new(Point::from_xy(0.0, 0.0), Point::from_xy(1.0, 1.0)).unwrap(), ());
    /// index.insert("b", BoundingBox::new(Point::from_xy(4.0, -2.0), Point::from_xy(5.0, 0.0)).unwrap(), ());
    ///
    /// let stats = index.stats();
    /// assert_eq!(stats.entries, 2);
    /// let bounds = stats.bounds.unwrap();
    /// assert_eq!(bounds.min(), &Point::from_xy(0.0, -2.0));
    /// assert_eq!(bounds.max(), &Point::from_xy(5.0, 1.0));
    /// ```
    pub fn stats(&self) -> IndexStats<T, D> {
        let bounds = self
            .tree
            .iter()
            .map(|entry| entry.bbox)
            .reduce(|acc, bbox| acc.merge(&bbox));

        IndexStats {
            entries: self.len(),
            bounds,
        }
    }

    /// Entries whose boxes `path` touches, nearest along the path first.
    ///
    /// Ties are broken by key so the order is deterministic. At most `limit`
    /// hits are returned.
    pub fn query_along_path(&self, path: &Path<T, D>, limit: usize) -> Vec<PathHit<'_, V, T, D>> {
        if limit == 0 {
            return Vec::new();
        }

        let mut hits = self.collect_hits(path);
        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.key.cmp(b.key))
        });
        hits.truncate(limit);

        log::debug!(
            "path query over {} segment(s) returned {} hit(s)",
            path.num_segments(),
            hits.len()
        );
        hits
    }

    /// [`PathIndex::query_along_path`] limited by [`Config::default_limit`].
    pub fn query_along_path_default(&self, path: &Path<T, D>) -> Vec<PathHit<'_, V, T, D>> {
        self.query_along_path(path, self.config.default_limit)
    }

    /// The first box the path reaches.
    pub fn nearest_along_path(&self, path: &Path<T, D>) -> Option<PathHit<'_, V, T, D>> {
        self.query_along_path(path, 1).into_iter().next()
    }

    /// Every entry whose box `path` touches, in no particular order.
    pub fn query_intersecting(&self, path: &Path<T, D>) -> Vec<PathHit<'_, V, T, D>> {
        self.collect_hits(path)
    }

    fn collect_hits(&self, path: &Path<T, D>) -> Vec<PathHit<'_, V, T, D>> {
        let hits: Vec<_> = if self.config.envelope_pruning {
            let envelope = to_aabb(&path.envelope());
            self.tree
                .locate_in_envelope_intersecting(&envelope)
                .filter_map(|entry| evaluate(entry, path))
                .collect()
        } else {
            self.tree
                .iter()
                .filter_map(|entry| evaluate(entry, path))
                .collect()
        };

        log::trace!(
            "{} of {} entries touched by path (pruning: {})",
            hits.len(),
            self.len(),
            self.config.envelope_pruning
        );
        hits
    }
}

fn evaluate<'a, V, T: Coordinate, const D: usize>(
    entry: &'a IndexedBox<V, T, D>,
    path: &Path<T, D>,
) -> Option<PathHit<'a, V, T, D>> {
    let result = path_intersection(&entry.bbox, path);
    result.intersects.then(|| PathHit {
        key: &entry.key,
        bbox: &entry.bbox,
        value: &entry.value,
        distance: result.distance,
    })
}

impl<V, T, const D: usize> Default for PathIndex<V, T, D>
where
    T: Coordinate + RTreeNum,
    [T; D]: RstarPoint<Scalar = T>,
{
    fn default() -> Self {
        Self::new()
    }
}
