use pathbox::{
    BoundingBox, Config, Geometry, GeometryKind, Intersection, Linestring, Path, PathIndex,
    PathboxError, Point, Segment, SegmentIntersector, path_intersection, path_intersection_with,
};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tempfile_with_suffix(suffix: &str) -> NamedTempFile {
    tempfile::Builder::new().suffix(suffix).tempfile().unwrap()
}

fn p(x: f64, y: f64) -> Point<f64, 2> {
    Point::from_xy(x, y)
}

fn bbox(min: (f64, f64), max: (f64, f64)) -> BoundingBox<f64, 2> {
    BoundingBox::new(p(min.0, min.1), p(max.0, max.1)).unwrap()
}

fn line(points: &[(f64, f64)]) -> Path<f64, 2> {
    Linestring::new(points.iter().map(|&(x, y)| p(x, y)).collect())
        .unwrap()
        .into()
}

/// Counts calls and delegates to the default primitive.
struct CountingIntersector {
    calls: AtomicUsize,
}

impl SegmentIntersector<f64, 2> for CountingIntersector {
    fn intersect(
        &self,
        bbox: &BoundingBox<f64, 2>,
        a: &Point<f64, 2>,
        b: &Point<f64, 2>,
    ) -> Intersection<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        pathbox::box_segment_intersection(bbox, a, b)
    }
}

#[test]
fn test_segment_outside_unit_box() {
    init_logging();
    let b = bbox((0.0, 0.0), (1.0, 1.0));

    let segment: Path<f64, 2> = Segment::new(p(2.0, 2.0), p(3.0, 3.0)).into();
    let result = path_intersection(&b, &segment);

    assert!(!result.intersects);
    assert_eq!(result.distance, 2f64.sqrt());

    let two_points = line(&[(2.0, 2.0), (3.0, 3.0)]);
    assert_eq!(path_intersection(&b, &two_points), result);
}

#[test]
fn test_linestring_entering_box() {
    init_logging();
    let b = bbox((0.0, 0.0), (10.0, 10.0));
    let path = line(&[(20.0, 20.0), (15.0, 15.0), (5.0, 5.0)]);

    let result = path_intersection(&b, &path);

    let rel = pathbox::box_segment_intersection(&b, &p(15.0, 15.0), &p(5.0, 5.0)).distance;
    assert!((0.0..=1.0).contains(&rel));
    assert!(result.intersects);
    assert!((result.distance - (50f64.sqrt() + 200f64.sqrt() * rel)).abs() < 1e-12);
}

#[test]
fn test_short_circuit_is_observable() {
    init_logging();
    let b = bbox((0.0, 0.0), (10.0, 10.0));
    let path = line(&[
        (-10.0, 20.0),
        (-10.0, 5.0),
        (5.0, 5.0),
        (5.0, 50.0),
        (50.0, 50.0),
        (50.0, 5.0),
    ]);
    let spy = CountingIntersector {
        calls: AtomicUsize::new(0),
    };

    let result = path_intersection_with(&b, &path, &spy);

    assert!(result.intersects);
    assert_eq!(spy.calls.load(Ordering::SeqCst), 2);
    assert!((result.distance - (15.0 + 10.0)).abs() < 1e-12);
}

#[test]
fn test_missing_path_reports_total_length() {
    let b = bbox((0.0, 0.0), (1.0, 1.0));
    let points = [(3.0, 3.0), (6.0, 7.0), (6.0, 12.0), (-4.0, 12.0)];
    let path = line(&points);

    let expected: f64 = points
        .windows(2)
        .map(|w| p(w[0].0, w[0].1).distance(&p(w[1].0, w[1].1)))
        .sum();

    let result = path_intersection(&b, &path);
    assert!(!result.intersects);
    assert!((result.distance - expected).abs() < 1e-12);
    assert!((result.distance - 20.0).abs() < 1e-12);
}

#[test]
fn test_engine_is_safe_to_share_between_threads() {
    let b = bbox((0.0, 0.0), (10.0, 10.0));
    let path = line(&[(20.0, 20.0), (15.0, 15.0), (5.0, 5.0)]);
    let expected = path_intersection(&b, &path);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let result = path_intersection(&b, &path);
                    assert_eq!(result.distance.to_bits(), expected.distance.to_bits());
                }
            });
        }
    });
}

#[test]
fn test_geometry_dispatch() {
    let geometry: Geometry<f64, 2> = Segment::new(p(-1.0, 0.5), p(2.0, 0.5)).into();
    assert_eq!(geometry.kind(), GeometryKind::Segment);

    let path = Path::try_from(geometry).unwrap();
    let result = path_intersection(&bbox((0.0, 0.0), (1.0, 1.0)), &path);
    assert!(result.intersects);
    assert!((result.distance - 1.0).abs() < 1e-12);

    let not_a_path: Geometry<f64, 2> = bbox((0.0, 0.0), (1.0, 1.0)).into();
    let err: PathboxError = Path::try_from(not_a_path).unwrap_err().into();
    assert!(matches!(err, PathboxError::Geometry(_)));
}

#[test]
fn test_index_ranks_boxes_along_route() {
    init_logging();
    let mut index: PathIndex<&str> = PathIndex::new();
    index.insert("depot", bbox((0.0, 0.0), (2.0, 2.0)), "start");
    index.insert("bridge", bbox((9.0, -1.0), (11.0, 1.0)), "crossing");
    index.insert("tower", bbox((19.0, 9.0), (21.0, 11.0)), "landmark");
    index.insert("lake", bbox((40.0, 40.0), (50.0, 50.0)), "off route");

    let route = line(&[(1.0, 1.0), (10.0, 0.0), (20.0, 10.0), (30.0, 10.0)]);
    let hits = index.query_along_path(&route, 10);
    let keys: Vec<_> = hits.iter().map(|h| h.key).collect();

    assert_eq!(keys, vec!["depot", "bridge", "tower"]);
    assert_eq!(hits[0].distance, 0.0);
    assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[test]
fn test_config_loading_from_files() {
    let mut json = tempfile_with_suffix(".json");
    write!(json, r#"{{"default_limit": 5, "envelope_pruning": false}}"#).unwrap();
    let config = Config::load(json.path()).unwrap();
    assert_eq!(config.default_limit, 5);
    assert!(!config.envelope_pruning);

    let mut toml = tempfile_with_suffix(".toml");
    writeln!(toml, "default_limit = 7").unwrap();
    let config = Config::load(toml.path()).unwrap();
    assert_eq!(config.default_limit, 7);
    assert!(config.envelope_pruning);

    let yaml = tempfile_with_suffix(".yaml");
    assert!(matches!(
        Config::load(yaml.path()),
        Err(PathboxError::Config(_))
    ));

    assert!(matches!(
        Config::load("/nonexistent/pathbox.json"),
        Err(PathboxError::Io(_))
    ));
}
