#[cfg(test)]
mod render;

use trafo::{AffineTransform, Path, Point, Segment};

/// The tolerance used when comparing coordinates that went through floating point
/// arithmetic.
pub const EPSILON: f64 = 1e-9;

pub fn assert_point_eq(actual: Point, expected: Point, epsilon: f64) {
    assert!(
        (actual.x - expected.x).abs() <= epsilon && (actual.y - expected.y).abs() <= epsilon,
        "expected {expected:?}, got {actual:?}"
    );
}

/// Assert that two paths have the same segment kinds in the same order and that their
/// points agree within `epsilon`.
pub fn assert_path_eq(actual: &Path, expected: &Path, epsilon: f64) {
    assert_eq!(actual.len(), expected.len(), "segment count differs");

    for (index, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(a.same_kind(e), "segment {index}: expected {e:?}, got {a:?}");

        let mut actual_points = vec![];
        let mut expected_points = vec![];
        a.for_each_point(|p| actual_points.push(p));
        e.for_each_point(|p| expected_points.push(p));

        for (a, e) in actual_points.into_iter().zip(expected_points) {
            assert_point_eq(a, e, epsilon);
        }
    }
}

/// A path with every segment kind and two subpaths.
pub fn sample_path() -> Path {
    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.line_to(10.0, 0.0);
    path.curve_to(15.0, 0.0, 20.0, 5.0, 20.0, 10.0);
    path.line_to(0.0, 10.0);
    path.close_path();
    path.move_to(-3.5, 2.25);
    path.line_to(-1.0, 7.0);
    path
}

/// Transforms covering translation, scaling, rotation, shearing, mirroring and a
/// collapsing transform.
pub fn sample_transforms() -> Vec<AffineTransform> {
    vec![
        AffineTransform::identity(),
        AffineTransform::translate(5.0, -7.5),
        AffineTransform::scale(2.0, 0.5),
        AffineTransform::rotate(std::f64::consts::FRAC_PI_3),
        AffineTransform::new(1.0, 0.0, 0.75, 1.0, 0.0, 0.0),
        AffineTransform::scale(-1.0, 1.0),
        AffineTransform::new(1.0, 2.0, 2.0, 4.0, 1.0, 1.0),
    ]
}

/// Collect the kinds of all segments, dropping their points.
pub fn kinds(path: &Path) -> Vec<std::mem::Discriminant<Segment>> {
    path.iter().map(std::mem::discriminant).collect()
}
