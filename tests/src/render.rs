use pdf_writer::Content;
use trafo::{apply_transform, draw_rect, write_path, AffineTransform, Path, Point, Segment};

use crate::*;

#[test]
fn draw_rect_on_path() {
    let mut path = Path::new();
    draw_rect(&mut path, 1.0, 2.0, 3.0, 4.0);

    assert_eq!(
        path.segments(),
        &[
            Segment::MoveTo(Point::new(1.0, 2.0)),
            Segment::LineTo(Point::new(4.0, 2.0)),
            Segment::LineTo(Point::new(4.0, 6.0)),
            Segment::LineTo(Point::new(1.0, 6.0)),
            Segment::ClosePath,
        ]
    );
}

#[test]
fn draw_rect_appends_a_new_subpath() {
    let mut path = sample_path();
    draw_rect(&mut path, 0.0, 0.0, -5.0, 5.0);

    assert_eq!(path.len(), sample_path().len() + 5);
    assert_eq!(path[sample_path().len()], Segment::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(path[sample_path().len() + 1], Segment::LineTo(Point::new(-5.0, 0.0)));
}

#[test]
fn transformed_rect_matches_transformed_corners() {
    let t = AffineTransform::rotate(0.4).then(&AffineTransform::translate(3.0, -1.0));

    let mut path = Path::new();
    draw_rect(&mut path, 2.0, 3.0, 8.0, 5.0);
    apply_transform(&mut path, &t).unwrap();

    let corners = [
        Point::new(2.0, 3.0),
        Point::new(10.0, 3.0),
        Point::new(10.0, 8.0),
        Point::new(2.0, 8.0),
    ];

    let mut expected = Path::new();
    expected.push(Segment::MoveTo(t.apply(corners[0])));
    for corner in &corners[1..] {
        expected.push(Segment::LineTo(t.apply(*corner)));
    }
    expected.close_path();

    assert_path_eq(&path, &expected, EPSILON);
}

#[test]
fn draw_rect_on_tiny_skia_builder() {
    let mut builder = tiny_skia::PathBuilder::new();
    draw_rect(&mut builder, 10.0, 20.0, 30.0, 40.0);
    let path = builder.finish().unwrap();

    let bounds = path.bounds();
    assert_eq!(bounds.left(), 10.0);
    assert_eq!(bounds.top(), 20.0);
    assert_eq!(bounds.right(), 40.0);
    assert_eq!(bounds.bottom(), 60.0);
}

#[test]
fn draw_rect_on_content_stream() {
    let mut content = Content::new();
    draw_rect(&mut content, 10.0, 20.0, 30.0, 40.0);
    let stream = content.finish();

    assert_eq!(String::from_utf8_lossy(&stream).trim(), "10 20 30 40 re");
}

#[test]
fn write_path_emits_every_operator() {
    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.line_to(10.0, 0.0);
    path.curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    path.close_path();

    let mut content = Content::new();
    write_path(&path, &mut content);
    let stream = content.finish();
    let ops: Vec<&str> = std::str::from_utf8(&stream).unwrap().lines().collect();

    assert_eq!(ops, ["0 0 m", "10 0 l", "1 2 3 4 5 6 c", "h"]);
}
