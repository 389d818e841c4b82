use tiny_skia::PathSegment;

use crate::path::{Path, Point, Segment};
use crate::transform::AffineTransform;

/// Extension trait to convert a [`tiny_skia::Transform`] into an [`AffineTransform`].
pub trait TransformExt {
    fn to_affine(&self) -> AffineTransform;
}

impl TransformExt for tiny_skia::Transform {
    fn to_affine(&self) -> AffineTransform {
        AffineTransform::new(
            self.sx as f64,
            self.ky as f64,
            self.kx as f64,
            self.sy as f64,
            self.tx as f64,
            self.ty as f64,
        )
    }
}

/// Extension trait to convert a [`tiny_skia::Point`] into a [`Point`].
pub trait PointExt {
    fn to_point(&self) -> Point;
}

impl PointExt for tiny_skia::Point {
    fn to_point(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

impl From<tiny_skia::Transform> for AffineTransform {
    fn from(transform: tiny_skia::Transform) -> Self {
        transform.to_affine()
    }
}

impl AffineTransform {
    /// Convert into a `tiny-skia` transform. Coefficients are narrowed to `f32`.
    pub fn to_tiny_skia(&self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_row(
            self.a as f32,
            self.b as f32,
            self.c as f32,
            self.d as f32,
            self.e as f32,
            self.f as f32,
        )
    }
}

impl Path {
    /// Convert a `tiny-skia` path. Quadratic segments are raised to cubic ones, since
    /// paths here only know cubic curves.
    pub fn from_tiny_skia(path: &tiny_skia::Path) -> Path {
        // Taken from resvg
        fn calc(n1: f64, n2: f64) -> f64 {
            (n1 + n2 * 2.0) / 3.0
        }

        let mut result = Path::new();
        let mut p_prev: Option<Point> = None;

        for segment in path.segments() {
            match segment {
                PathSegment::MoveTo(p) => {
                    let p = p.to_point();
                    result.push(Segment::MoveTo(p));
                    p_prev = Some(p);
                }
                PathSegment::LineTo(p) => {
                    let p = p.to_point();
                    result.push(Segment::LineTo(p));
                    p_prev = Some(p);
                }
                PathSegment::QuadTo(p1, p2) => {
                    let (p1, p2) = (p1.to_point(), p2.to_point());
                    let prev = p_prev.unwrap_or(p1);
                    result.push(Segment::CurveTo(
                        Point::new(calc(prev.x, p1.x), calc(prev.y, p1.y)),
                        Point::new(calc(p2.x, p1.x), calc(p2.y, p1.y)),
                        p2,
                    ));
                    p_prev = Some(p2);
                }
                PathSegment::CubicTo(p1, p2, p3) => {
                    let p3 = p3.to_point();
                    result.push(Segment::CurveTo(p1.to_point(), p2.to_point(), p3));
                    p_prev = Some(p3);
                }
                PathSegment::Close => {
                    result.push(Segment::ClosePath);
                }
            }
        }

        result
    }

    /// Convert into a `tiny-skia` path. Points are narrowed to `f32`.
    ///
    /// Returns `None` if `tiny-skia` refuses the path, which happens for paths
    /// without any drawn segment and for points that do not fit into an `f32`.
    pub fn to_tiny_skia(&self) -> Option<tiny_skia::Path> {
        let mut builder = tiny_skia::PathBuilder::with_capacity(self.len(), self.len() * 3);

        for segment in self {
            match *segment {
                Segment::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
                Segment::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
                Segment::CurveTo(p1, p2, p3) => builder.cubic_to(
                    p1.x as f32,
                    p1.y as f32,
                    p2.x as f32,
                    p2.y as f32,
                    p3.x as f32,
                    p3.y as f32,
                ),
                Segment::ClosePath => builder.close(),
            }
        }

        let path = builder.finish();
        if path.is_none() && !self.is_empty() {
            log::warn!("dropping path of {} segments that tiny-skia cannot represent", self.len());
        }

        path
    }
}
