#[cfg(feature = "pdf")]
use pdf_writer::Content;

use crate::path::{Path, Point, Segment};

/// A drawing context that can take a rectangle subpath.
pub trait DrawingContext {
    /// Append a closed rectangle with its origin corner at `(x, y)`. A negative width
    /// or height extends the rectangle to the left or upwards.
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// Draw a rectangle path on a drawing context. This does not stroke or fill
/// anything, it only adds a subpath.
pub fn draw_rect<C>(ctx: &mut C, x: f64, y: f64, width: f64, height: f64)
where
    C: DrawingContext + ?Sized,
{
    ctx.rectangle(x, y, width, height);
}

impl DrawingContext for Path {
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let [origin, rest @ ..] = rect_corners(x, y, width, height);
        self.push(Segment::MoveTo(origin));
        for corner in rest {
            self.push(Segment::LineTo(corner));
        }
        self.push(Segment::ClosePath);
    }
}

impl DrawingContext for tiny_skia::PathBuilder {
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let [origin, rest @ ..] = rect_corners(x, y, width, height);
        self.move_to(origin.x as f32, origin.y as f32);
        for corner in rest {
            self.line_to(corner.x as f32, corner.y as f32);
        }
        self.close();
    }
}

#[cfg(feature = "pdf")]
impl DrawingContext for Content {
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.rect(x as f32, y as f32, width as f32, height as f32);
    }
}

/// The corners of a rectangle in drawing order, starting at the origin corner and
/// going along the x axis first.
fn rect_corners(x: f64, y: f64, width: f64, height: f64) -> [Point; 4] {
    [
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}

/// Writes a path into a content stream. Note that this does not perform any
/// stroking/filling, it only creates the subpaths.
#[cfg(feature = "pdf")]
pub fn write_path(path: &Path, content: &mut Content) {
    for segment in path {
        match *segment {
            Segment::MoveTo(p) => {
                content.move_to(p.x as f32, p.y as f32);
            }
            Segment::LineTo(p) => {
                content.line_to(p.x as f32, p.y as f32);
            }
            Segment::CurveTo(p1, p2, p3) => {
                content.cubic_to(
                    p1.x as f32,
                    p1.y as f32,
                    p2.x as f32,
                    p2.y as f32,
                    p3.x as f32,
                    p3.y as f32,
                );
            }
            Segment::ClosePath => {
                content.close_path();
            }
        }
    }
}
