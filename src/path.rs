use std::ops::Index;

use crate::transform::AffineTransform;
use crate::InvalidArgument;

/// A point in user space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A single drawing instruction of a path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    /// Begin a new subpath.
    MoveTo(Point),
    /// A straight line to the point.
    LineTo(Point),
    /// A cubic Bézier curve through two control points to an end point.
    CurveTo(Point, Point, Point),
    /// Close the current subpath.
    ClosePath,
}

impl Segment {
    /// Call `f` with every point of the segment, in order.
    pub fn for_each_point(&self, mut f: impl FnMut(Point)) {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => f(p),
            Segment::CurveTo(p1, p2, p3) => {
                f(p1);
                f(p2);
                f(p3);
            }
            Segment::ClosePath => {}
        }
    }

    /// Whether two segments are of the same kind, ignoring their points.
    pub fn same_kind(&self, other: &Segment) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// A mutable view of the points of one segment.
#[derive(Debug)]
pub enum SegmentMut<'a> {
    MoveTo(&'a mut Point),
    LineTo(&'a mut Point),
    CurveTo(&'a mut Point, &'a mut Point, &'a mut Point),
    ClosePath,
}

impl SegmentMut<'_> {
    /// Map every point of the segment through `t`, each one independently.
    pub fn apply(self, t: &AffineTransform) {
        match self {
            SegmentMut::MoveTo(p) | SegmentMut::LineTo(p) => *p = t.apply(*p),
            SegmentMut::CurveTo(p1, p2, p3) => {
                *p1 = t.apply(*p1);
                *p2 = t.apply(*p2);
                *p3 = t.apply(*p3);
            }
            SegmentMut::ClosePath => {}
        }
    }
}

impl<'a> From<&'a mut Segment> for SegmentMut<'a> {
    fn from(segment: &'a mut Segment) -> Self {
        match segment {
            Segment::MoveTo(p) => SegmentMut::MoveTo(p),
            Segment::LineTo(p) => SegmentMut::LineTo(p),
            Segment::CurveTo(p1, p2, p3) => SegmentMut::CurveTo(p1, p2, p3),
            Segment::ClosePath => SegmentMut::ClosePath,
        }
    }
}

impl From<SegmentMut<'_>> for Segment {
    fn from(segment: SegmentMut<'_>) -> Self {
        match segment {
            SegmentMut::MoveTo(p) => Segment::MoveTo(*p),
            SegmentMut::LineTo(p) => Segment::LineTo(*p),
            SegmentMut::CurveTo(p1, p2, p3) => Segment::CurveTo(*p1, *p2, *p3),
            SegmentMut::ClosePath => Segment::ClosePath,
        }
    }
}

/// Mutable access to the segment stream of a path.
///
/// Implementors validate the whole stream before handing out any view, so a caller
/// that gets `Ok` can rewrite every point without running into a malformed segment
/// halfway through.
pub trait SegmentStream {
    fn segments_mut(&mut self) -> Result<Vec<SegmentMut<'_>>, InvalidArgument>;
}

impl SegmentStream for [Segment] {
    fn segments_mut(&mut self) -> Result<Vec<SegmentMut<'_>>, InvalidArgument> {
        Ok(self.iter_mut().map(SegmentMut::from).collect())
    }
}

impl SegmentStream for Vec<Segment> {
    fn segments_mut(&mut self) -> Result<Vec<SegmentMut<'_>>, InvalidArgument> {
        self.as_mut_slice().segments_mut()
    }
}

impl SegmentStream for Path {
    fn segments_mut(&mut self) -> Result<Vec<SegmentMut<'_>>, InvalidArgument> {
        self.segments.segments_mut()
    }
}

/// The node type of a curve end point.
///
/// Editors use it to decide how the neighbouring control points move together. It has
/// no influence on the geometry of the path.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum NodeKind {
    #[default]
    Cusp,
    Smooth,
    Symmetric,
}

/// One vertex of a [`Subpath`] after its start point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Vertex {
    Line(Point),
    Curve(Point, Point, Point, NodeKind),
}

/// A nested description of one subpath: where it starts, where it goes and whether
/// it is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Subpath {
    pub start: Point,
    pub vertices: Vec<Vertex>,
    pub closed: bool,
}

/// An ordered sequence of segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path out of subpath descriptions. Each subpath starts with a move-to and
    /// ends with a close-path if it is marked as closed.
    pub fn from_subpaths(subpaths: &[Subpath]) -> Self {
        let mut path = Self::new();

        for subpath in subpaths {
            path.push(Segment::MoveTo(subpath.start));

            for vertex in &subpath.vertices {
                match *vertex {
                    Vertex::Line(p) => path.push(Segment::LineTo(p)),
                    Vertex::Curve(p1, p2, p3, _) => path.push(Segment::CurveTo(p1, p2, p3)),
                }
            }

            if subpath.closed {
                path.push(Segment::ClosePath);
            }
        }

        path
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.push(Segment::MoveTo(Point::new(x, y)));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.push(Segment::LineTo(Point::new(x, y)));
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.push(Segment::CurveTo(
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(x3, y3),
        ));
    }

    pub fn close_path(&mut self) {
        self.push(Segment::ClosePath);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// A transformed copy of the path. The path itself is left untouched.
    ///
    /// Fails like [`apply_transform`](crate::apply_transform) when `t` has a
    /// non-finite coefficient.
    pub fn transformed(&self, t: &AffineTransform) -> Result<Path, InvalidArgument> {
        let mut path = self.clone();
        crate::apply_transform(&mut path, t)?;
        Ok(path)
    }

    /// The tight axis-aligned bounds of the path.
    ///
    /// Curves contribute their end points and the extrema between them, not their
    /// control points. A move-to point only counts once a segment is drawn from it, so
    /// superseded and trailing move-tos are ignored. Returns `None` for a path that
    /// draws nothing.
    pub fn extents(&self) -> Option<Extents> {
        let mut extents: Option<Extents> = None;
        let mut include = |p: Point| {
            extents = Some(match extents {
                Some(mut e) => {
                    e.include(p);
                    e
                }
                None => Extents::from_point(p),
            });
        };

        let mut start = None;
        let mut current = None;
        let mut pending = None;

        for segment in &self.segments {
            if !matches!(segment, Segment::MoveTo(_)) {
                if let Some(p) = pending.take() {
                    include(p);
                }
            }

            match *segment {
                Segment::MoveTo(p) => {
                    pending = Some(p);
                    start = Some(p);
                    current = Some(p);
                }
                Segment::LineTo(p) => {
                    include(p);
                    current = Some(p);
                }
                Segment::CurveTo(p1, p2, p3) => {
                    // A curve without a current point starts at its first control point.
                    let p0 = current.unwrap_or(p1);
                    include(p0);
                    include(p3);
                    for t in cubic_extrema(p0, p1, p2, p3) {
                        include(cubic_eval(p0, p1, p2, p3, t));
                    }
                    current = Some(p3);
                }
                Segment::ClosePath => current = start,
            }
        }

        extents
    }
}

impl Index<usize> for Path {
    type Output = Segment;

    fn index(&self, index: usize) -> &Segment {
        &self.segments[index]
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self { segments: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// The axis-aligned bounds of a path, with `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extents {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Extents {
    /// Bounds spanning two corners given in any order.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    fn from_point(p: Point) -> Self {
        Self { x1: p.x, y1: p.y, x2: p.x, y2: p.y }
    }

    fn include(&mut self, p: Point) {
        self.x1 = self.x1.min(p.x);
        self.y1 = self.y1.min(p.y);
        self.x2 = self.x2.max(p.x);
        self.y2 = self.y2.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// The smallest bounds covering both `self` and `other`.
    pub fn union(&self, other: &Extents) -> Extents {
        Extents {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Whether `other` lies completely within `self`. Shared edges count as inside.
    pub fn contains(&self, other: &Extents) -> bool {
        self.x1 <= other.x1 && self.y1 <= other.y1 && self.x2 >= other.x2 && self.y2 >= other.y2
    }
}

/// The parameters in `(0, 1)` at which the cubic has a horizontal or vertical tangent.
fn cubic_extrema(p0: Point, p1: Point, p2: Point, p3: Point) -> Vec<f64> {
    let mut result = Vec::with_capacity(4);
    for (v0, v1, v2, v3) in [(p0.x, p1.x, p2.x, p3.x), (p0.y, p1.y, p2.y, p3.y)] {
        // The derivative divided by three is a·t² + b·t + c.
        let a = -v0 + 3.0 * v1 - 3.0 * v2 + v3;
        let b = 2.0 * (v0 - 2.0 * v1 + v2);
        let c = v1 - v0;
        solve_quadratic(a, b, c, &mut result);
    }
    result.retain(|t| *t > 0.0 && *t < 1.0);
    result
}

fn solve_quadratic(a: f64, b: f64, c: f64, roots: &mut Vec<f64>) {
    const EPSILON: f64 = 1e-12;

    if a.abs() < EPSILON {
        if b.abs() >= EPSILON {
            roots.push(-c / b);
        }
        return;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return;
    }

    let sqrt = discriminant.sqrt();
    roots.push((-b + sqrt) / (2.0 * a));
    roots.push((-b - sqrt) / (2.0 * a));
}

fn cubic_eval(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let w0 = mt * mt * mt;
    let w1 = 3.0 * mt * mt * t;
    let w2 = 3.0 * mt * t * t;
    let w3 = t * t * t;
    Point::new(
        w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
        w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
    )
}
