//! Paths stored as a flat stream of headers and points.
//!
//! Native graphics libraries usually hand out path data in this shape: every segment is
//! a header naming its kind and its length, followed by the segment's points. Since the
//! stream is just a list of elements, nothing stops it from being malformed, so every
//! consumer validates it first.

use crate::path::{Path, Point, Segment, SegmentMut, SegmentStream};
use crate::InvalidArgument;

/// Tag of a move-to segment header.
pub const MOVE_TO: u32 = 0;
/// Tag of a line-to segment header.
pub const LINE_TO: u32 = 1;
/// Tag of a curve-to segment header.
pub const CURVE_TO: u32 = 2;
/// Tag of a close-path segment header.
pub const CLOSE_PATH: u32 = 3;

/// One element of a packed path stream.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathElement {
    /// Starts a segment. `length` counts the header itself and the points after it.
    Header { tag: u32, length: usize },
    Point(Point),
}

/// A path in packed form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackedPath {
    data: Vec<PathElement>,
}

impl PackedPath {
    /// Wrap raw elements. The stream is only validated once it is used.
    pub fn from_elements(data: Vec<PathElement>) -> Self {
        Self { data }
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.data
    }

    pub fn into_elements(self) -> Vec<PathElement> {
        self.data
    }

    /// Check that the stream is well-formed.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        self.to_path().map(|_| ())
    }

    /// Decode the stream into a [`Path`].
    pub fn to_path(&self) -> Result<Path, InvalidArgument> {
        let mut data = self.data.clone();
        let segments = decode(&mut data)?;
        Ok(segments.into_iter().map(Segment::from).collect())
    }
}

impl From<&Path> for PackedPath {
    fn from(path: &Path) -> Self {
        let mut data = Vec::new();

        for segment in path {
            let (tag, length) = match segment {
                Segment::MoveTo(_) => (MOVE_TO, 2),
                Segment::LineTo(_) => (LINE_TO, 2),
                Segment::CurveTo(..) => (CURVE_TO, 4),
                Segment::ClosePath => (CLOSE_PATH, 1),
            };

            data.push(PathElement::Header { tag, length });
            segment.for_each_point(|p| data.push(PathElement::Point(p)));
        }

        Self { data }
    }
}

impl SegmentStream for PackedPath {
    fn segments_mut(&mut self) -> Result<Vec<SegmentMut<'_>>, InvalidArgument> {
        decode(&mut self.data)
    }
}

/// Split a stream into views of its segments.
///
/// Views are only collected here, nothing is written. A broken segment anywhere in the
/// stream therefore fails the call before the caller gets to touch a point.
fn decode(data: &mut [PathElement]) -> Result<Vec<SegmentMut<'_>>, InvalidArgument> {
    let mut segments = Vec::new();
    let mut rest = data;
    let mut index = 0;

    while let Some(&first) = rest.first() {
        let PathElement::Header { tag, length: declared } = first else {
            return Err(InvalidArgument::UnexpectedPoint { index });
        };

        let expected = match tag {
            MOVE_TO | LINE_TO => 2,
            CURVE_TO => 4,
            CLOSE_PATH => 1,
            _ => return Err(InvalidArgument::UnknownSegment { index, tag }),
        };

        if declared != expected {
            return Err(InvalidArgument::BadSegmentLength { index, expected, declared });
        }

        let available = expected.min(rest.len());
        let (segment, tail) = std::mem::take(&mut rest).split_at_mut(available);
        rest = tail;

        let view = match (tag, segment) {
            (MOVE_TO, [_, PathElement::Point(p)]) => SegmentMut::MoveTo(p),
            (LINE_TO, [_, PathElement::Point(p)]) => SegmentMut::LineTo(p),
            (
                CURVE_TO,
                [_, PathElement::Point(p1), PathElement::Point(p2), PathElement::Point(p3)],
            ) => SegmentMut::CurveTo(p1, p2, p3),
            (CLOSE_PATH, [_]) => SegmentMut::ClosePath,
            // The stream ended or the next header started before all points were read.
            (_, segment) => {
                let found = 1 + segment[1..]
                    .iter()
                    .take_while(|e| matches!(e, PathElement::Point(_)))
                    .count();
                return Err(InvalidArgument::TruncatedSegment { index, expected, found });
            }
        };

        segments.push(view);
        index += expected;
    }

    log::trace!("validated packed stream of {} segments", segments.len());
    Ok(segments)
}
