/*! Apply 2D affine transforms to vector paths in place.

This crate covers a deliberately narrow slice of 2D vector graphics: rewriting the
coordinates of a path under an affine transform, reading the six coefficients out of a
transform object, and drawing rectangle subpaths onto a drawing context. Paths and
transforms from [`tiny-skia`](tiny_skia) can be converted in and out, and with the
default `pdf` feature, paths can be written into a [`pdf-writer`](pdf_writer) content
stream.

# Example
```
use trafo::{apply_transform, extract_coefficients, AffineTransform, Path, Point, Segment};

let mut path = Path::new();
path.move_to(0.0, 0.0);
path.line_to(10.0, 0.0);
path.line_to(10.0, 10.0);
path.close_path();

let t = AffineTransform::translate(5.0, 5.0);
apply_transform(&mut path, &t).unwrap();

assert_eq!(path[1], Segment::LineTo(Point::new(15.0, 5.0)));
assert_eq!(extract_coefficients(&t).unwrap(), [1.0, 0.0, 0.0, 1.0, 5.0, 5.0]);
```

# Coefficient order
Every flat coefficient array in this crate uses the order `[a, b, c, d, e, f]`, where
```text
x' = a·x + c·y + e
y' = b·x + d·y + f
```
This is the order of PDF's `cm` operator and of [`tiny_skia::Transform::from_row`].
Callers that hold arrays in the row-major order `[xx, xy, yx, yy, x0, y0]` must say so
explicitly with [`CoefficientOrder::RowMajor`].
*/

mod packed;
mod path;
mod render;
mod transform;
mod util;

use std::fmt::{self, Display, Formatter};

pub use packed::{PackedPath, PathElement, CLOSE_PATH, CURVE_TO, LINE_TO, MOVE_TO};
pub use path::{Extents, NodeKind, Path, Point, Segment, SegmentMut, SegmentStream, Subpath, Vertex};
#[cfg(feature = "pdf")]
pub use render::write_path;
pub use render::{draw_rect, DrawingContext};
pub use transform::{AffineTransform, CoefficientOrder, Matrix};
pub use util::helper::{PointExt, TransformExt};

/// Apply a transform to every point of a path in place.
///
/// Move-to and line-to points are mapped once each, the three points of a curve are
/// mapped independently and close-path segments are left alone. The path is validated
/// and the coefficients are read before anything is written, so on error the path is
/// unchanged.
pub fn apply_transform<P, M>(path: &mut P, transform: &M) -> Result<(), InvalidArgument>
where
    P: SegmentStream + ?Sized,
    M: Matrix + ?Sized,
{
    let transform = AffineTransform::from_coefficients(transform.coefficients()?)?;
    let segments = path.segments_mut()?;

    log::debug!(
        "applying {:?} to {} segments",
        transform.to_coefficients(),
        segments.len()
    );

    for segment in segments {
        segment.apply(&transform);
    }

    Ok(())
}

/// Read the six coefficients of a transform in the order `[a, b, c, d, e, f]`.
///
/// The result can be fed straight back into [`apply_transform`] or
/// [`AffineTransform::from_coefficients`].
pub fn extract_coefficients<M>(transform: &M) -> Result<[f64; 6], InvalidArgument>
where
    M: Matrix + ?Sized,
{
    let coefficients = transform.coefficients()?;
    check_finite(&coefficients)?;
    Ok(coefficients)
}

pub(crate) fn check_finite(coefficients: &[f64; 6]) -> Result<(), InvalidArgument> {
    match coefficients.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(InvalidArgument::NonFiniteCoefficient(index)),
        None => Ok(()),
    }
}

/// Error raised when a path or a transform is structurally malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A segment header carried a tag that is not a known segment kind.
    UnknownSegment { index: usize, tag: u32 },
    /// The stream ended, or the next header started, before all points of the segment
    /// were read. `found` counts the header and the points that were there.
    TruncatedSegment { index: usize, expected: usize, found: usize },
    /// A segment header declared a length that does not match its kind.
    BadSegmentLength { index: usize, expected: usize, declared: usize },
    /// A point element appeared where a segment header was expected.
    UnexpectedPoint { index: usize },
    /// A flat transform did not have exactly six coefficients.
    CoefficientCount(usize),
    /// The coefficient at this position is NaN or infinite.
    NonFiniteCoefficient(usize),
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::UnknownSegment { index, tag } => {
                write!(f, "unknown segment tag {tag} at element {index}")
            }
            Self::TruncatedSegment { index, expected, found } => write!(
                f,
                "segment at element {index} needs {expected} elements, found {found}"
            ),
            Self::BadSegmentLength { index, expected, declared } => write!(
                f,
                "segment at element {index} declares {declared} elements, its kind takes {expected}"
            ),
            Self::UnexpectedPoint { index } => {
                write!(f, "expected a segment header at element {index}, found a point")
            }
            Self::CoefficientCount(count) => {
                write!(f, "a transform needs 6 coefficients, got {count}")
            }
            Self::NonFiniteCoefficient(index) => {
                write!(f, "transform coefficient {index} is not finite")
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}
