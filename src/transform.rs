use crate::path::Point;
use crate::{check_finite, InvalidArgument};

/// A 2D affine transform.
///
/// A point `(x, y)` is mapped to
/// ```text
/// x' = a·x + c·y + e
/// y' = b·x + d·y + f
/// ```
/// A transform does not need to be invertible: collapsing (zero determinant) and
/// mirroring (negative determinant) transforms are perfectly valid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

/// How the six entries of a flat coefficient array are laid out.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum CoefficientOrder {
    /// `[a, b, c, d, e, f]`, the order used throughout this crate, by PDF and by
    /// `tiny-skia`.
    #[default]
    Standard,
    /// `[xx, xy, yx, yy, x0, y0]`, i.e. the matrix read row by row. The two
    /// off-diagonal entries are swapped relative to [`CoefficientOrder::Standard`].
    RowMajor,
}

impl CoefficientOrder {
    /// Rearrange `values` from this order into the standard order.
    pub fn to_standard(self, values: [f64; 6]) -> [f64; 6] {
        match self {
            Self::Standard => values,
            Self::RowMajor => {
                let [xx, xy, yx, yy, x0, y0] = values;
                [xx, yx, xy, yy, x0, y0]
            }
        }
    }
}

impl AffineTransform {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A counter-clockwise rotation by `angle` radians (clockwise on a y-down canvas).
    pub fn rotate(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Build a transform from coefficients in the standard order, rejecting
    /// non-finite values.
    pub fn from_coefficients(coefficients: [f64; 6]) -> Result<Self, InvalidArgument> {
        check_finite(&coefficients)?;
        let [a, b, c, d, e, f] = coefficients;
        Ok(Self::new(a, b, c, d, e, f))
    }

    /// Build a transform from a flat slice laid out in `order`.
    pub fn from_slice(values: &[f64], order: CoefficientOrder) -> Result<Self, InvalidArgument> {
        let values: [f64; 6] = values
            .try_into()
            .map_err(|_| InvalidArgument::CoefficientCount(values.len()))?;
        Self::from_coefficients(order.to_standard(values))
    }

    /// The coefficients in the standard order `[a, b, c, d, e, f]`.
    pub fn to_coefficients(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// The transform that first applies `self` and then `other`.
    pub fn then(&self, other: &Self) -> Self {
        Self::new(
            other.a * self.a + other.c * self.b,
            other.b * self.a + other.d * self.b,
            other.a * self.c + other.c * self.d,
            other.b * self.c + other.d * self.d,
            other.a * self.e + other.c * self.f + other.e,
            other.b * self.e + other.d * self.f + other.f,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn is_finite(&self) -> bool {
        self.to_coefficients().iter().all(|c| c.is_finite())
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Read access to the six coefficients of a transform object.
///
/// Implementors return the coefficients in the standard order `[a, b, c, d, e, f]`.
pub trait Matrix {
    fn coefficients(&self) -> Result<[f64; 6], InvalidArgument>;
}

impl Matrix for AffineTransform {
    fn coefficients(&self) -> Result<[f64; 6], InvalidArgument> {
        Ok(self.to_coefficients())
    }
}

impl Matrix for tiny_skia::Transform {
    fn coefficients(&self) -> Result<[f64; 6], InvalidArgument> {
        Ok([self.sx, self.ky, self.kx, self.sy, self.tx, self.ty].map(f64::from))
    }
}

impl Matrix for [f64; 6] {
    fn coefficients(&self) -> Result<[f64; 6], InvalidArgument> {
        Ok(*self)
    }
}

impl Matrix for [f64] {
    fn coefficients(&self) -> Result<[f64; 6], InvalidArgument> {
        self.try_into().map_err(|_| InvalidArgument::CoefficientCount(self.len()))
    }
}

impl Matrix for Vec<f64> {
    fn coefficients(&self) -> Result<[f64; 6], InvalidArgument> {
        self.as_slice().coefficients()
    }
}
