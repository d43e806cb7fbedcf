#![forbid(unsafe_code)]

//! Split strategies.
//!
//! A split strategy maps an available length to a sub-length. The same
//! strategies pick split points, alignment offsets and resize targets:
//!
//! - [`Abs`] ignores its input and returns a fixed length.
//! - [`Rel`] returns a rounded fraction of its input.
//! - [`Xy`] pairs one strategy per planar axis into a [`Transform`] and
//!   passes the `z` component through.
//!
//! ```
//! use toys_core::geometry::Vec3;
//! use toys_core::strategy::{MID, Transform, xy};
//!
//! assert_eq!(xy(3, 0.5).transform(Vec3::xy(10, 10)), Vec3::xy(3, 5));
//! assert_eq!(MID.transform(Vec3::xy(8, 4)), Vec3::xy(4, 2));
//! ```

use crate::geometry::Vec3;

/// A single-axis split strategy.
pub trait Extent {
    /// Map an available length to a sub-length.
    fn extent(&self, length: i32) -> i32;
}

/// A two-axis point transform.
pub trait Transform {
    /// Map an available size to a size or offset.
    fn transform(&self, available: Vec3) -> Vec3;
}

/// Absolute strategy: always the stored length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Abs(pub i32);

impl Extent for Abs {
    #[inline]
    fn extent(&self, _length: i32) -> i32 {
        self.0
    }
}

/// Relative strategy: `round(length * fraction)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rel(pub f32);

impl Extent for Rel {
    #[inline]
    fn extent(&self, length: i32) -> i32 {
        (length as f32 * self.0).round() as i32
    }
}

/// Pairs an x strategy with a y strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xy<X, Y> {
    pub x: X,
    pub y: Y,
}

impl<X, Y> Xy<X, Y> {
    pub const fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }
}

impl<X: Extent, Y: Extent> Transform for Xy<X, Y> {
    #[inline]
    fn transform(&self, available: Vec3) -> Vec3 {
        Vec3::new(
            self.x.extent(available.x),
            self.y.extent(available.y),
            available.z,
        )
    }
}

/// A vector is the constant transform.
impl Transform for Vec3 {
    #[inline]
    fn transform(&self, _available: Vec3) -> Vec3 {
        *self
    }
}

impl<F> Transform for F
where
    F: Fn(Vec3) -> Vec3,
{
    #[inline]
    fn transform(&self, available: Vec3) -> Vec3 {
        self(available)
    }
}

/// Centers along both planar axes.
pub const MID: Xy<Rel, Rel> = Xy::new(Rel(0.5), Rel(0.5));

/// Literal lengths that name a split strategy.
///
/// Integers become [`Abs`], floats become [`Rel`].
pub trait IntoExtent {
    type Extent: Extent;

    fn into_extent(self) -> Self::Extent;
}

impl IntoExtent for i32 {
    type Extent = Abs;

    #[inline]
    fn into_extent(self) -> Abs {
        Abs(self)
    }
}

impl IntoExtent for f32 {
    type Extent = Rel;

    #[inline]
    fn into_extent(self) -> Rel {
        Rel(self)
    }
}

impl IntoExtent for f64 {
    type Extent = Rel;

    #[inline]
    fn into_extent(self) -> Rel {
        Rel(self as f32)
    }
}

impl IntoExtent for Abs {
    type Extent = Abs;

    #[inline]
    fn into_extent(self) -> Abs {
        self
    }
}

impl IntoExtent for Rel {
    type Extent = Rel;

    #[inline]
    fn into_extent(self) -> Rel {
        self
    }
}

/// Build a two-axis strategy from absolute or relative arguments.
///
/// Each argument is an integer (absolute) or a float (relative), so all four
/// combinations are available: `xy(3, 4)`, `xy(3, 0.5)`, `xy(0.5, 4)` and
/// `xy(0.5, 0.5)`.
#[inline]
pub fn xy<X: IntoExtent, Y: IntoExtent>(x: X, y: Y) -> Xy<X::Extent, Y::Extent> {
    Xy::new(x.into_extent(), y.into_extent())
}
