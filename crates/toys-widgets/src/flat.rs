#![forbid(unsafe_code)]

//! Free constructors for flat composition.
//!
//! These build combinators by value without naming the canvas type, so a
//! whole widget can be written once and painted on any canvas that offers
//! the capabilities its leaves need.
//!
//! ```
//! use toys_core::{MID, PointEvent, Vec3, xy};
//! use toys_render::{Mono, TextGrid};
//! use toys_widgets::Toy;
//! use toys_widgets::flat::{fb, lay, lr, on_click, rc, sz, tx};
//!
//! let label = on_click(
//!     |_: &mut PointEvent| {},
//!     fb(lay(MID, tx("ok", Mono, ())), rc(' ')),
//! );
//! let ui = lr(0.5, rc('a'), sz(xy(1.0, 0.5), label));
//!
//! let mut grid = TextGrid::new(Vec3::xy(6, 2));
//! ui.paint(grid.size(), &mut grid);
//! assert_eq!(grid.to_text(), "aaa ok\naaa...");
//! ```

use toys_core::{Axis, EventKind, IntoExtent, PointEvent, Rel, Transform};

use crate::bind::Bind;
use crate::on::On;
use crate::place::{At, Lay, Sz};
use crate::rect::Rect;
use crate::split::Split;
use crate::text::Text;

/// Solid rectangle.
#[inline]
pub const fn rc<P>(pixel: P) -> Rect<P> {
    Rect::new(pixel)
}

/// Move `child` by `offset`.
#[inline]
pub fn at<T: Transform, W>(offset: T, child: W) -> At<T, W> {
    At::new(offset, child)
}

/// Resize `child` to `size`.
#[inline]
pub fn sz<T: Transform, W>(size: T, child: W) -> Sz<T, W> {
    Sz::new(size, child)
}

/// Align `child` within the available area.
#[inline]
pub fn lay<T: Transform, W>(align: T, child: W) -> Lay<T, W> {
    Lay::new(align, child)
}

/// Left/right split. An integer spacing is absolute, a float is relative.
#[inline]
pub fn lr<S: IntoExtent, A, B>(spacing: S, left: A, right: B) -> Split<S::Extent, A, B> {
    Split::new(Axis::X, spacing.into_extent(), left, right)
}

/// Up/down split.
#[inline]
pub fn ud<S: IntoExtent, A, B>(spacing: S, up: A, down: B) -> Split<S::Extent, A, B> {
    Split::new(Axis::Y, spacing.into_extent(), up, down)
}

/// Front/back split at half depth.
#[inline]
pub fn fb<A, B>(front: A, back: B) -> Split<Rel, A, B> {
    Split::new(Axis::Z, Rel(0.5), front, back)
}

/// Front/back split with explicit spacing.
#[inline]
pub fn fb_at<S: IntoExtent, A, B>(spacing: S, front: A, back: B) -> Split<S::Extent, A, B> {
    Split::new(Axis::Z, spacing.into_extent(), front, back)
}

/// Handle left clicks on `child`.
#[inline]
pub fn on_click<F, R, W>(handler: F, child: W) -> On<F, W>
where
    F: FnMut(&mut PointEvent) -> R,
{
    On::click(handler, child)
}

/// Handle events of `kind` on `child`.
#[inline]
pub fn on<F, R, W>(kind: EventKind, handler: F, child: W) -> On<F, W>
where
    F: FnMut(&mut PointEvent) -> R,
{
    On::new(kind, handler, child)
}

/// Text label.
#[inline]
pub fn tx<S: AsRef<str>, F, K>(content: S, font: F, color: K) -> Text<S, F, K> {
    Text::new(content, font, color)
}

/// Toy chosen by `thunk` on every call.
#[inline]
pub fn bind<F, T>(thunk: F) -> Bind<F>
where
    F: Fn() -> T,
{
    Bind::new(thunk)
}
