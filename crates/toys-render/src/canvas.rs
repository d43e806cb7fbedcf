#![forbid(unsafe_code)]

//! Drawing capabilities.
//!
//! A canvas is a [`Translate`] target: combinators move its origin with a
//! scoped guard and every draw call is relative to the origin in effect at
//! the time of the call.

use toys_core::{Translate, Vec3};

/// A drawing surface with a movable origin.
pub trait Canvas: Translate {
    /// The accumulated origin.
    fn offset(&self) -> Vec3;
}

/// Fill a rectangle with a pixel value.
pub trait Fill<P: ?Sized>: Canvas {
    /// Fill `[origin, origin + size)` with `pixel`. Non-positive sizes draw
    /// nothing.
    fn fill_rect(&mut self, size: Vec3, pixel: &P);
}

/// Draw a string with a font and a color.
pub trait DrawText<F: ?Sized, K: ?Sized>: Canvas {
    /// Draw `text` with its top-left corner at the current origin.
    fn draw_text(&mut self, text: &str, font: &F, color: &K);
}
