#![forbid(unsafe_code)]

//! Solid rectangle.

use toys_core::{Event, Result, Vec3};
use toys_render::Fill;

use crate::toy::Toy;

/// Fills its whole area with one pixel value and consumes every event that
/// hits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<P> {
    pub pixel: P,
}

impl<P> Rect<P> {
    pub const fn new(pixel: P) -> Self {
        Self { pixel }
    }
}

impl<P, C: Fill<P> + ?Sized> Toy<C> for Rect<P> {
    fn paint(&self, size: Vec3, canvas: &mut C) {
        canvas.fill_rect(size, &self.pixel);
    }

    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        Ok(event.hit(size))
    }
}
