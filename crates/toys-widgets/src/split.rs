#![forbid(unsafe_code)]

//! Binary split along one axis.

use toys_core::{Axis, Event, Extent, Result, Translate, TranslateExt, Vec3};

use crate::toy::Toy;

/// Where the two halves of a split end up for a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLayout {
    /// Size handed to the first child.
    pub first: Vec3,
    /// Origin of the second child, relative to the split.
    pub second_at: Vec3,
    /// Size handed to the second child.
    pub second: Vec3,
}

/// Divides its area along `axis` at `strategy(size[axis])`.
///
/// The first child gets the leading part and the second child the rest,
/// each shrunk to what it measures. The second child is painted first so
/// the first ends up on top where they overlap; events go to the first
/// child first and reach the second only when the first declines them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split<S, A, B> {
    pub axis: Axis,
    pub strategy: S,
    pub first: A,
    pub second: B,
}

impl<S, A, B> Split<S, A, B> {
    pub const fn new(axis: Axis, strategy: S, first: A, second: B) -> Self {
        Self {
            axis,
            strategy,
            first,
            second,
        }
    }
}

impl<S: Extent, A, B> Split<S, A, B> {
    /// Lay out both children inside `size`.
    pub fn layout<C: ?Sized>(&self, size: Vec3) -> SplitLayout
    where
        A: Toy<C>,
        B: Toy<C>,
    {
        let cut = self.strategy.extent(size[self.axis]);
        SplitLayout {
            first: self.first.measure(size.with(self.axis, cut)),
            second_at: self.axis.offset(cut),
            second: self
                .second
                .measure(size.with(self.axis, size[self.axis] - cut)),
        }
    }
}

impl<C, S, A, B> Toy<C> for Split<S, A, B>
where
    C: Translate + ?Sized,
    S: Extent,
    A: Toy<C>,
    B: Toy<C>,
{
    fn paint(&self, size: Vec3, canvas: &mut C) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "toy_paint",
            toy = "Split",
            axis = ?self.axis,
            w = size.x,
            h = size.y
        )
        .entered();

        let layout = self.layout::<C>(size);
        {
            let mut moved = canvas.translation(layout.second_at);
            self.second.paint(layout.second, &mut *moved);
        }
        self.first.paint(layout.first, canvas);
    }

    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        let layout = self.layout::<C>(size);
        if self.first.handle(layout.first, event)? {
            return Ok(true);
        }
        let mut moved = event.translation(layout.second_at);
        self.second.handle(layout.second, &mut moved)
    }
}
