#![forbid(unsafe_code)]

//! Positioning combinators: [`At`], [`Sz`] and [`Lay`].
//!
//! All three take a [`Transform`] evaluated against the size they are
//! given, so a single value can express fixed (`Vec3`), proportional
//! (`xy(0.5, 0.5)`) or computed (`|v| ...`) placement.
//!
//! | Toy | measure | child frame |
//! |-----|---------|-------------|
//! | `At(t, c)` | `c.measure(avail - t) + t` | origin `t`, size `size - t` |
//! | `Sz(t, c)` | `t(avail)` | origin unchanged, size `t(size)` |
//! | `Lay(t, c)` | `avail` | origin `t(size - c.measure(size))`, size `size` |

use toys_core::{Event, Result, Transform, Translate, TranslateExt, Vec3};

use crate::toy::Toy;

/// Moves its child by an offset computed from the available size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct At<T, W> {
    pub offset: T,
    pub child: W,
}

impl<T, W> At<T, W> {
    pub const fn new(offset: T, child: W) -> Self {
        Self { offset, child }
    }
}

impl<C, T, W> Toy<C> for At<T, W>
where
    C: Translate + ?Sized,
    T: Transform,
    W: Toy<C>,
{
    fn measure(&self, available: Vec3) -> Vec3 {
        let at = self.offset.transform(available);
        self.child.measure(available - at) + at
    }

    fn paint(&self, size: Vec3, canvas: &mut C) {
        let at = self.offset.transform(size);
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("toy_paint", toy = "At", x = at.x, y = at.y).entered();
        let mut moved = canvas.translation(at);
        self.child.paint(size - at, &mut *moved);
    }

    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        let at = self.offset.transform(size);
        let mut moved = event.translation(at);
        self.child.handle(size - at, &mut moved)
    }
}

/// Resizes its child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sz<T, W> {
    pub size: T,
    pub child: W,
}

impl<T, W> Sz<T, W> {
    pub const fn new(size: T, child: W) -> Self {
        Self { size, child }
    }
}

impl<C, T, W> Toy<C> for Sz<T, W>
where
    C: ?Sized,
    T: Transform,
    W: Toy<C>,
{
    fn measure(&self, available: Vec3) -> Vec3 {
        self.size.transform(available)
    }

    fn paint(&self, size: Vec3, canvas: &mut C) {
        self.child.paint(self.size.transform(size), canvas);
    }

    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        self.child.handle(self.size.transform(size), event)
    }
}

/// Aligns its child inside the available area.
///
/// The transform receives the free space (`size - child.measure(size)`), so
/// `MID` centers, `xy(0, 0)` pins to the top-left and `xy(1.0, 1.0)` to the
/// bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lay<T, W> {
    pub align: T,
    pub child: W,
}

impl<T, W> Lay<T, W> {
    pub const fn new(align: T, child: W) -> Self {
        Self { align, child }
    }
}

impl<T: Transform, W> Lay<T, W> {
    fn offset<C: ?Sized>(&self, size: Vec3) -> Vec3
    where
        W: Toy<C>,
    {
        self.align.transform(size - self.child.measure(size))
    }
}

impl<C, T, W> Toy<C> for Lay<T, W>
where
    C: Translate + ?Sized,
    T: Transform,
    W: Toy<C>,
{
    fn measure(&self, available: Vec3) -> Vec3 {
        available
    }

    fn paint(&self, size: Vec3, canvas: &mut C) {
        let at = self.offset::<C>(size);
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("toy_paint", toy = "Lay", x = at.x, y = at.y).entered();
        let mut moved = canvas.translation(at);
        self.child.paint(size, &mut *moved);
    }

    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        let at = self.offset::<C>(size);
        let mut moved = event.translation(at);
        self.child.handle(size, &mut moved)
    }
}
