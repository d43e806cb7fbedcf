#![forbid(unsafe_code)]

//! Event handlers.

use toys_core::{Event, EventKind, HandlerResult, PointEvent, Result, Vec3};

use crate::toy::Toy;

/// Runs `handler` for events of one kind that hit its area, and otherwise
/// defers to its child. Measuring and painting are the child's.
///
/// The handler receives the typed payload in the frame of this toy and may
/// return `()` or a `Result` whose error converts into `ToyError`. An error
/// aborts the dispatch and propagates to the caller.
#[derive(Clone, Copy)]
pub struct On<F, W> {
    pub kind: EventKind,
    pub handler: F,
    pub child: W,
}

impl<F, W> On<F, W> {
    pub const fn new(kind: EventKind, handler: F, child: W) -> Self {
        Self {
            kind,
            handler,
            child,
        }
    }

    /// Handler for left clicks.
    pub const fn click(handler: F, child: W) -> Self {
        Self::new(EventKind::Click, handler, child)
    }
}

impl<F, W: std::fmt::Debug> std::fmt::Debug for On<F, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("On")
            .field("kind", &self.kind)
            .field("child", &self.child)
            .finish_non_exhaustive()
    }
}

impl<C, F, R, W> Toy<C> for On<F, W>
where
    C: ?Sized,
    F: FnMut(&mut PointEvent) -> R,
    R: HandlerResult,
    W: Toy<C>,
{
    fn measure(&self, available: Vec3) -> Vec3 {
        self.child.measure(available)
    }

    fn paint(&self, size: Vec3, canvas: &mut C) {
        self.child.paint(size, canvas);
    }

    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        if event.hit(size) {
            if let Some(point) = event.matching_mut(self.kind) {
                #[cfg(feature = "tracing")]
                let _span = tracing::debug_span!(
                    "toy_handle",
                    toy = "On",
                    kind = ?self.kind,
                    x = point.position().x,
                    y = point.position().y
                )
                .entered();

                (self.handler)(point).into_result()?;
                return Ok(true);
            }
        }
        self.child.handle(size, event)
    }
}
