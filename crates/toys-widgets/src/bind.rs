#![forbid(unsafe_code)]

//! State-dependent toys.

use toys_core::{Event, Result, Vec3};

use crate::toy::Toy;

/// Delegates every call to whatever toy `thunk` returns at that moment.
///
/// The thunk typically reads shared state (`Rc<Cell<_>>`) and returns a
/// clone of one of several pre-built shared toys, so a widget's appearance
/// follows its state without rebuilding the tree.
#[derive(Clone, Copy)]
pub struct Bind<F> {
    pub thunk: F,
}

impl<F> Bind<F> {
    pub const fn new(thunk: F) -> Self {
        Self { thunk }
    }
}

impl<F> std::fmt::Debug for Bind<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bind").finish_non_exhaustive()
    }
}

impl<C, F, T> Toy<C> for Bind<F>
where
    C: ?Sized,
    F: Fn() -> T,
    T: Toy<C>,
{
    fn measure(&self, available: Vec3) -> Vec3 {
        (self.thunk)().measure(available)
    }

    fn paint(&self, size: Vec3, canvas: &mut C) {
        (self.thunk)().paint(size, canvas);
    }

    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        let mut current = (self.thunk)();
        current.handle(size, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;
    use std::cell::Cell;
    use std::rc::Rc;
    use toys_render::TextGrid;

    #[test]
    fn follows_state_on_every_call() {
        let on = Rc::new(Cell::new(false));
        let state = Rc::clone(&on);
        let bind = Bind::new(move || Rect::new(if state.get() { '#' } else { '-' }));

        let mut grid = TextGrid::new(Vec3::xy(2, 1));
        bind.paint(grid.size(), &mut grid);
        assert_eq!(grid.to_text(), "--");

        on.set(true);
        bind.paint(grid.size(), &mut grid);
        assert_eq!(grid.to_text(), "##");
    }
}
