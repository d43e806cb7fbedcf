#![forbid(unsafe_code)]

//! Sample widgets composed from the micro-widgets.
//!
//! Neither sample defines paint or event logic of its own. State lives in
//! `Rc<Cell<_>>` captured by a click handler that writes it and by a thunk
//! or transform that reads it.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use toys_core::{Event, MID, PointEvent, Result, Vec3};
use toys_render::{DrawText, Fill, Mono};
use toys_widgets::flat::{bind, fb, lay, on_click, rc, sz, tx};
use toys_widgets::{On, OwnedToy, Rect, SharedToy, Sz, Toy, owned_toy, shared_toy};

/// Size of a radio button.
pub const RADIO_SIZE: Vec3 = Vec3::xy(5, 3);

/// One radio button appearance: a centered label over a solid background.
pub fn radio_face<C, P>(label: &'static str, background: P) -> SharedToy<C>
where
    C: Fill<P> + DrawText<Mono, ()> + 'static,
    P: 'static,
{
    shared_toy(fb(lay(MID, tx(label, Mono, ())), rc(background)))
}

/// A two-state button of [`RADIO_SIZE`].
///
/// Clicking flips the state and reports the new value to `changed`. The
/// appearance is looked up on every call, so the next paint shows the new
/// state without rebuilding anything.
pub fn radio_button<C>(
    on: SharedToy<C>,
    off: SharedToy<C>,
    changed: impl Fn(bool) + 'static,
) -> OwnedToy<C>
where
    C: ?Sized + 'static,
{
    let state = Rc::new(Cell::new(false));
    let read = Rc::clone(&state);
    owned_toy(sz(
        RADIO_SIZE,
        on_click(
            move |_: &mut PointEvent| {
                state.set(!state.get());
                changed(state.get());
            },
            bind(move || {
                if read.get() {
                    Rc::clone(&on)
                } else {
                    Rc::clone(&off)
                }
            }),
        ),
    ))
}

/// Smallest edge of a [`ResizingItem`].
pub const SMALL: Vec3 = Vec3::xy(5, 5);
/// Largest edge of a [`ResizingItem`].
pub const LARGE: Vec3 = Vec3::xy(10, 10);

/// A flat, stateful widget that toggles between [`SMALL`] and [`LARGE`]
/// when clicked.
pub struct ResizingItem<T> {
    size: Rc<Cell<Vec3>>,
    toy: T,
}

/// Build a [`ResizingItem`] painted with `pixel`.
pub fn resizing_item<P>(
    pixel: P,
) -> ResizingItem<On<impl FnMut(&mut PointEvent), Sz<impl Fn(Vec3) -> Vec3, Rect<P>>>> {
    let size = Rc::new(Cell::new(SMALL));
    let write = Rc::clone(&size);
    let read = Rc::clone(&size);
    let toy = on_click(
        move |_: &mut PointEvent| {
            let next = if write.get() == SMALL { LARGE } else { SMALL };
            write.set(next);
        },
        sz(move |_: Vec3| read.get(), rc(pixel)),
    );
    ResizingItem { size, toy }
}

impl<T> ResizingItem<T> {
    /// Current size.
    pub fn size(&self) -> Vec3 {
        self.size.get()
    }
}

impl<T> fmt::Debug for ResizingItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizingItem")
            .field("size", &self.size.get())
            .finish_non_exhaustive()
    }
}

impl<C: ?Sized, T: Toy<C>> Toy<C> for ResizingItem<T> {
    fn measure(&self, available: Vec3) -> Vec3 {
        self.toy.measure(available)
    }

    fn paint(&self, size: Vec3, canvas: &mut C) {
        self.toy.paint(size, canvas);
    }

    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        self.toy.handle(size, event)
    }
}
