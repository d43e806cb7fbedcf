#![forbid(unsafe_code)]

//! The widget contract.
//!
//! A toy answers three questions for a rectangle of a given size: how large
//! it wants to be, how it paints itself, and whether it consumes a pointer
//! event. The same trait serves both representations:
//!
//! - **Flat**: concrete combinator types nested by value. The whole tree is
//!   one inline value; calls are monomorphized.
//! - **Erased**: `dyn Toy<C>` behind [`OwnedToy`] or [`SharedToy`]. Both
//!   handle types implement `Toy<C>` themselves, so an erased subtree can
//!   sit anywhere a flat one can.

use std::cell::RefCell;
use std::rc::Rc;

use toys_core::{Event, Result, Vec3};

/// A composable widget painting onto canvases of type `C`.
pub trait Toy<C: ?Sized> {
    /// Preferred size given the available size. Defaults to taking all of it.
    fn measure(&self, available: Vec3) -> Vec3 {
        available
    }

    /// Paint into `[origin, origin + size)` of `canvas`.
    fn paint(&self, size: Vec3, canvas: &mut C);

    /// Offer `event` to the toy. Returns `Ok(true)` when consumed.
    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        let _ = (size, event);
        Ok(false)
    }
}

/// Exclusively owned, type-erased toy.
pub type OwnedToy<C> = Box<dyn Toy<C>>;

/// Shared, type-erased toy.
pub type SharedToy<C> = Rc<RefCell<dyn Toy<C>>>;

impl<C: ?Sized, T: Toy<C> + ?Sized> Toy<C> for Box<T> {
    #[inline]
    fn measure(&self, available: Vec3) -> Vec3 {
        (**self).measure(available)
    }

    #[inline]
    fn paint(&self, size: Vec3, canvas: &mut C) {
        (**self).paint(size, canvas);
    }

    #[inline]
    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        (**self).handle(size, event)
    }
}

/// Shared toys borrow their cell for the duration of each call. A shared
/// toy must not reach itself again while handling an event.
impl<C: ?Sized, T: Toy<C> + ?Sized> Toy<C> for Rc<RefCell<T>> {
    #[inline]
    fn measure(&self, available: Vec3) -> Vec3 {
        self.borrow().measure(available)
    }

    #[inline]
    fn paint(&self, size: Vec3, canvas: &mut C) {
        self.borrow().paint(size, canvas);
    }

    #[inline]
    fn handle(&mut self, size: Vec3, event: &mut Event) -> Result<bool> {
        self.borrow_mut().handle(size, event)
    }
}

/// Erase a toy into an exclusively owned handle.
pub fn owned_toy<C: ?Sized, T: Toy<C> + 'static>(toy: T) -> OwnedToy<C> {
    Box::new(toy)
}

/// Erase a toy into a shared handle.
pub fn shared_toy<C: ?Sized, T: Toy<C> + 'static>(toy: T) -> SharedToy<C> {
    Rc::new(RefCell::new(toy))
}
