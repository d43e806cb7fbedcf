#![forbid(unsafe_code)]

//! The factory facade.
//!
//! [`Toys<C, M>`] exposes one constructor per combinator for canvas type `C`.
//! The memory policy `M` decides what each constructor hands back:
//!
//! | Policy | Result of `Toys::<C, M>::rc('x')` |
//! |--------|-----------------------------------|
//! | [`Value`] | `Rect<char>` by value |
//! | [`Owned`] | `Box<dyn Toy<C>>` |
//! | [`Shared`] | `Rc<RefCell<dyn Toy<C>>>` |
//!
//! The same composition code therefore produces either a flat tree with one
//! inline value or a tree of heap-allocated, type-erased nodes, and the two
//! can be mixed freely: any result is a valid child of any combinator.
//!
//! ```
//! use toys_core::Vec3;
//! use toys_render::TextGrid;
//! use toys_widgets::Toy;
//! use toys_widgets::facade::{Boxed, Flat};
//!
//! type B = Boxed<TextGrid>;
//! type F = Flat<TextGrid>;
//!
//! let erased = B::lr(2, B::rc('a'), F::rc('b'));
//! let mut grid = TextGrid::new(Vec3::xy(4, 1));
//! erased.paint(grid.size(), &mut grid);
//! assert_eq!(grid.to_text(), "aabb");
//! ```

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use toys_core::{EventKind, IntoExtent, PointEvent, Rel, Transform};

use crate::bind::Bind;
use crate::flat;
use crate::on::On;
use crate::place::{At, Lay, Sz};
use crate::rect::Rect;
use crate::split::Split;
use crate::text::Text;
use crate::toy::{OwnedToy, SharedToy, Toy};

/// How a freshly built toy is handed back to the caller.
pub trait Memory<C: ?Sized> {
    /// The handle type for a toy of type `T`.
    type Ref<T: Toy<C> + 'static>: Toy<C>;

    fn wrap<T: Toy<C> + 'static>(toy: T) -> Self::Ref<T>;
}

/// Store and return by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Value;

/// Allocate and return an exclusively owned, type-erased handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Owned;

/// Allocate and return a shared, type-erased handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shared;

impl<C: ?Sized> Memory<C> for Value {
    type Ref<T: Toy<C> + 'static> = T;

    #[inline]
    fn wrap<T: Toy<C> + 'static>(toy: T) -> T {
        toy
    }
}

impl<C: ?Sized + 'static> Memory<C> for Owned {
    type Ref<T: Toy<C> + 'static> = OwnedToy<C>;

    #[inline]
    fn wrap<T: Toy<C> + 'static>(toy: T) -> OwnedToy<C> {
        Box::new(toy)
    }
}

impl<C: ?Sized + 'static> Memory<C> for Shared {
    type Ref<T: Toy<C> + 'static> = SharedToy<C>;

    #[inline]
    fn wrap<T: Toy<C> + 'static>(toy: T) -> SharedToy<C> {
        Rc::new(RefCell::new(toy))
    }
}

/// Factory family for canvas `C` under memory policy `M`.
pub struct Toys<C: ?Sized, M>(PhantomData<(fn(&mut C), M)>);

/// Flat factories.
pub type Flat<C> = Toys<C, Value>;
/// Boxed factories.
pub type Boxed<C> = Toys<C, Owned>;
/// Reference-counted factories.
pub type Rced<C> = Toys<C, Shared>;

impl<C: ?Sized, M: Memory<C>> Toys<C, M> {
    /// Hand `toy` back under this policy.
    #[inline]
    pub fn wrap<T: Toy<C> + 'static>(toy: T) -> M::Ref<T> {
        M::wrap(toy)
    }

    /// Solid rectangle.
    pub fn rc<P>(pixel: P) -> M::Ref<Rect<P>>
    where
        Rect<P>: Toy<C> + 'static,
    {
        M::wrap(flat::rc(pixel))
    }

    /// Move `child` by `offset`.
    pub fn at<T: Transform, W>(offset: T, child: W) -> M::Ref<At<T, W>>
    where
        At<T, W>: Toy<C> + 'static,
    {
        M::wrap(flat::at(offset, child))
    }

    /// Resize `child`.
    pub fn sz<T: Transform, W>(size: T, child: W) -> M::Ref<Sz<T, W>>
    where
        Sz<T, W>: Toy<C> + 'static,
    {
        M::wrap(flat::sz(size, child))
    }

    /// Align `child`.
    pub fn lay<T: Transform, W>(align: T, child: W) -> M::Ref<Lay<T, W>>
    where
        Lay<T, W>: Toy<C> + 'static,
    {
        M::wrap(flat::lay(align, child))
    }

    /// Left/right split.
    pub fn lr<S: IntoExtent, A, B>(spacing: S, left: A, right: B) -> M::Ref<Split<S::Extent, A, B>>
    where
        Split<S::Extent, A, B>: Toy<C> + 'static,
    {
        M::wrap(flat::lr(spacing, left, right))
    }

    /// Up/down split.
    pub fn ud<S: IntoExtent, A, B>(spacing: S, up: A, down: B) -> M::Ref<Split<S::Extent, A, B>>
    where
        Split<S::Extent, A, B>: Toy<C> + 'static,
    {
        M::wrap(flat::ud(spacing, up, down))
    }

    /// Front/back split at half depth.
    pub fn fb<A, B>(front: A, back: B) -> M::Ref<Split<Rel, A, B>>
    where
        Split<Rel, A, B>: Toy<C> + 'static,
    {
        M::wrap(flat::fb(front, back))
    }

    /// Front/back split with explicit spacing.
    pub fn fb_at<S: IntoExtent, A, B>(
        spacing: S,
        front: A,
        back: B,
    ) -> M::Ref<Split<S::Extent, A, B>>
    where
        Split<S::Extent, A, B>: Toy<C> + 'static,
    {
        M::wrap(flat::fb_at(spacing, front, back))
    }

    /// Handle left clicks.
    pub fn on_click<F, R, W>(handler: F, child: W) -> M::Ref<On<F, W>>
    where
        F: FnMut(&mut PointEvent) -> R,
        On<F, W>: Toy<C> + 'static,
    {
        M::wrap(flat::on_click(handler, child))
    }

    /// Handle events of `kind`.
    pub fn on<F, R, W>(kind: EventKind, handler: F, child: W) -> M::Ref<On<F, W>>
    where
        F: FnMut(&mut PointEvent) -> R,
        On<F, W>: Toy<C> + 'static,
    {
        M::wrap(flat::on(kind, handler, child))
    }

    /// Text label.
    pub fn tx<S: AsRef<str>, F, K>(content: S, font: F, color: K) -> M::Ref<Text<S, F, K>>
    where
        Text<S, F, K>: Toy<C> + 'static,
    {
        M::wrap(flat::tx(content, font, color))
    }

    /// Toy chosen by `thunk` on every call.
    pub fn bind<F, T>(thunk: F) -> M::Ref<Bind<F>>
    where
        F: Fn() -> T,
        Bind<F>: Toy<C> + 'static,
    {
        M::wrap(flat::bind(thunk))
    }
}
