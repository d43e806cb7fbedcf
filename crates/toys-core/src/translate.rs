#![forbid(unsafe_code)]

//! Scoped coordinate frames.
//!
//! Canvases and events carry an accumulated offset. Combinators that move a
//! child never call [`Translate::translate`] directly; they acquire a
//! [`Translation`] guard, hand the child `&mut *guard`, and let the guard
//! undo the offset when it goes out of scope. Early returns, `?` and
//! unwinding panics all drop the guard, so the frame seen by the caller is
//! the frame it passed in.
//!
//! ```
//! use toys_core::geometry::Vec3;
//! use toys_core::translate::{Translate, TranslateExt};
//!
//! #[derive(Default)]
//! struct Origin(Vec3);
//!
//! impl Translate for Origin {
//!     fn translate(&mut self, offset: Vec3) {
//!         self.0 = self.0.wrapping_add(offset);
//!     }
//! }
//!
//! let mut origin = Origin::default();
//! {
//!     let moved = origin.translation(Vec3::xy(3, 4));
//!     assert_eq!(moved.0, Vec3::xy(3, 4));
//! }
//! assert_eq!(origin.0, Vec3::ZERO);
//! ```

use std::ops::{Deref, DerefMut};

use crate::geometry::Vec3;

/// Something with an accumulated offset.
///
/// Implementors accumulate with [`Vec3::wrapping_add`] so that a
/// [`Translation`] restores the previous offset exactly.
pub trait Translate {
    /// Add `offset` to the accumulated offset.
    fn translate(&mut self, offset: Vec3);
}

/// Guard returned by [`TranslateExt::translation`].
///
/// Dereferences to the translated target. Dropping the guard applies the
/// inverse offset.
#[must_use = "the offset is undone as soon as the guard is dropped"]
#[derive(Debug)]
pub struct Translation<'a, T: Translate + ?Sized> {
    target: &'a mut T,
    applied: Vec3,
}

impl<'a, T: Translate + ?Sized> Translation<'a, T> {
    /// Translate `target` by `offset` until the guard is dropped.
    pub fn new(target: &'a mut T, offset: Vec3) -> Self {
        target.translate(offset);
        Self {
            target,
            applied: offset,
        }
    }

    /// The offset this guard applied.
    #[inline]
    pub fn offset(&self) -> Vec3 {
        self.applied
    }
}

impl<T: Translate + ?Sized> Deref for Translation<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.target
    }
}

impl<T: Translate + ?Sized> DerefMut for Translation<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.target
    }
}

impl<T: Translate + ?Sized> Drop for Translation<'_, T> {
    fn drop(&mut self) {
        self.target.translate(Vec3::ZERO.wrapping_sub(self.applied));
    }
}

/// Scoped translation for every [`Translate`] implementor.
pub trait TranslateExt: Translate {
    /// Translate by `offset` for the lifetime of the returned guard.
    fn translation(&mut self, offset: Vec3) -> Translation<'_, Self> {
        Translation::new(self, offset)
    }
}

impl<T: Translate + ?Sized> TranslateExt for T {}
