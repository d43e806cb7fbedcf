#![forbid(unsafe_code)]

//! Pointer events.
//!
//! Every event is a tagged [`Event`] whose payload is a [`PointEvent`]. The
//! payload remembers the window-relative position it was created with and
//! the offset accumulated while the event travels down the widget tree, so
//! its local position is always relative to the frame of the combinator
//! currently looking at it.
//!
//! # Design Notes
//!
//! - Hit testing is planar: `[0, size)` on x and y, depth ignored.
//! - Kinds are compared by tag ([`EventKind`]); handlers receive the typed
//!   payload instead of the whole enum.

use bitflags::bitflags;

use crate::geometry::Vec3;
use crate::translate::Translate;

/// Discriminant of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A mouse button went down.
    Click,
    /// A mouse button went up.
    Release,
    /// The pointer moved.
    Motion,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Left mouse button.
    #[default]
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

bitflags! {
    /// Modifier keys held while the event happened.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// An event at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointEvent {
    origin: Vec3,
    offset: Vec3,
    /// Button involved in the event.
    pub button: MouseButton,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointEvent {
    /// Create a left-button event at a window-relative position.
    #[must_use]
    pub const fn new(origin: Vec3) -> Self {
        Self {
            origin,
            offset: Vec3::ZERO,
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }
    }

    /// Set the button.
    #[must_use]
    pub const fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Position relative to the current frame.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.origin - self.offset
    }

    /// Window-relative position the event was created with.
    #[inline]
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Offset accumulated so far.
    #[inline]
    pub const fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Whether the event lies inside `[0, size)` of the current frame.
    #[inline]
    pub fn hit(&self, size: Vec3) -> bool {
        size.contains_xy(self.position())
    }
}

impl Translate for PointEvent {
    #[inline]
    fn translate(&mut self, offset: Vec3) {
        self.offset = self.offset.wrapping_add(offset);
    }
}

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A mouse button went down.
    Click(PointEvent),
    /// A mouse button went up.
    Release(PointEvent),
    /// The pointer moved.
    Motion(PointEvent),
}

impl Event {
    /// Left click at window-relative `(x, y)`.
    #[must_use]
    pub const fn click(x: i32, y: i32) -> Self {
        Self::Click(PointEvent::new(Vec3::xy(x, y)))
    }

    /// Left release at window-relative `(x, y)`.
    #[must_use]
    pub const fn release(x: i32, y: i32) -> Self {
        Self::Release(PointEvent::new(Vec3::xy(x, y)))
    }

    /// Pointer motion to window-relative `(x, y)`.
    #[must_use]
    pub const fn motion(x: i32, y: i32) -> Self {
        Self::Motion(PointEvent::new(Vec3::xy(x, y)))
    }

    /// The tag of this event.
    #[inline]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Click(_) => EventKind::Click,
            Self::Release(_) => EventKind::Release,
            Self::Motion(_) => EventKind::Motion,
        }
    }

    /// The payload.
    #[inline]
    pub const fn point(&self) -> &PointEvent {
        match self {
            Self::Click(p) | Self::Release(p) | Self::Motion(p) => p,
        }
    }

    /// The payload, mutably.
    #[inline]
    pub fn point_mut(&mut self) -> &mut PointEvent {
        match self {
            Self::Click(p) | Self::Release(p) | Self::Motion(p) => p,
        }
    }

    /// The payload if this event is of `kind`.
    #[inline]
    pub fn matching_mut(&mut self, kind: EventKind) -> Option<&mut PointEvent> {
        if self.kind() == kind {
            Some(self.point_mut())
        } else {
            None
        }
    }

    /// Whether the event lies inside `[0, size)` of the current frame.
    #[inline]
    pub fn hit(&self, size: Vec3) -> bool {
        self.point().hit(size)
    }

    /// Offset accumulated so far.
    #[inline]
    pub fn offset(&self) -> Vec3 {
        self.point().offset()
    }
}

impl Translate for Event {
    #[inline]
    fn translate(&mut self, offset: Vec3) {
        self.point_mut().translate(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::TranslateExt;

    #[test]
    fn hit_is_exclusive_at_far_edge() {
        let e = Event::click(15, 15);
        assert!(e.hit(Vec3::xy(16, 16)));
        assert!(!e.hit(Vec3::xy(15, 16)));
        assert!(!Event::click(-1, 0).hit(Vec3::xy(16, 16)));
    }

    #[test]
    fn translation_moves_local_position() {
        let mut e = Event::click(3, 3);
        {
            let moved = e.translation(Vec3::xy(3, 3));
            assert_eq!(moved.point().position(), Vec3::ZERO);
            assert!(moved.hit(Vec3::xy(1, 1)));
        }
        assert_eq!(e.offset(), Vec3::ZERO);
        assert_eq!(e.point().position(), Vec3::xy(3, 3));
    }

    #[test]
    fn kind_matching() {
        let mut e = Event::release(1, 2);
        assert_eq!(e.kind(), EventKind::Release);
        assert!(e.matching_mut(EventKind::Click).is_none());
        let p = e.matching_mut(EventKind::Release).unwrap();
        assert_eq!(p.origin(), Vec3::xy(1, 2));
    }

    #[test]
    fn builder_sets_button_and_modifiers() {
        let p = PointEvent::new(Vec3::ZERO)
            .with_button(MouseButton::Right)
            .with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(p.button, MouseButton::Right);
        assert!(p.modifiers.contains(Modifiers::CTRL));
        assert!(!p.modifiers.contains(Modifiers::ALT));
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
