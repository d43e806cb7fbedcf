#![forbid(unsafe_code)]

//! A canvas that records draw operations instead of rasterizing them.
//!
//! Useful for asserting where and how large a widget painted without
//! reading pixels back.

use toys_core::{Translate, Vec3};

use crate::canvas::{Canvas, DrawText, Fill};
use crate::text::Font;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp<P> {
    /// A rectangle fill.
    Fill {
        /// Origin in effect when the call was made.
        origin: Vec3,
        size: Vec3,
        pixel: P,
    },
    /// A text draw.
    Text {
        origin: Vec3,
        /// Size reported by the font for `text`.
        size: Vec3,
        text: String,
    },
}

impl<P> DrawOp<P> {
    /// Origin of the operation.
    pub fn origin(&self) -> Vec3 {
        match self {
            Self::Fill { origin, .. } | Self::Text { origin, .. } => *origin,
        }
    }

    /// Size of the operation.
    pub fn size(&self) -> Vec3 {
        match self {
            Self::Fill { size, .. } | Self::Text { size, .. } => *size,
        }
    }
}

/// Recording canvas over pixel type `P`.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder<P> {
    offset: Vec3,
    ops: Vec<DrawOp<P>>,
}

impl<P> Default for Recorder<P> {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            ops: Vec::new(),
        }
    }
}

impl<P> Recorder<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations in call order.
    pub fn ops(&self) -> &[DrawOp<P>] {
        &self.ops
    }

    /// Drain recorded operations.
    pub fn take(&mut self) -> Vec<DrawOp<P>> {
        std::mem::take(&mut self.ops)
    }
}

impl<P> Translate for Recorder<P> {
    #[inline]
    fn translate(&mut self, offset: Vec3) {
        self.offset = self.offset.wrapping_add(offset);
    }
}

impl<P> Canvas for Recorder<P> {
    #[inline]
    fn offset(&self) -> Vec3 {
        self.offset
    }
}

impl<P: Clone> Fill<P> for Recorder<P> {
    fn fill_rect(&mut self, size: Vec3, pixel: &P) {
        self.ops.push(DrawOp::Fill {
            origin: self.offset,
            size,
            pixel: pixel.clone(),
        });
    }
}

impl<P, F: Font + ?Sized, K: ?Sized> DrawText<F, K> for Recorder<P> {
    fn draw_text(&mut self, text: &str, font: &F, _color: &K) {
        self.ops.push(DrawOp::Text {
            origin: self.offset,
            size: font.measure(text),
            text: text.to_owned(),
        });
    }
}
