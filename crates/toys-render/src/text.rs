#![forbid(unsafe_code)]

//! Fonts.

use toys_core::Vec3;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Measures strings.
pub trait Font {
    /// Size of the box `text` occupies when drawn.
    fn measure(&self, text: &str) -> Vec3;
}

impl<F: Font + ?Sized> Font for &F {
    #[inline]
    fn measure(&self, text: &str) -> Vec3 {
        (**self).measure(text)
    }
}

/// Monospace terminal font: one row high, one cell per narrow character and
/// two per wide character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mono;

impl Mono {
    /// Columns taken by `ch`; zero for combining and control characters.
    #[inline]
    pub fn char_width(ch: char) -> i32 {
        ch.width().unwrap_or(0) as i32
    }
}

impl Font for Mono {
    fn measure(&self, text: &str) -> Vec3 {
        if text.is_empty() {
            return Vec3::ZERO;
        }
        Vec3::xy(text.width() as i32, 1)
    }
}
