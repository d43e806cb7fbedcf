#![forbid(unsafe_code)]

//! Text label.

use toys_core::{Event, Result, Vec3};
use toys_render::{DrawText, Font};

use crate::toy::Toy;

/// A string drawn with a font and a color. Its size is whatever the font
/// measures, independent of the available size.
#[derive(Debug, Clone, PartialEq)]
pub struct Text<S, F, K> {
    pub content: S,
    pub font: F,
    pub color: K,
}

impl<S, F, K> Text<S, F, K> {
    pub const fn new(content: S, font: F, color: K) -> Self {
        Self {
            content,
            font,
            color,
        }
    }
}

impl<S: AsRef<str>, F: Font, K> Text<S, F, K> {
    /// Size of the rendered string.
    pub fn extent(&self) -> Vec3 {
        self.font.measure(self.content.as_ref())
    }
}

impl<C, S, F, K> Toy<C> for Text<S, F, K>
where
    C: DrawText<F, K> + ?Sized,
    S: AsRef<str>,
    F: Font,
{
    fn measure(&self, _available: Vec3) -> Vec3 {
        self.extent()
    }

    fn paint(&self, _size: Vec3, canvas: &mut C) {
        canvas.draw_text(self.content.as_ref(), &self.font, &self.color);
    }

    fn handle(&mut self, _size: Vec3, event: &mut Event) -> Result<bool> {
        Ok(event.hit(self.extent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toys_render::{Mono, TextGrid};

    #[test]
    fn measures_with_font() {
        let t = Text::new("this is text", Mono, ());
        assert_eq!(
            Toy::<TextGrid>::measure(&t, Vec3::xy(3, 3)),
            Vec3::xy(12, 1)
        );
    }

    #[test]
    fn paints_at_origin_and_clips() {
        let mut grid = TextGrid::new(Vec3::xy(8, 2));
        Text::new(String::from("this is text"), Mono, ()).paint(grid.size(), &mut grid);
        assert_eq!(grid.to_text(), "this is \n........");
    }

    #[test]
    fn hit_uses_measured_extent() {
        let mut t = Text::new("ok", Mono, ());
        let big = Vec3::xy(16, 16);
        assert_eq!(
            Toy::<TextGrid>::handle(&mut t, big, &mut Event::click(1, 0)),
            Ok(true)
        );
        assert_eq!(
            Toy::<TextGrid>::handle(&mut t, big, &mut Event::click(2, 0)),
            Ok(false)
        );
    }
}
