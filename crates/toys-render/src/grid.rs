#![forbid(unsafe_code)]

//! Character-cell canvas.
//!
//! `TextGrid` is a fixed-size grid of `char` cells with a movable origin.
//! Writes outside the grid are clipped silently, so widgets may paint past
//! the edge of the surface they were given.
//!
//! # Usage
//!
//! ```
//! use toys_core::{TranslateExt, Vec3};
//! use toys_render::{Fill, TextGrid};
//!
//! let mut grid = TextGrid::new(Vec3::xy(4, 2));
//! {
//!     let mut moved = grid.translation(Vec3::xy(1, 0));
//!     moved.fill_rect(Vec3::xy(2, 2), &'#');
//! }
//! assert_eq!(grid.to_text(), ".##.\n.##.");
//! ```

use std::fmt;
use std::ops::Range;

use toys_core::{Translate, Vec3};

use crate::canvas::{Canvas, DrawText, Fill};
use crate::text::Mono;

/// Cell value of an untouched grid.
pub const BLANK: char = '.';

/// A grid of character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    size: Vec3,
    cells: Vec<char>,
    offset: Vec3,
}

impl TextGrid {
    /// Create a blank grid. Negative dimensions are treated as zero.
    pub fn new(size: Vec3) -> Self {
        let size = Vec3::xy(size.x, size.y).clamp_non_negative();
        Self {
            size,
            cells: vec![BLANK; (size.x as usize) * (size.y as usize)],
            offset: Vec3::ZERO,
        }
    }

    /// Grid dimensions (`z == 0`).
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Reset every cell to [`BLANK`] and the origin to zero.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
        self.offset = Vec3::ZERO;
    }

    #[inline]
    fn index(&self, p: Vec3) -> Option<usize> {
        if self.size.contains_xy(p) {
            Some(p.y as usize * self.size.x as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Cells covered by `[origin, origin + size)` that lie inside the grid,
    /// as column and row ranges.
    fn visible(&self, origin: Vec3, size: Vec3) -> (Range<usize>, Range<usize>) {
        (
            clip_span(origin.x, size.x, self.size.x),
            clip_span(origin.y, size.y, self.size.y),
        )
    }

    /// Cell at an absolute position.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(Vec3::xy(x, y)).map(|i| self.cells[i])
    }

    /// Write a cell at an absolute position; clipped outside the grid.
    #[inline]
    pub fn set_raw(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.index(Vec3::xy(x, y)) {
            self.cells[i] = ch;
        }
    }

    /// One row as a string, or `None` past the last row.
    pub fn row(&self, y: i32) -> Option<String> {
        if y < 0 || y >= self.size.y {
            return None;
        }
        let w = self.size.x as usize;
        let start = y as usize * w;
        Some(self.cells[start..start + w].iter().collect())
    }

    /// All rows joined with `\n`.
    pub fn to_text(&self) -> String {
        (0..self.size.y)
            .filter_map(|y| self.row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of cells holding `ch`.
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|&&c| c == ch).count()
    }
}

/// Intersection of `[origin, origin + len)` with `[0, bound)`.
fn clip_span(origin: i32, len: i32, bound: i32) -> Range<usize> {
    let start = i64::from(origin).max(0);
    let end = (i64::from(origin) + i64::from(len)).min(i64::from(bound));
    if end <= start {
        return 0..0;
    }
    // Both ends lie in [0, bound], so they fit in usize.
    start as usize..end as usize
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Translate for TextGrid {
    #[inline]
    fn translate(&mut self, offset: Vec3) {
        self.offset = self.offset.wrapping_add(offset);
    }
}

impl Canvas for TextGrid {
    #[inline]
    fn offset(&self) -> Vec3 {
        self.offset
    }
}

impl Fill<char> for TextGrid {
    fn fill_rect(&mut self, size: Vec3, pixel: &char) {
        let (columns, rows) = self.visible(self.offset, size);
        if columns.is_empty() {
            return;
        }
        let width = self.size.x as usize;
        for y in rows {
            let row = y * width;
            self.cells[row + columns.start..row + columns.end].fill(*pixel);
        }
    }
}

impl<K: ?Sized> DrawText<Mono, K> for TextGrid {
    fn draw_text(&mut self, text: &str, _font: &Mono, _color: &K) {
        let origin = self.offset;
        let mut column = 0;
        for ch in text.chars() {
            let width = Mono::char_width(ch);
            if width == 0 {
                continue;
            }
            let x = origin.x.saturating_add(column);
            if x >= self.size.x {
                break;
            }
            self.set_raw(x, origin.y, ch);
            for pad in 1..width {
                self.set_raw(x.saturating_add(pad), origin.y, ' ');
            }
            column = column.saturating_add(width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toys_core::TranslateExt;

    #[test]
    fn new_grid_is_blank() {
        let grid = TextGrid::new(Vec3::xy(3, 2));
        assert_eq!(grid.to_text(), "...\n...");
        assert_eq!(grid.count(BLANK), 6);
    }

    #[test]
    fn negative_size_is_empty() {
        let grid = TextGrid::new(Vec3::xy(-3, 2));
        assert_eq!(grid.size(), Vec3::xy(0, 2));
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn fill_clips_at_edges() {
        let mut grid = TextGrid::new(Vec3::xy(3, 3));
        {
            let mut moved = grid.translation(Vec3::xy(2, -1));
            moved.fill_rect(Vec3::xy(5, 2), &'x');
        }
        assert_eq!(grid.to_text(), "..x\n...\n...");
        assert_eq!(grid.offset(), Vec3::ZERO);
    }

    #[test]
    fn fill_cost_follows_the_visible_area() {
        let mut grid = TextGrid::new(Vec3::xy(4, 4));
        grid.fill_rect(Vec3::xy(1_000_000_000, 1_000_000_000), &'x');
        assert_eq!(grid.count('x'), 16);

        grid.clear();
        {
            let mut moved = grid.translation(Vec3::xy(-1_000_000_000, 1));
            moved.fill_rect(Vec3::xy(1_000_000_001, 2), &'y');
        }
        assert_eq!(grid.to_text(), "....
y...
y...
....");
    }

    #[test]
    fn fill_at_extreme_origins_draws_nothing() {
        let mut grid = TextGrid::new(Vec3::xy(3, 3));
        {
            let mut moved = grid.translation(Vec3::xy(i32::MAX, i32::MIN));
            moved.fill_rect(Vec3::xy(i32::MAX, i32::MAX), &'z');
        }
        assert_eq!(grid.count('z'), 0);
        assert_eq!(grid.offset(), Vec3::ZERO);
    }

    #[test]
    fn draws_text_at_origin() {
        let mut grid = TextGrid::new(Vec3::xy(6, 2));
        {
            let mut moved = grid.translation(Vec3::xy(1, 1));
            moved.draw_text("hi", &Mono, &());
        }
        assert_eq!(grid.to_text(), "......\n.hi...");
    }

    #[test]
    fn wide_text_pads_second_cell() {
        let mut grid = TextGrid::new(Vec3::xy(4, 1));
        grid.draw_text("日a", &Mono, &());
        assert_eq!(grid.to_text(), "日 a.");
    }

    #[test]
    fn clear_resets_cells_and_origin() {
        let mut grid = TextGrid::new(Vec3::xy(2, 1));
        grid.set_raw(0, 0, 'z');
        grid.translate(Vec3::xy(1, 1));
        grid.clear();
        assert_eq!(grid.to_text(), "..");
        assert_eq!(grid.offset(), Vec3::ZERO);
    }
}
