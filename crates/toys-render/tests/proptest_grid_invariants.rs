//! Property-based invariant tests for the text grid.
//!
//! 1. A fill paints exactly the clipped intersection with the grid.
//! 2. Painting through a translation guard leaves the origin at zero.

use proptest::prelude::*;
use toys_core::{TranslateExt, Vec3};
use toys_render::{Canvas, Fill, TextGrid};

fn overlap(origin: i32, len: i32, bound: i32) -> i32 {
    let start = origin.max(0);
    let end = (origin + len).min(bound);
    (end - start).max(0)
}

proptest! {
    #[test]
    fn fill_paints_clipped_area(
        w in 0i32..24, h in 0i32..24,
        ox in -30i32..30, oy in -30i32..30,
        sw in -4i32..30, sh in -4i32..30,
    ) {
        let mut grid = TextGrid::new(Vec3::xy(w, h));
        {
            let mut moved = grid.translation(Vec3::xy(ox, oy));
            moved.fill_rect(Vec3::xy(sw, sh), &'#');
        }
        let expected = if sw <= 0 || sh <= 0 {
            0
        } else {
            overlap(ox, sw, w) * overlap(oy, sh, h)
        };
        prop_assert_eq!(grid.count('#') as i32, expected);
        prop_assert_eq!(grid.offset(), Vec3::ZERO);
    }
}
