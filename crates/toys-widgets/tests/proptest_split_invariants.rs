//! Property-based invariant tests for the split and placement combinators.
//!
//! 1. A split measures exactly the available size.
//! 2. Absolute and relative split layouts tile the axis without overlap.
//! 3. Dispatch through any split leaves the event frame untouched.
//! 4. `At` measure adds its offset to the child's measure.

use proptest::prelude::*;
use toys_core::{Abs, Axis, Event, Rel, Vec3};
use toys_render::TextGrid;
use toys_widgets::flat::{at, rc, sz};
use toys_widgets::{Split, Toy};

// ── Helpers ─────────────────────────────────────────────────────────────

fn size() -> impl Strategy<Value = Vec3> {
    (0i32..=256, 0i32..=256).prop_map(|(x, y)| Vec3::xy(x, y))
}

fn planar_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y)]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Split measure is identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn split_measure_is_identity(
        available in size(),
        axis in planar_axis(),
        cut in -10i32..300,
        fraction in 0.0f32..=1.0,
    ) {
        let absolute = Split::new(axis, Abs(cut), rc('a'), rc('b'));
        let relative = Split::new(axis, Rel(fraction), rc('a'), sz(Vec3::xy(1, 1), rc('b')));
        prop_assert_eq!(Toy::<TextGrid>::measure(&absolute, available), available);
        prop_assert_eq!(Toy::<TextGrid>::measure(&relative, available), available);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Layouts tile the split axis
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rect_halves_tile_the_axis(
        available in size(),
        axis in planar_axis(),
        fraction in 0.0f32..=1.0,
    ) {
        let split = Split::new(axis, Rel(fraction), rc('a'), rc('b'));
        let layout = split.layout::<TextGrid>(available);
        prop_assert_eq!(layout.first[axis] + layout.second[axis], available[axis]);
        prop_assert_eq!(layout.second_at[axis], layout.first[axis]);
        let other = if axis == Axis::X { Axis::Y } else { Axis::X };
        prop_assert_eq!(layout.first[other], available[other]);
        prop_assert_eq!(layout.second[other], available[other]);
    }

    #[test]
    fn painted_cells_match_layout(w in 1i32..24, h in 1i32..24, cut in 0i32..24) {
        let available = Vec3::xy(w, h);
        let split = Split::new(Axis::X, Abs(cut.min(w)), rc('a'), rc('b'));
        let mut grid = TextGrid::new(available);
        split.paint(available, &mut grid);
        prop_assert_eq!(grid.count('a') as i32, cut.min(w) * h);
        prop_assert_eq!(grid.count('b') as i32, (w - cut.min(w)) * h);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Dispatch restores the frame
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dispatch_restores_frame(
        available in size(),
        axis in planar_axis(),
        cut in 0i32..256,
        px in -20i32..280,
        py in -20i32..280,
    ) {
        let mut split = Split::new(axis, Abs(cut), at(Vec3::xy(2, 2), rc('a')), rc('b'));
        let mut event = Event::click(px, py);
        let consumed = Toy::<TextGrid>::handle(&mut split, available, &mut event);
        prop_assert!(consumed.is_ok());
        prop_assert_eq!(event.offset(), Vec3::ZERO);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. At measure
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn at_measure_adds_offset(available in size(), offset in size(), inner in size()) {
        let toy = at(offset, sz(inner, rc('x')));
        prop_assert_eq!(Toy::<TextGrid>::measure(&toy, available), inner + offset);
    }
}
