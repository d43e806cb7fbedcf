//! Property-based invariant tests for vectors, strategies and translation.
//!
//! 1. Checked indexing agrees with `Index<Axis>` inside 0..3 and fails outside.
//! 2. `contains` implies `contains_xy`.
//! 3. `Abs` ignores its input; `Rel(0)` is 0 and `Rel(1)` is identity.
//! 4. `Xy` passes `z` through unchanged.
//! 5. Any stack of translation guards leaves the frame where it started.

use proptest::prelude::*;
use toys_core::{Abs, Axis, Event, Extent, Rel, ToyError, Transform, TranslateExt, Vec3, xy};

// ── Helpers ─────────────────────────────────────────────────────────────

fn vec3() -> impl Strategy<Value = Vec3> {
    (-1000i32..=1000, -1000i32..=1000, -1000i32..=1000).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn size() -> impl Strategy<Value = Vec3> {
    (0i32..=500, 0i32..=500).prop_map(|(x, y)| Vec3::xy(x, y))
}

fn translate_all(event: &mut Event, offsets: &[Vec3]) {
    if let Some((first, rest)) = offsets.split_first() {
        let mut moved = event.translation(*first);
        translate_all(&mut moved, rest);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Checked indexing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn checked_index_matches_axis(v in vec3(), index in 0usize..6) {
        match Axis::try_from(index) {
            Ok(axis) => {
                prop_assert_eq!(v.try_get(index), Ok(v[axis]));
                prop_assert_eq!(v[index], v[axis]);
            }
            Err(err) => {
                prop_assert_eq!(err, ToyError::InvalidIndex(index));
                prop_assert_eq!(v.try_get(index), Err(ToyError::InvalidIndex(index)));
            }
        }
    }

    #[test]
    fn try_set_then_get(v in vec3(), axis in 0usize..3, value in -50i32..50) {
        let mut w = v;
        prop_assert!(w.try_set(axis, value).is_ok());
        prop_assert_eq!(w.try_get(axis), Ok(value));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contains_implies_planar_contains(s in vec3(), p in vec3()) {
        if s.contains(p) {
            prop_assert!(s.contains_xy(p));
        }
    }

    #[test]
    fn empty_size_contains_nothing(p in vec3()) {
        prop_assert!(!Vec3::ZERO.contains_xy(p));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Strategies
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn abs_is_constant(n in -100i32..100, len in 0i32..10_000) {
        prop_assert_eq!(Abs(n).extent(len), n);
    }

    #[test]
    fn rel_bounds(len in 0i32..10_000) {
        prop_assert_eq!(Rel(0.0).extent(len), 0);
        prop_assert_eq!(Rel(1.0).extent(len), len);
        let half = Rel(0.5).extent(len);
        prop_assert!((0..=len).contains(&half));
    }

    #[test]
    fn xy_passes_z_through(available in vec3(), a in 0i32..50, f in 0.0f32..=1.0) {
        prop_assert_eq!(xy(a, f).transform(available).z, available.z);
        prop_assert_eq!(xy(f, a).transform(available).z, available.z);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Translation restoration
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nested_translations_restore(
        origin in size(),
        offsets in proptest::collection::vec(vec3(), 0..16),
    ) {
        let mut event = Event::click(origin.x, origin.y);
        let before = event;
        translate_all(&mut event, &offsets);
        prop_assert_eq!(event, before);
    }

    #[test]
    fn translated_hit_matches_shifted_rect(p in size(), t in size(), s in size()) {
        let mut event = Event::click(p.x, p.y);
        let moved = event.translation(t);
        prop_assert_eq!(moved.hit(s), s.contains_xy(p - t));
    }
}
