#![forbid(unsafe_code)]

//! toys public facade crate.
//!
//! Re-exports the common types from the internal crates, offers a prelude
//! for day-to-day composition, and ships a couple of sample widgets built
//! only from the micro-widget combinators.
//!
//! ```
//! use toys::prelude::*;
//!
//! let ui = lr(8, rc('a'), rc('b'));
//! let mut grid = TextGrid::new(Vec3::xy(16, 1));
//! ui.paint(grid.size(), &mut grid);
//! assert_eq!(grid.to_text(), "aaaaaaaabbbbbbbb");
//! ```

pub mod samples;

// --- Core re-exports -------------------------------------------------------

pub use toys_core::{
    Abs, Axis, Event, EventKind, ExitHandle, Extent, HandlerResult, MID, Modifiers, MouseButton,
    PointEvent, Rel, Result, RunState, ToyError, Transform, Translate, Translation, Vec3, Xy, xy,
};

// --- Render re-exports -----------------------------------------------------

pub use toys_render::{Canvas, DrawOp, DrawText, Fill, Font, Mono, Recorder, TextGrid};

// --- Widget re-exports -----------------------------------------------------

pub use toys_widgets::{
    At, Bind, Boxed, Flat, Lay, Memory, On, OwnedToy, Rced, Rect, SharedToy, Split, Sz, Text, Toy,
    Toys, owned_toy, shared_toy,
};

// --- Runtime re-exports ----------------------------------------------------

pub use toys_runtime::{
    EventSource, GridSurface, Reactor, ReactorConfig, Repaint, RunError, ScriptedEvents, Surface,
};

pub use samples::{ResizingItem, radio_button, radio_face, resizing_item};

pub use toys_core as core;
pub use toys_render as render;
pub use toys_runtime as runtime;
pub use toys_widgets as widgets;

/// Everything needed to compose, paint and run a widget tree.
pub mod prelude {
    pub use crate::{
        Event, ExitHandle, Fill, MID, Mono, OwnedToy, PointEvent, Reactor, RunState, SharedToy,
        TextGrid, Toy, Toys, Vec3, owned_toy, shared_toy, xy,
    };

    pub use toys_widgets::flat::{at, bind, fb, fb_at, lay, lr, on, on_click, rc, sz, tx, ud};

    pub use crate::{core, render, runtime, widgets};
}
