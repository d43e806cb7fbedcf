#![forbid(unsafe_code)]

//! Render capabilities: canvases, fonts, and headless targets.
//!
//! # Role in toys
//! Widgets never talk to a concrete renderer. They ask for the smallest
//! capability they need: a [`Canvas`] to read the current origin, [`Fill`]
//! to paint a solid rectangle, [`DrawText`] to paint a string with a
//! [`Font`]. Any backend implementing these can host a widget tree.
//!
//! # Primary responsibilities
//! - **Capabilities**: `Canvas`, `Fill<P>`, `DrawText<F, K>`, `Font`.
//! - **TextGrid**: a character-cell canvas used for deterministic tests and
//!   the headless backend.
//! - **Mono**: a monospace font measuring strings in terminal cells.
//! - **Recorder**: a canvas that logs every draw operation with its origin.

pub mod canvas;
pub mod grid;
pub mod recorder;
pub mod text;

pub use canvas::{Canvas, DrawText, Fill};
pub use grid::TextGrid;
pub use recorder::{DrawOp, Recorder};
pub use text::{Font, Mono};
