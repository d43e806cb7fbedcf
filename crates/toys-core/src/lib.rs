#![forbid(unsafe_code)]

//! Core: geometry, split strategies, events, and coordinate frames.
//!
//! # Role in toys
//! `toys-core` holds the vocabulary every other crate speaks. It has no
//! notion of widgets or canvases; it only knows sizes, how to cut them, how
//! to move a frame of reference, and what a pointer event is.
//!
//! # Primary responsibilities
//! - **Vec3 / Axis**: integer sizes and positions with checked indexing.
//! - **Strategies**: absolute and relative lengths, two-axis transforms.
//! - **Translation**: the `Translate` capability and its scoped guard.
//! - **Event**: tagged pointer events with hit testing.
//! - **RunState**: run/exit status shared with the driving loop.

pub mod error;
pub mod event;
pub mod geometry;
pub mod run;
pub mod strategy;
pub mod translate;

pub use error::{HandlerResult, Result, ToyError};
pub use event::{Event, EventKind, Modifiers, MouseButton, PointEvent};
pub use geometry::{Axis, Vec3};
pub use run::{ExitHandle, RunState};
pub use strategy::{Abs, Extent, IntoExtent, MID, Rel, Transform, Xy, xy};
pub use translate::{Translate, TranslateExt, Translation};
