#![forbid(unsafe_code)]

//! Event loop and backend boundary for toys.
//!
//! # Role in toys
//! `toys-runtime` connects a widget tree to the outside world. Backends
//! implement [`EventSource`] and [`Surface`]; the [`Reactor`] pulls events,
//! dispatches them into the tree, repaints, and stops when a handler
//! requests exit through the shared [`RunState`](toys_core::RunState).
//!
//! # Primary responsibilities
//! - **Backend traits**: input and output halves of the platform boundary.
//! - **Reactor**: init, initial paint, dispatch loop, exit code.
//! - **Config**: repaint policy, initial paint, event budget.
//! - **Headless**: scripted events and a text-grid surface.

pub mod backend;
pub mod config;
pub mod error;
pub mod headless;
pub mod reactor;

pub use backend::{EventSource, Surface};
pub use config::{ReactorConfig, Repaint};
pub use error::{BackendError, Result, RunError};
pub use headless::{DEFAULT_HISTORY, GridSurface, ScriptedEvents};
pub use reactor::Reactor;
