#![forbid(unsafe_code)]

//! Backend boundary.
//!
//! The reactor never talks to a window system. It pulls canonical
//! [`Event`] values from an [`EventSource`] and paints into whatever canvas
//! a [`Surface`] hands out for the current frame.

use toys_core::{Event, Vec3};

/// Input half of the backend boundary.
pub trait EventSource {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Block until the next event is available.
    ///
    /// Returns `Ok(None)` once the source is closed and no more events will
    /// arrive.
    fn next_event(&mut self) -> Result<Option<Event>, Self::Error>;
}

/// Output half of the backend boundary.
pub trait Surface {
    /// Canvas the widget tree paints into.
    type Canvas: ?Sized;

    /// Platform-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Current drawable size.
    fn size(&self) -> Vec3;

    /// Start a frame: clear the canvas and hand it out with its origin at zero.
    fn begin_frame(&mut self) -> &mut Self::Canvas;

    /// Show the frame painted since the last `begin_frame`.
    fn present(&mut self) -> Result<(), Self::Error>;
}
