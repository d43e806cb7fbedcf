#![forbid(unsafe_code)]

//! The event loop.
//!
//! A [`Reactor`] owns a surface, an event source, the root toy and the
//! controller side of the run/exit state. [`Reactor::run`] resets the state,
//! paints once, then hands every event to the root toy until a handler asks
//! to exit through its [`ExitHandle`](toys_core::ExitHandle).
//!
//! ```
//! use toys_core::{Event, PointEvent, RunState};
//! use toys_runtime::{GridSurface, Reactor, ScriptedEvents};
//! use toys_widgets::flat::{on_click, rc};
//!
//! let state = RunState::new();
//! let exit = state.exit_handle();
//! let root = on_click(move |_: &mut PointEvent| exit.exit(7), rc('#'));
//!
//! let mut reactor = Reactor::new(
//!     GridSurface::new(toys_core::Vec3::xy(2, 1)),
//!     ScriptedEvents::new([Event::click(0, 0)]),
//!     root,
//!     state,
//! );
//! assert_eq!(reactor.run().unwrap(), 7);
//! ```

use toys_core::{Event, RunState};
use toys_widgets::Toy;
use tracing::{debug, info, trace};

use crate::backend::{EventSource, Surface};
use crate::config::ReactorConfig;
use crate::error::{Result, RunError};

/// Drives a toy tree from an event source onto a surface.
pub struct Reactor<S, E, T> {
    surface: S,
    events: E,
    root: T,
    state: RunState,
    config: ReactorConfig,
    frames: u64,
    handled: u64,
}

impl<S, E, T> Reactor<S, E, T>
where
    S: Surface,
    E: EventSource,
    T: Toy<S::Canvas>,
{
    /// Create a reactor with default configuration.
    pub fn new(surface: S, events: E, root: T, state: RunState) -> Self {
        Self::with_config(surface, events, root, state, ReactorConfig::default())
    }

    /// Create a reactor with the specified configuration.
    pub fn with_config(
        surface: S,
        events: E,
        root: T,
        state: RunState,
        config: ReactorConfig,
    ) -> Self {
        Self {
            surface,
            events,
            root,
            state,
            config,
            frames: 0,
            handled: 0,
        }
    }

    /// Paint the whole tree at the surface size and present it.
    pub fn draw(&mut self) -> Result<()> {
        let size = self.surface.size();
        let canvas = self.surface.begin_frame();
        self.root.paint(size, canvas);
        self.surface
            .present()
            .map_err(|err| RunError::Present(Box::new(err)))?;
        self.frames += 1;
        trace!(frame = self.frames, w = size.x, h = size.y, "frame presented");
        Ok(())
    }

    /// Offer one event to the tree, repainting according to the
    /// configured policy. Returns whether the event was consumed.
    pub fn dispatch(&mut self, mut event: Event) -> Result<bool> {
        let size = self.surface.size();
        let consumed = self.root.handle(size, &mut event)?;
        self.handled += 1;
        trace!(
            kind = ?event.kind(),
            x = event.point().origin().x,
            y = event.point().origin().y,
            consumed,
            "event dispatched"
        );
        if self.config.repaints_after(consumed) {
            self.draw()?;
        }
        Ok(consumed)
    }

    /// Run until a handler requests exit; returns the requested exit code.
    ///
    /// Fails if the source closes or the event budget runs out first, or if
    /// a handler, the source or the surface fails.
    pub fn run(&mut self) -> Result<i32> {
        self.state.init();
        self.handled = 0;
        info!(
            w = self.surface.size().x,
            h = self.surface.size().y,
            "reactor starting"
        );

        if self.config.paint_on_start {
            self.draw()?;
        }

        while !self.state.exiting() {
            let handled = self.handled;
            if let Some(limit) = self.config.max_events.filter(|&limit| handled >= limit) {
                debug!(limit, "event budget exhausted");
                return Err(RunError::EventBudgetExhausted { limit });
            }

            let event = self
                .events
                .next_event()
                .map_err(|err| RunError::Source(Box::new(err)))?;
            match event {
                Some(event) => {
                    self.dispatch(event)?;
                }
                None => {
                    debug!(handled = self.handled, "event source closed");
                    return Err(RunError::SourceClosed);
                }
            }
        }

        let code = self.state.exit_code();
        info!(code, handled = self.handled, frames = self.frames, "reactor exiting");
        Ok(code)
    }
}

impl<S, E, T> Reactor<S, E, T> {
    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The event source, mutably.
    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    /// The root toy.
    pub fn root(&self) -> &T {
        &self.root
    }

    /// The run/exit state.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Events dispatched by the current or last `run`.
    pub fn handled(&self) -> u64 {
        self.handled
    }

    /// Take the reactor apart.
    pub fn into_parts(self) -> (S, E, T) {
        (self.surface, self.events, self.root)
    }
}
