#![forbid(unsafe_code)]

//! Headless backend: scripted input and a text-grid surface.
//!
//! Lets a widget tree run under the real reactor in tests and examples,
//! with every presented frame kept as text.

use std::collections::VecDeque;
use std::convert::Infallible;

use toys_core::{Event, Vec3};
use toys_render::TextGrid;

use crate::backend::{EventSource, Surface};

/// An event source replaying a fixed queue.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    /// Append an event.
    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Events not yet delivered.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl EventSource for ScriptedEvents {
    type Error = Infallible;

    fn next_event(&mut self) -> Result<Option<Event>, Infallible> {
        Ok(self.queue.pop_front())
    }
}

/// Frames a [`GridSurface`] keeps unless configured otherwise.
pub const DEFAULT_HISTORY: usize = 256;

/// A surface painting into a [`TextGrid`] and recording the most recent
/// presented frames as text.
///
/// At most `history` frames are kept; older ones are dropped as new frames
/// are presented. [`GridSurface::presented`] counts every frame regardless.
#[derive(Debug, Clone)]
pub struct GridSurface {
    grid: TextGrid,
    frames: Vec<String>,
    history: usize,
    presented: u64,
}

impl GridSurface {
    /// Create a surface keeping the last [`DEFAULT_HISTORY`] frames.
    pub fn new(size: Vec3) -> Self {
        Self::with_history(size, DEFAULT_HISTORY)
    }

    /// Create a surface keeping the last `history` frames.
    pub fn with_history(size: Vec3, history: usize) -> Self {
        Self {
            grid: TextGrid::new(size),
            frames: Vec::new(),
            history,
            presented: 0,
        }
    }

    /// The grid as last painted.
    pub fn grid(&self) -> &TextGrid {
        &self.grid
    }

    /// Retained frames, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Frames presented since creation, including dropped ones.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Surface for GridSurface {
    type Canvas = TextGrid;
    type Error = Infallible;

    fn size(&self) -> Vec3 {
        self.grid.size()
    }

    fn begin_frame(&mut self) -> &mut TextGrid {
        self.grid.clear();
        &mut self.grid
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.presented += 1;
        if self.history == 0 {
            return Ok(());
        }
        if self.frames.len() == self.history {
            self.frames.remove(0);
        }
        self.frames.push(self.grid.to_text());
        Ok(())
    }
}
