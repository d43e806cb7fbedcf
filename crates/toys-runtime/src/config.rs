#![forbid(unsafe_code)]

//! Reactor configuration.

/// When the reactor repaints after dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repaint {
    /// After every event.
    Always,
    /// Only after events some toy consumed.
    #[default]
    OnConsume,
}

/// Configuration for a [`Reactor`](crate::Reactor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactorConfig {
    /// Repaint policy.
    pub repaint: Repaint,
    /// Paint once before waiting for the first event.
    pub paint_on_start: bool,
    /// Stop with an error after this many events without an exit request.
    pub max_events: Option<u64>,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            repaint: Repaint::OnConsume,
            paint_on_start: true,
            max_events: None,
        }
    }
}

impl ReactorConfig {
    /// Set the repaint policy.
    #[must_use]
    pub fn with_repaint(mut self, repaint: Repaint) -> Self {
        self.repaint = repaint;
        self
    }

    /// Skip the initial paint.
    #[must_use]
    pub fn without_initial_paint(mut self) -> Self {
        self.paint_on_start = false;
        self
    }

    /// Bound the number of events handled by one `run`.
    #[must_use]
    pub fn with_max_events(mut self, limit: u64) -> Self {
        self.max_events = Some(limit);
        self
    }

    /// Whether a dispatch that returned `consumed` must repaint.
    #[inline]
    pub fn repaints_after(&self, consumed: bool) -> bool {
        match self.repaint {
            Repaint::Always => true,
            Repaint::OnConsume => consumed,
        }
    }
}
