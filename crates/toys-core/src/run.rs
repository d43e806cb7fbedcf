#![forbid(unsafe_code)]

//! Run/exit state shared between a driving loop and the widgets it drives.
//!
//! [`RunState`] is owned by whoever runs the event loop. Widgets that need to
//! stop the loop receive an [`ExitHandle`] when the tree is built; handles are
//! cheap to clone and observe the same state.
//!
//! ```
//! use toys_core::run::RunState;
//!
//! let state = RunState::new();
//! let handle = state.exit_handle();
//! assert!(!state.exiting());
//! handle.exit(3);
//! assert!(state.exiting());
//! assert_eq!(state.exit_code(), 3);
//! state.init();
//! assert!(!state.exiting());
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Status {
    exiting: bool,
    code: i32,
}

/// The controller side of the run/exit state.
#[derive(Clone, Default)]
pub struct RunState {
    status: Rc<Cell<Status>>,
}

impl RunState {
    /// Create a state that is not exiting, with exit code 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to not exiting, exit code 0.
    pub fn init(&self) {
        self.status.set(Status::default());
    }

    /// Request exit with `code`.
    pub fn exit(&self, code: i32) {
        self.status.set(Status {
            exiting: true,
            code,
        });
    }

    /// Whether exit has been requested.
    #[inline]
    pub fn exiting(&self) -> bool {
        self.status.get().exiting
    }

    /// The code passed to the last [`RunState::exit`] call, or 0.
    #[inline]
    pub fn exit_code(&self) -> i32 {
        self.status.get().code
    }

    /// A request-exit capability observing this state.
    pub fn exit_handle(&self) -> ExitHandle {
        ExitHandle {
            status: Rc::clone(&self.status),
        }
    }
}

impl fmt::Debug for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status.get();
        f.debug_struct("RunState")
            .field("exiting", &status.exiting)
            .field("code", &status.code)
            .finish()
    }
}

/// Request-exit capability handed to widgets.
#[derive(Clone)]
pub struct ExitHandle {
    status: Rc<Cell<Status>>,
}

impl ExitHandle {
    /// Request exit with `code`.
    pub fn exit(&self, code: i32) {
        self.status.set(Status {
            exiting: true,
            code,
        });
    }

    /// Whether exit has been requested.
    pub fn exiting(&self) -> bool {
        self.status.get().exiting
    }
}

impl fmt::Debug for ExitHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitHandle")
            .field("exiting", &self.exiting())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        let state = RunState::new();
        assert!(!state.exiting());
        assert_eq!(state.exit_code(), 0);
    }

    #[test]
    fn last_exit_code_wins() {
        let state = RunState::new();
        let a = state.exit_handle();
        let b = a.clone();
        a.exit(1);
        b.exit(2);
        assert!(state.exiting());
        assert_eq!(state.exit_code(), 2);
    }

    #[test]
    fn init_resets_after_exit() {
        let state = RunState::new();
        state.exit(5);
        state.init();
        assert!(!state.exiting());
        assert_eq!(state.exit_code(), 0);
        assert!(!state.exit_handle().exiting());
    }
}
