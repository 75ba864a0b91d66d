// Debug session state
//
// Lives from VM start to VM disconnect. The breakpoint registry outlives it.

use crate::types::{Breakpoint, ThreadId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmState {
    Disconnected,
    Running,
    Stopped,
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VmState::Disconnected => write!(f, "disconnected"),
            VmState::Running => write!(f, "running"),
            VmState::Stopped => write!(f, "stopped"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DebugSession {
    state: VmState,
    stopped_thread: Option<ThreadId>,
    current_location: Option<Breakpoint>,
}

impl DebugSession {
    /// Session for a VM that has just started
    pub fn running() -> Self {
        Self {
            state: VmState::Running,
            stopped_thread: None,
            current_location: None,
        }
    }

    pub fn state(&self) -> VmState {
        self.state
    }

    pub fn stopped_thread(&self) -> Option<&ThreadId> {
        self.stopped_thread.as_ref()
    }

    /// Where execution is paused, if it is
    pub fn current_location(&self) -> Option<&Breakpoint> {
        self.current_location.as_ref()
    }

    /// Record a break hit. Either part may be unknown if the event was partial.
    /// A known location always replaces the current one; a missing location
    /// keeps it only while the same thread stays stopped.
    pub fn stop(&mut self, thread: Option<ThreadId>, location: Option<Breakpoint>) {
        self.state = VmState::Stopped;

        let other_thread = thread.is_some() && thread != self.stopped_thread;
        if location.is_some() || other_thread {
            self.current_location = location;
        }
        if thread.is_some() {
            self.stopped_thread = thread;
        }
    }

    /// Execution was asked to continue; nothing is stopped any more
    pub fn resume(&mut self) {
        self.state = VmState::Running;
        self.stopped_thread = None;
        self.current_location = None;
    }
}
