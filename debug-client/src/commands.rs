// User commands
//
// Entry points a host binding exposes. Each one mutates local state, builds a
// request and hands it to the transport without waiting for a reply.

use crate::types::AttachTarget;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetBreakpoint,
    ClearBreakpoint,
    ClearAllBreakpoints,
    ListBreakpoints,
    /// Attach to a VM; `None` uses the configured default target
    Attach(Option<AttachTarget>),
    Continue,
    Step,
    StepOut,
    Next,
    Backtrace,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::SetBreakpoint => "set_breakpoint",
            Command::ClearBreakpoint => "clear_breakpoint",
            Command::ClearAllBreakpoints => "clear_all_breakpoints",
            Command::ListBreakpoints => "list_breakpoints",
            Command::Attach(_) => "attach",
            Command::Continue => "continue",
            Command::Step => "step",
            Command::StepOut => "step_out",
            Command::Next => "next",
            Command::Backtrace => "backtrace",
        };
        f.write_str(name)
    }
}
