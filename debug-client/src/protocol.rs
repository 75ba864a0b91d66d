// ENSIME debug protocol definitions
//
// Only the message shapes this client produces and consumes are modelled here.
// Every payload is a JSON object discriminated by its `typehint` field.

use std::path::PathBuf;
use thiserror::Error;

pub type DebugResult<T> = Result<T, DebugError>;

#[derive(Debug, Error)]
pub enum DebugError {
    #[error("No file path available for the current buffer")]
    NoFilePath,

    #[error("File path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Invalid line number: {0}")]
    InvalidLine(u32),

    #[error("No thread id has been reported by the debugger yet")]
    NoKnownThread,

    #[error("Event payload has no typehint")]
    MissingTypehint,

    #[error("Malformed {typehint} event: {source}")]
    MalformedEvent {
        typehint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid attach port: {0}")]
    InvalidPort(String),

    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Debugger client task shut down")]
    ClientClosed,
}

// Field carrying the variant name on every payload
pub const TYPEHINT_FIELD: &str = "typehint";

// Outbound request typehints
pub mod request_types {
    pub const SET_BREAK: &str = "DebugSetBreakReq";
    pub const CLEAR_BREAK: &str = "DebugClearBreakReq";
    pub const CLEAR_ALL_BREAKS: &str = "DebugClearAllBreaksReq";
    pub const LIST_BREAKPOINTS: &str = "DebugListBreakpointsReq";
    pub const ATTACH: &str = "DebugAttachReq";
    pub const CONTINUE: &str = "DebugContinueReq";
    pub const STEP: &str = "DebugStepReq";
    pub const STEP_OUT: &str = "DebugStepOutReq";
    pub const NEXT: &str = "DebugNextReq";
    pub const BACKTRACE: &str = "DebugBacktraceReq";
}

// Inbound event typehints
pub mod event_types {
    pub const VM_START: &str = "DebugVmStartEvent";
    pub const VM_DISCONNECT: &str = "DebugVmDisconnectEvent";
    pub const BREAK: &str = "DebugBreakEvent";
    pub const OUTPUT: &str = "DebugOutputEvent";
    pub const BACKTRACE: &str = "DebugBacktrace";
    pub const BREAKPOINT_LIST: &str = "BreakpointList";
}

/// Upper bound on source positions the server resolves for a set/clear request
pub const MAX_RESULTS: u32 = 10;

/// First frame requested by a backtrace
pub const BACKTRACE_INDEX: u32 = 0;

/// Number of frames requested by a backtrace
pub const BACKTRACE_COUNT: u32 = 100;

pub const DEFAULT_ATTACH_HOST: &str = "localhost";
pub const DEFAULT_ATTACH_PORT: u16 = 5005;
