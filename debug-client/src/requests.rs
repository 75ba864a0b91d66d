// Outbound debugger requests
//
// Building a request is pure: it never touches the registry or the session.
// The caller pairs each successful build with exactly one local state change.

use crate::protocol::{DebugError, DebugResult, BACKTRACE_COUNT, BACKTRACE_INDEX, MAX_RESULTS};
use crate::types::{AttachTarget, ThreadId};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "typehint")]
pub enum DebugRequest {
    #[serde(rename = "DebugSetBreakReq", rename_all = "camelCase")]
    SetBreak {
        file: String,
        line: u32,
        max_results: u32,
    },
    #[serde(rename = "DebugClearBreakReq", rename_all = "camelCase")]
    ClearBreak {
        file: String,
        line: u32,
        max_results: u32,
    },
    #[serde(rename = "DebugClearAllBreaksReq")]
    ClearAllBreaks,
    #[serde(rename = "DebugListBreakpointsReq")]
    ListBreakpoints,
    // The server expects the port as a string
    #[serde(rename = "DebugAttachReq")]
    Attach { hostname: String, port: String },
    #[serde(rename = "DebugContinueReq", rename_all = "camelCase")]
    Continue { thread_id: ThreadId },
    #[serde(rename = "DebugStepReq", rename_all = "camelCase")]
    Step { thread_id: ThreadId },
    #[serde(rename = "DebugStepOutReq", rename_all = "camelCase")]
    StepOut { thread_id: ThreadId },
    #[serde(rename = "DebugNextReq", rename_all = "camelCase")]
    Next { thread_id: ThreadId },
    #[serde(rename = "DebugBacktraceReq", rename_all = "camelCase")]
    Backtrace {
        thread_id: ThreadId,
        index: u32,
        count: u32,
    },
}

/// Execution control commands that target the stopped thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeKind {
    Continue,
    Step,
    StepOut,
    Next,
}

/// Check the editor location a set/clear request is built from. The server
/// only takes UTF-8 file names.
fn validate_location(path: Option<&Path>, line: u32) -> DebugResult<String> {
    let path = path
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(DebugError::NoFilePath)?;

    if line == 0 {
        return Err(DebugError::InvalidLine(line));
    }

    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| DebugError::NonUtf8Path(path.to_path_buf()))
}

fn require_thread(thread: Option<&ThreadId>) -> DebugResult<ThreadId> {
    thread.cloned().ok_or(DebugError::NoKnownThread)
}

impl DebugRequest {
    pub fn set_break(path: Option<&Path>, line: u32) -> DebugResult<Self> {
        let file = validate_location(path, line)?;
        Ok(DebugRequest::SetBreak {
            file,
            line,
            max_results: MAX_RESULTS,
        })
    }

    pub fn clear_break(path: Option<&Path>, line: u32) -> DebugResult<Self> {
        let file = validate_location(path, line)?;
        Ok(DebugRequest::ClearBreak {
            file,
            line,
            max_results: MAX_RESULTS,
        })
    }

    pub fn attach(target: &AttachTarget) -> Self {
        DebugRequest::Attach {
            hostname: target.host.clone(),
            port: target.port.to_string(),
        }
    }

    /// Build a continue/step request for `thread`.
    ///
    /// The thread may be stale (the VM could have resumed or disconnected since
    /// it was reported); only a thread that was never known is rejected.
    pub fn resume(kind: ResumeKind, thread: Option<&ThreadId>) -> DebugResult<Self> {
        let thread_id = require_thread(thread)?;
        Ok(match kind {
            ResumeKind::Continue => DebugRequest::Continue { thread_id },
            ResumeKind::Step => DebugRequest::Step { thread_id },
            ResumeKind::StepOut => DebugRequest::StepOut { thread_id },
            ResumeKind::Next => DebugRequest::Next { thread_id },
        })
    }

    pub fn backtrace(thread: Option<&ThreadId>) -> DebugResult<Self> {
        Ok(DebugRequest::Backtrace {
            thread_id: require_thread(thread)?,
            index: BACKTRACE_INDEX,
            count: BACKTRACE_COUNT,
        })
    }

    /// Wire form of this request
    pub fn to_payload(&self) -> serde_json::Value {
        // Every field is a string or an integer
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn typehint(&self) -> &'static str {
        use crate::protocol::request_types::*;
        match self {
            DebugRequest::SetBreak { .. } => SET_BREAK,
            DebugRequest::ClearBreak { .. } => CLEAR_BREAK,
            DebugRequest::ClearAllBreaks => CLEAR_ALL_BREAKS,
            DebugRequest::ListBreakpoints => LIST_BREAKPOINTS,
            DebugRequest::Attach { .. } => ATTACH,
            DebugRequest::Continue { .. } => CONTINUE,
            DebugRequest::Step { .. } => STEP,
            DebugRequest::StepOut { .. } => STEP_OUT,
            DebugRequest::Next { .. } => NEXT,
            DebugRequest::Backtrace { .. } => BACKTRACE,
        }
    }
}
