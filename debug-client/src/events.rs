// Debugger event decoding
//
// Events arrive as JSON objects tagged by `typehint`. Decoding maps the tag to
// a typed variant; unrecognized tags decode to `Unknown` rather than failing.

use crate::protocol::{event_types, DebugError, DebugResult, TYPEHINT_FIELD};
use crate::types::ThreadId;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum DebugEvent {
    VmStart,
    VmDisconnect,
    Break(BreakEvent),
    Output(OutputEvent),
    Backtrace(Backtrace),
    BreakpointList(BreakpointListEvent),
    Unknown { typehint: String },
}

/// Execution stopped at a breakpoint.
///
/// Each field drives a different update, so each may be absent on its own;
/// the dispatcher skips only what a missing field would have driven.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvent {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub thread_id: Option<ThreadId>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputEvent {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Backtrace {
    pub frames: Vec<StackFrame>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    pub index: u32,
    pub class_name: String,
    pub method_name: String,
    pub pc_location: SourcePosition,
    #[serde(default)]
    pub locals: Vec<LocalVariable>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourcePosition {
    pub file: String,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalVariable {
    pub name: String,
    pub type_name: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreakpointListEvent {
    pub active: Vec<SourcePosition>,
    pub pending: Vec<SourcePosition>,
}

fn decode_body<T: DeserializeOwned>(typehint: &str, payload: &Value) -> DebugResult<T> {
    T::deserialize(payload).map_err(|source| DebugError::MalformedEvent {
        typehint: typehint.to_string(),
        source,
    })
}

impl DebugEvent {
    /// Decode an inbound payload
    pub fn decode(payload: &Value) -> DebugResult<Self> {
        let typehint = payload
            .get(TYPEHINT_FIELD)
            .and_then(Value::as_str)
            .ok_or(DebugError::MissingTypehint)?;

        let event = match typehint {
            event_types::VM_START => DebugEvent::VmStart,
            event_types::VM_DISCONNECT => DebugEvent::VmDisconnect,
            event_types::BREAK => DebugEvent::Break(decode_body(typehint, payload)?),
            event_types::OUTPUT => DebugEvent::Output(decode_body(typehint, payload)?),
            event_types::BACKTRACE => DebugEvent::Backtrace(decode_body(typehint, payload)?),
            event_types::BREAKPOINT_LIST => {
                DebugEvent::BreakpointList(decode_body(typehint, payload)?)
            }
            other => DebugEvent::Unknown {
                typehint: other.to_string(),
            },
        };

        Ok(event)
    }
}
