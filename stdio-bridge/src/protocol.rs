// Bridge wire format
//
// One JSON object per line in each direction. Inbound lines are either host
// commands (`command` field) or debugger events (`callId` + `payload`).
// Outbound lines are tagged by `type`.

use ensime_debug_client::display::{Marker, QuickfixEntry};
use ensime_debug_client::{AttachTarget, ClientConfig, Command, DebugResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PortArg {
    Number(u16),
    Text(String),
}

impl PortArg {
    fn into_text(self) -> String {
        match self {
            PortArg::Number(n) => n.to_string(),
            PortArg::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HostCommand {
    SetBreakpoint {
        path: PathBuf,
        line: u32,
    },
    ClearBreakpoint {
        path: PathBuf,
        line: u32,
    },
    ClearAllBreakpoints,
    ListBreakpoints,
    Attach {
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<PortArg>,
    },
    Continue,
    Step,
    StepOut,
    Next,
    Backtrace,
}

/// Editor context a set/clear command was issued from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cursor {
    pub path: Option<PathBuf>,
    pub line: u32,
}

impl HostCommand {
    pub fn name(&self) -> &'static str {
        match self {
            HostCommand::SetBreakpoint { .. } => "set_breakpoint",
            HostCommand::ClearBreakpoint { .. } => "clear_breakpoint",
            HostCommand::ClearAllBreakpoints => "clear_all_breakpoints",
            HostCommand::ListBreakpoints => "list_breakpoints",
            HostCommand::Attach { .. } => "attach",
            HostCommand::Continue => "continue",
            HostCommand::Step => "step",
            HostCommand::StepOut => "step_out",
            HostCommand::Next => "next",
            HostCommand::Backtrace => "backtrace",
        }
    }

    /// The cursor this command carries, if any
    pub fn cursor(&self) -> Option<Cursor> {
        match self {
            HostCommand::SetBreakpoint { path, line } | HostCommand::ClearBreakpoint { path, line } => {
                Some(Cursor {
                    path: Some(path.clone()),
                    line: *line,
                })
            }
            _ => None,
        }
    }

    /// Convert to a client command. A partial attach target is completed from
    /// the configured defaults.
    pub fn into_command(self, config: &ClientConfig) -> DebugResult<Command> {
        Ok(match self {
            HostCommand::SetBreakpoint { .. } => Command::SetBreakpoint,
            HostCommand::ClearBreakpoint { .. } => Command::ClearBreakpoint,
            HostCommand::ClearAllBreakpoints => Command::ClearAllBreakpoints,
            HostCommand::ListBreakpoints => Command::ListBreakpoints,
            HostCommand::Attach {
                host: None,
                port: None,
            } => Command::Attach(None),
            HostCommand::Attach { host, port } => {
                let host = host.unwrap_or_else(|| config.attach_host.clone());
                let port = port.map_or_else(|| config.attach_port.to_string(), PortArg::into_text);
                Command::Attach(Some(AttachTarget::parse(&host, &port)?))
            }
            HostCommand::Continue => Command::Continue,
            HostCommand::Step => Command::Step,
            HostCommand::StepOut => Command::StepOut,
            HostCommand::Next => Command::Next,
            HostCommand::Backtrace => Command::Backtrace,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    pub call_id: u64,
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Command(HostCommand),
    Event(InboundEvent),
}

impl Inbound {
    /// Discriminate by the `command` field
    pub fn parse(line: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(line)?;
        if value.get("command").is_some() {
            serde_json::from_value(value).map(Inbound::Command)
        } else {
            serde_json::from_value(value).map(Inbound::Event)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outbound {
    #[serde(rename_all = "camelCase")]
    Request { call_id: u64, req: Value },
    Notification { text: String },
    Report { text: String, path: Option<PathBuf> },
    Markers { markers: Vec<Marker> },
    Quickfix { entries: Vec<QuickfixEntry> },
    Error { command: String, message: String },
}
