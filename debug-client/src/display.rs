// Display projection
//
// Turns reconciled state and events into the flat records and strings the
// host editor renders. Nothing here touches editor state.

use crate::events::{Backtrace, LocalVariable, StackFrame};
use crate::types::{Breakpoint, ReconciledView};
use serde::Serialize;
use std::path::PathBuf;

pub const VM_STARTED: &str = "Debug VM started.";
pub const VM_DISCONNECTED: &str = "Debug VM disconnected.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// A breakpoint the user has set
    Breakpoint,
    /// The location execution is currently stopped at
    Current,
}

/// Gutter marker for one source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub path: PathBuf,
    pub line: u32,
    pub kind: MarkerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakpointLabel {
    Active,
    Pending,
    /// Set in the editor but not (yet) reported by the debugger
    Editor,
}

impl BreakpointLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakpointLabel::Active => "active",
            BreakpointLabel::Pending => "pending",
            BreakpointLabel::Editor => "editor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub path: PathBuf,
    pub line: u32,
    pub label: BreakpointLabel,
}

/// Entry of the editor's location list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickfixEntry {
    pub path: PathBuf,
    pub line: u32,
    pub text: String,
}

impl From<DisplayRecord> for QuickfixEntry {
    fn from(record: DisplayRecord) -> Self {
        QuickfixEntry {
            text: format!("{} breakpoint", record.label.as_str()),
            path: record.path,
            line: record.line,
        }
    }
}

fn record(bp: &Breakpoint, label: BreakpointLabel) -> DisplayRecord {
    DisplayRecord {
        path: bp.path().to_path_buf(),
        line: bp.line(),
        label,
    }
}

/// One record per breakpoint: active, then pending, then editor-only
pub fn breakpoint_records(view: &ReconciledView) -> Vec<DisplayRecord> {
    let active = view.active.iter().map(|bp| record(bp, BreakpointLabel::Active));
    let pending = view.pending.iter().map(|bp| record(bp, BreakpointLabel::Pending));
    let editor = view.local_only.iter().map(|bp| record(bp, BreakpointLabel::Editor));

    active.chain(pending).chain(editor).collect()
}

pub fn quickfix_entries(view: &ReconciledView) -> Vec<QuickfixEntry> {
    breakpoint_records(view)
        .into_iter()
        .map(QuickfixEntry::from)
        .collect()
}

/// Full marker set for the registry plus the current stop location.
///
/// The current marker takes the place of a plain marker at the same location.
pub fn markers<'a, I>(breakpoints: I, current: Option<&Breakpoint>) -> Vec<Marker>
where
    I: IntoIterator<Item = &'a Breakpoint>,
{
    let mut out: Vec<Marker> = breakpoints
        .into_iter()
        .filter(|bp| Some(*bp) != current)
        .map(|bp| Marker {
            path: bp.path().to_path_buf(),
            line: bp.line(),
            kind: MarkerKind::Breakpoint,
        })
        .collect();

    if let Some(bp) = current {
        out.push(Marker {
            path: bp.path().to_path_buf(),
            line: bp.line(),
            kind: MarkerKind::Current,
        });
    }

    out
}

pub fn break_notification(location: &Breakpoint) -> String {
    format!(
        "Execution paused at line {} of {}",
        location.line(),
        location.path().display()
    )
}

/// Reduce debuggee output to what the editor's message area can show.
///
/// Anything outside ASCII is dropped.
pub fn transcode_output(body: &str) -> String {
    body.chars().filter(char::is_ascii).collect()
}

fn local_info(local: &LocalVariable) -> String {
    format!(
        "    {}: {}\n      value: {}",
        local.name, local.type_name, local.summary
    )
}

fn frame_info(frame: &StackFrame) -> String {
    let mut lines = vec![
        format!(
            "Frame {}: {}:{}",
            frame.index, frame.class_name, frame.method_name
        ),
        format!(
            "  File: {}:{}",
            frame.pc_location.file, frame.pc_location.line
        ),
        "  Locals:".to_string(),
    ];
    lines.extend(frame.locals.iter().map(local_info));
    lines.join("\n")
}

/// Human readable backtrace, frames and locals in the order received
pub fn backtrace_report(backtrace: &Backtrace) -> String {
    backtrace
        .frames
        .iter()
        .map(frame_info)
        .collect::<Vec<_>>()
        .join("\n")
}
