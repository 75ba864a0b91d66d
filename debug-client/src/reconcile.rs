// Breakpoint reconciliation
//
// Partitions local intent and the debugger's last snapshot into
// active / pending / local-only. Both sides must be in canonical path form
// before they are compared.

use crate::events::{BreakpointListEvent, SourcePosition};
use crate::paths;
use crate::types::{Breakpoint, ReconciledView, RemoteBreakpointSnapshot};
use std::collections::HashSet;
use std::path::Path;

fn to_breakpoint(pos: &SourcePosition, root: &Path) -> Breakpoint {
    Breakpoint::new(paths::normalize(Path::new(&pos.file), root), pos.line)
}

impl RemoteBreakpointSnapshot {
    /// Build a snapshot from a `BreakpointList` event, normalizing every path
    /// against the project root.
    pub fn from_event(event: &BreakpointListEvent, root: &Path) -> Self {
        Self {
            active: event.active.iter().map(|p| to_breakpoint(p, root)).collect(),
            pending: event.pending.iter().map(|p| to_breakpoint(p, root)).collect(),
        }
    }
}

/// Compute the display partition.
///
/// Group order follows the input: remote groups in the order reported, local
/// entries in registry order. A location reported both active and pending is
/// shown as active. Duplicates are dropped.
pub fn reconcile<'a, I>(registry: I, remote: &RemoteBreakpointSnapshot) -> ReconciledView
where
    I: IntoIterator<Item = &'a Breakpoint>,
{
    let mut seen: HashSet<&Breakpoint> = HashSet::new();

    let active: Vec<Breakpoint> = remote
        .active
        .iter()
        .filter(|bp| seen.insert(*bp))
        .cloned()
        .collect();

    let pending: Vec<Breakpoint> = remote
        .pending
        .iter()
        .filter(|bp| seen.insert(*bp))
        .cloned()
        .collect();

    let local_only: Vec<Breakpoint> = registry
        .into_iter()
        .filter(|bp| seen.insert(*bp))
        .cloned()
        .collect();

    ReconciledView {
        active,
        pending,
        local_only,
    }
}
