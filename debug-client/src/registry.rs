// Local breakpoint registry
//
// Records what the user asked for. This is intent, not confirmed state: the
// debugger's view arrives separately and is reconciled at display time.

use crate::types::Breakpoint;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct BreakpointRegistry {
    breakpoints: BTreeSet<Breakpoint>,
}

impl BreakpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a breakpoint. Returns `false` if it was already present.
    pub fn add(&mut self, bp: Breakpoint) -> bool {
        self.breakpoints.insert(bp)
    }

    /// Remove a breakpoint. Returns `false` if it was not present.
    pub fn remove(&mut self, bp: &Breakpoint) -> bool {
        self.breakpoints.remove(bp)
    }

    pub fn clear_all(&mut self) {
        self.breakpoints.clear();
    }

    pub fn contains(&self, bp: &Breakpoint) -> bool {
        self.breakpoints.contains(bp)
    }

    /// Snapshot of every registered breakpoint
    pub fn all(&self) -> Vec<Breakpoint> {
        self.breakpoints.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.breakpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }
}
