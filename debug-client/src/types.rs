// Debugger client type definitions
//
// Value types shared by the registry, reconciliation and display layers

use crate::protocol::{DebugError, DebugResult, DEFAULT_ATTACH_HOST, DEFAULT_ATTACH_PORT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A source location where execution should pause.
///
/// Identity is the `(path, line)` pair and nothing else. The path is expected
/// to already be in canonical (project-root relative) form, see [`crate::paths`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Breakpoint {
    path: PathBuf,
    line: u32,
}

impl Breakpoint {
    pub fn new(path: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line)
    }
}

// Thread ids are opaque to the client; keep whatever representation the
// server used so requests echo it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThreadId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadId::Number(n) => write!(f, "{}", n),
            ThreadId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ThreadId {
    fn from(s: &str) -> Self {
        ThreadId::Text(s.to_string())
    }
}

impl From<i64> for ThreadId {
    fn from(n: i64) -> Self {
        ThreadId::Number(n)
    }
}

/// Host and port of a debug-enabled VM to attach to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachTarget {
    pub host: String,
    pub port: u16,
}

impl AttachTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Build a target from user-supplied command arguments
    pub fn parse(host: &str, port: &str) -> DebugResult<Self> {
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| DebugError::InvalidPort(port.to_string()))?;
        Ok(Self::new(host.trim(), port))
    }
}

impl Default for AttachTarget {
    fn default() -> Self {
        Self::new(DEFAULT_ATTACH_HOST, DEFAULT_ATTACH_PORT)
    }
}

impl fmt::Display for AttachTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// The debugger's own view of breakpoints, as reported by one `BreakpointList`.
///
/// Always rebuilt from a single event; never merged with an earlier snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteBreakpointSnapshot {
    pub active: Vec<Breakpoint>,
    pub pending: Vec<Breakpoint>,
}

/// Three-way partition of breakpoints for display.
///
/// The groups are pairwise disjoint. `local_only` is exactly the registry minus
/// everything the debugger reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciledView {
    pub active: Vec<Breakpoint>,
    pub pending: Vec<Breakpoint>,
    pub local_only: Vec<Breakpoint>,
}

impl ReconciledView {
    pub fn len(&self) -> usize {
        self.active.len() + self.pending.len() + self.local_only.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
