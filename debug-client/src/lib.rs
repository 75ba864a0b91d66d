// ENSIME debugger client library
//
// Editor-side half of the ENSIME debugger:
// - Local breakpoint registry (user intent)
// - Request building for set/clear/list/attach/step/continue/backtrace
// - Event decoding and dispatch
// - Reconciliation of local intent with the debugger's active/pending view
// - Projection of all of it into editor-ready records

pub mod actor;
pub mod client;
pub mod commands;
pub mod config;
pub mod display;
pub mod events;
pub mod host;
pub mod paths;
pub mod protocol;
pub mod reconcile;
pub mod registry;
pub mod requests;
pub mod session;
pub mod types;

pub use actor::{spawn_client, ClientHandle};
pub use client::DebuggerClient;
pub use commands::Command;
pub use config::ClientConfig;
pub use host::{Editor, Transport};
pub use protocol::{DebugError, DebugResult};
pub use types::{AttachTarget, Breakpoint, ThreadId};
