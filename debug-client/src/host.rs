// Collaborator interfaces
//
// The client never talks to a socket or an editor directly. The transport
// delivers requests, the editor supplies cursor context and renders output.

use crate::display::{Marker, QuickfixEntry};
use crate::requests::DebugRequest;
use std::path::PathBuf;

/// Outbound channel to the debugger server.
///
/// Fire-and-forget: replies come back later as events, correlated (if at all)
/// by the transport itself.
pub trait Transport {
    fn send_request(&mut self, request: &DebugRequest);
}

/// The editor hosting the client
pub trait Editor {
    /// Path of the buffer under the cursor, if it has one
    fn current_file_path(&self) -> Option<PathBuf>;

    /// 1-based cursor line
    fn cursor_line(&self) -> u32;

    fn show_notification(&mut self, text: &str);

    fn show_paged_report(&mut self, text: &str);

    /// Replace every debugger marker with `markers`
    fn update_breakpoint_markers(&mut self, markers: &[Marker]);

    fn replace_quickfix_list(&mut self, entries: &[QuickfixEntry]);
}
