// Stdio implementations of the client's collaborators
//
// Both push Outbound messages onto the writer channel; nothing here blocks.

use crate::protocol::{Cursor, Outbound};
use ensime_debug_client::display::{Marker, QuickfixEntry};
use ensime_debug_client::requests::DebugRequest;
use ensime_debug_client::{Editor, Transport};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

fn emit(out: &mpsc::UnboundedSender<Outbound>, message: Outbound) {
    if out.send(message).is_err() {
        warn!("Output writer closed, dropping message");
    }
}

/// Wraps each request in a call envelope with a fresh call id
pub struct StdioTransport {
    out: mpsc::UnboundedSender<Outbound>,
    next_id: u64,
}

impl StdioTransport {
    pub fn new(out: mpsc::UnboundedSender<Outbound>) -> Self {
        Self { out, next_id: 1 }
    }
}

impl Transport for StdioTransport {
    fn send_request(&mut self, request: &DebugRequest) {
        let call_id = self.next_id;
        self.next_id += 1;

        debug!("Sending {} as call {}", request.typehint(), call_id);
        emit(
            &self.out,
            Outbound::Request {
                call_id,
                req: request.to_payload(),
            },
        );
    }
}

/// Editor seen through the bridge: cursor context comes with each command,
/// rendering is delegated to whoever reads stdout.
pub struct StdioEditor {
    out: mpsc::UnboundedSender<Outbound>,
    cursor: watch::Receiver<Cursor>,
    // Backtrace reports are written here; removed when the bridge exits
    report_dir: TempDir,
}

impl StdioEditor {
    pub fn new(
        out: mpsc::UnboundedSender<Outbound>,
        cursor: watch::Receiver<Cursor>,
        report_dir: TempDir,
    ) -> Self {
        Self {
            out,
            cursor,
            report_dir,
        }
    }

    fn write_report(&self, text: &str) -> std::io::Result<PathBuf> {
        let mut file = tempfile::Builder::new()
            .prefix("backtrace-")
            .suffix(".debug")
            .tempfile_in(self.report_dir.path())?;
        file.write_all(text.as_bytes())?;
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}

impl Editor for StdioEditor {
    fn current_file_path(&self) -> Option<PathBuf> {
        self.cursor.borrow().path.clone()
    }

    fn cursor_line(&self) -> u32 {
        self.cursor.borrow().line
    }

    fn show_notification(&mut self, text: &str) {
        emit(
            &self.out,
            Outbound::Notification {
                text: text.to_string(),
            },
        );
    }

    fn show_paged_report(&mut self, text: &str) {
        let path = match self.write_report(text) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Failed to write report file: {}", e);
                None
            }
        };

        emit(
            &self.out,
            Outbound::Report {
                text: text.to_string(),
                path,
            },
        );
    }

    fn update_breakpoint_markers(&mut self, markers: &[Marker]) {
        emit(
            &self.out,
            Outbound::Markers {
                markers: markers.to_vec(),
            },
        );
    }

    fn replace_quickfix_list(&mut self, entries: &[QuickfixEntry]) {
        emit(
            &self.out,
            Outbound::Quickfix {
                entries: entries.to_vec(),
            },
        );
    }
}
