// Debugger client
//
// Owns the breakpoint registry (for the client's lifetime) and the debug
// session (from VM start to disconnect). Commands and events are handled one
// at a time; see `actor` for running this on its own task.

use crate::commands::Command;
use crate::config::ClientConfig;
use crate::display;
use crate::events::{BreakEvent, BreakpointListEvent, DebugEvent};
use crate::host::{Editor, Transport};
use crate::paths;
use crate::protocol::DebugResult;
use crate::reconcile::reconcile;
use crate::registry::BreakpointRegistry;
use crate::requests::{DebugRequest, ResumeKind};
use crate::session::{DebugSession, VmState};
use crate::types::{AttachTarget, Breakpoint, RemoteBreakpointSnapshot, ThreadId};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct DebuggerClient<T, E> {
    root_dir: PathBuf,
    default_target: AttachTarget,
    registry: BreakpointRegistry,
    session: Option<DebugSession>,
    // Survives session teardown so late commands can still name a thread
    last_thread: Option<ThreadId>,
    transport: T,
    editor: E,
}

impl<T: Transport, E: Editor> DebuggerClient<T, E> {
    pub fn new(config: &ClientConfig, transport: T, editor: E) -> Self {
        Self {
            root_dir: config.root_dir.clone(),
            default_target: config.attach_target(),
            registry: BreakpointRegistry::new(),
            session: None,
            last_thread: None,
            transport,
            editor,
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn registry(&self) -> &BreakpointRegistry {
        &self.registry
    }

    pub fn session(&self) -> Option<&DebugSession> {
        self.session.as_ref()
    }

    pub fn vm_state(&self) -> VmState {
        self.session
            .as_ref()
            .map_or(VmState::Disconnected, DebugSession::state)
    }

    /// Thread that continue/step/backtrace will target
    pub fn target_thread(&self) -> Option<&ThreadId> {
        self.session
            .as_ref()
            .and_then(DebugSession::stopped_thread)
            .or(self.last_thread.as_ref())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    // ---- Command surface ----

    pub fn execute(&mut self, command: Command) -> DebugResult<()> {
        debug!("Executing command {}", command);

        match command {
            Command::SetBreakpoint => self.set_breakpoint_at_cursor(),
            Command::ClearBreakpoint => self.clear_breakpoint_at_cursor(),
            Command::ClearAllBreakpoints => {
                self.clear_all_breakpoints();
                Ok(())
            }
            Command::ListBreakpoints => {
                self.list_breakpoints();
                Ok(())
            }
            Command::Attach(target) => {
                self.attach(target);
                Ok(())
            }
            Command::Continue => self.resume(ResumeKind::Continue),
            Command::Step => self.resume(ResumeKind::Step),
            Command::StepOut => self.resume(ResumeKind::StepOut),
            Command::Next => self.resume(ResumeKind::Next),
            Command::Backtrace => self.backtrace(),
        }
    }

    /// Cursor location exactly as the editor reports it
    fn cursor_location(&self) -> (Option<PathBuf>, u32) {
        (self.editor.current_file_path(), self.editor.cursor_line())
    }

    pub fn set_breakpoint_at_cursor(&mut self) -> DebugResult<()> {
        let (path, line) = self.cursor_location();
        let request = DebugRequest::set_break(path.as_deref(), line)?;
        let bp = self.canonical(path.as_deref(), line);

        debug!("Setting breakpoint request for {}", bp);
        self.transport.send_request(&request);

        if !self.registry.add(bp) {
            debug!("Breakpoint already registered locally");
        }
        self.refresh_markers();
        Ok(())
    }

    pub fn clear_breakpoint_at_cursor(&mut self) -> DebugResult<()> {
        let (path, line) = self.cursor_location();
        let request = DebugRequest::clear_break(path.as_deref(), line)?;
        let bp = self.canonical(path.as_deref(), line);

        debug!("Clear breakpoint request for {}", bp);
        self.transport.send_request(&request);

        if !self.registry.remove(&bp) {
            debug!("Breakpoint {} was not registered locally", bp);
        }
        self.refresh_markers();
        Ok(())
    }

    pub fn clear_all_breakpoints(&mut self) {
        debug!("Clearing all {} breakpoints", self.registry.len());
        self.transport.send_request(&DebugRequest::ClearAllBreaks);
        self.registry.clear_all();
        self.refresh_markers();
    }

    pub fn list_breakpoints(&mut self) {
        self.transport.send_request(&DebugRequest::ListBreakpoints);
    }

    pub fn attach(&mut self, target: Option<AttachTarget>) {
        let target = target.unwrap_or_else(|| self.default_target.clone());
        info!("Attaching debugger to {}", target);
        self.transport.send_request(&DebugRequest::attach(&target));
    }

    /// Continue, step, step out or next.
    ///
    /// Sent even without a live session, using the last thread the debugger
    /// reported. Only fails if no thread was ever reported.
    pub fn resume(&mut self, kind: ResumeKind) -> DebugResult<()> {
        let request = DebugRequest::resume(kind, self.target_thread())?;

        match self.session.as_mut() {
            Some(session) => session.resume(),
            None => warn!(
                "No live debug session, sending {} with last known thread",
                request.typehint()
            ),
        }

        self.transport.send_request(&request);
        self.refresh_markers();
        Ok(())
    }

    pub fn backtrace(&mut self) -> DebugResult<()> {
        let request = DebugRequest::backtrace(self.target_thread())?;
        if self.session.is_none() {
            warn!("No live debug session, requesting backtrace for last known thread");
        }
        self.transport.send_request(&request);
        Ok(())
    }

    // ---- Event dispatch ----

    /// Decode and handle one inbound event. Never fails: malformed payloads
    /// are logged and dropped without touching state.
    pub fn handle_event(&mut self, call_id: u64, payload: &Value) {
        match DebugEvent::decode(payload) {
            Ok(event) => self.dispatch(call_id, event),
            Err(e) => warn!("Dropping debug event (call {}): {}", call_id, e),
        }
    }

    pub fn dispatch(&mut self, call_id: u64, event: DebugEvent) {
        debug!("Debug event for call {}: {:?}", call_id, event);

        match event {
            DebugEvent::VmStart => {
                info!("Debug VM started");
                // A break hit may have arrived first and already opened the session
                if self.session.is_none() {
                    self.session = Some(DebugSession::running());
                }
                self.editor.show_notification(display::VM_STARTED);
            }
            DebugEvent::VmDisconnect => {
                info!("Debug VM disconnected");
                self.session = None;
                self.editor.show_notification(display::VM_DISCONNECTED);
                self.refresh_markers();
            }
            DebugEvent::Break(event) => self.on_break(event),
            DebugEvent::Output(output) => {
                self.editor
                    .show_notification(&display::transcode_output(&output.body));
            }
            DebugEvent::Backtrace(backtrace) => {
                self.editor
                    .show_paged_report(&display::backtrace_report(&backtrace));
            }
            DebugEvent::BreakpointList(list) => self.on_breakpoint_list(&list),
            DebugEvent::Unknown { typehint } => {
                debug!("Did not handle debug event for {}", typehint);
            }
        }
    }

    fn on_break(&mut self, event: BreakEvent) {
        let location = match (&event.file, event.line) {
            (Some(file), Some(line)) => Some(self.canonical(Some(Path::new(file)), line)),
            _ => {
                warn!("Break event without a complete location: {:?}", event);
                None
            }
        };

        match &event.thread_id {
            Some(thread) => self.last_thread = Some(thread.clone()),
            None => warn!("Break event without a thread id"),
        }

        let session = self.session.get_or_insert_with(|| {
            debug!("Break event before VM start, opening session");
            DebugSession::running()
        });
        let previous = session.current_location().cloned();
        session.stop(event.thread_id, location.clone());
        let moved = session.current_location() != previous.as_ref();

        if let Some(bp) = &location {
            self.editor
                .show_notification(&display::break_notification(bp));
        }
        // Markers only; the quickfix list follows breakpoint list snapshots
        if moved {
            self.refresh_markers();
        }
    }

    fn on_breakpoint_list(&mut self, list: &BreakpointListEvent) {
        let snapshot = RemoteBreakpointSnapshot::from_event(list, &self.root_dir);
        let view = reconcile(self.registry.iter(), &snapshot);

        debug!(
            "Breakpoints: {} active, {} pending, {} editor only",
            view.active.len(),
            view.pending.len(),
            view.local_only.len()
        );

        self.editor
            .replace_quickfix_list(&display::quickfix_entries(&view));
    }

    fn canonical(&self, path: Option<&Path>, line: u32) -> Breakpoint {
        let path = path.map(|p| paths::normalize(p, &self.root_dir));
        Breakpoint::new(path.unwrap_or_default(), line)
    }

    fn refresh_markers(&mut self) {
        let current = self.session.as_ref().and_then(DebugSession::current_location);
        let markers = display::markers(self.registry.iter(), current);
        self.editor.update_breakpoint_markers(&markers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{Marker, MarkerKind};
    use crate::host::testing::{RecordingEditor, RecordingTransport};
    use crate::protocol::DebugError;
    use serde_json::json;

    type TestClient = DebuggerClient<RecordingTransport, RecordingEditor>;

    fn client_at(path: &str, line: u32) -> TestClient {
        DebuggerClient::new(
            &ClientConfig::with_root("/root"),
            RecordingTransport::default(),
            RecordingEditor::at(path, line),
        )
    }

    fn move_cursor(client: &mut TestClient, path: &str, line: u32) {
        let editor = client.editor_mut();
        editor.path = Some(PathBuf::from(path));
        editor.line = line;
    }

    fn break_hit(client: &mut TestClient, file: &str, line: u32, thread: &str) {
        client.handle_event(
            1,
            &json!({"typehint": "DebugBreakEvent", "file": file, "line": line, "threadId": thread}),
        );
    }

    #[test]
    fn test_set_breakpoint_sends_and_registers() {
        let mut client = client_at("/root/A.scala", 12);

        client.execute(Command::SetBreakpoint).unwrap();

        assert_eq!(
            client.transport().sent,
            vec![DebugRequest::SetBreak {
                file: "/root/A.scala".to_string(),
                line: 12,
                max_results: 10,
            }]
        );
        assert!(client.registry().contains(&Breakpoint::new("A.scala", 12)));
        assert_eq!(
            client.editor().last_markers(),
            &[Marker {
                path: PathBuf::from("A.scala"),
                line: 12,
                kind: MarkerKind::Breakpoint,
            }]
        );
    }

    #[test]
    fn test_set_breakpoint_twice_keeps_one_entry() {
        let mut client = client_at("/root/A.scala", 12);

        client.set_breakpoint_at_cursor().unwrap();
        client.set_breakpoint_at_cursor().unwrap();

        assert_eq!(client.registry().len(), 1);
        assert_eq!(client.transport().sent.len(), 2);
    }

    #[test]
    fn test_invalid_cursor_sends_nothing() {
        let mut client = client_at("/root/A.scala", 0);
        assert!(matches!(
            client.set_breakpoint_at_cursor(),
            Err(DebugError::InvalidLine(0))
        ));

        client.editor_mut().path = None;
        client.editor_mut().line = 3;
        assert!(matches!(
            client.clear_breakpoint_at_cursor(),
            Err(DebugError::NoFilePath)
        ));

        assert!(client.transport().sent.is_empty());
        assert!(client.registry().is_empty());
    }

    #[test]
    fn test_clear_breakpoint_absent_is_noop_but_still_sent() {
        let mut client = client_at("/root/A.scala", 12);
        client.set_breakpoint_at_cursor().unwrap();

        move_cursor(&mut client, "/root/A.scala", 13);
        client.clear_breakpoint_at_cursor().unwrap();
        assert_eq!(client.registry().len(), 1);

        move_cursor(&mut client, "/root/A.scala", 12);
        client.clear_breakpoint_at_cursor().unwrap();
        assert!(client.registry().is_empty());
        assert_eq!(client.transport().sent.len(), 3);
        assert!(client.editor().last_markers().is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut client = client_at("/root/A.scala", 1);
        client.set_breakpoint_at_cursor().unwrap();
        move_cursor(&mut client, "/root/B.scala", 2);
        client.set_breakpoint_at_cursor().unwrap();

        client.execute(Command::ClearAllBreakpoints).unwrap();

        assert!(client.registry().is_empty());
        assert_eq!(client.transport().sent.last(), Some(&DebugRequest::ClearAllBreaks));
        assert!(client.editor().last_markers().is_empty());
    }

    #[test]
    fn test_attach_uses_default_target() {
        let mut client = client_at("/root/A.scala", 1);

        client.execute(Command::Attach(None)).unwrap();
        client
            .execute(Command::Attach(Some(AttachTarget::new("vm", 8000))))
            .unwrap();

        assert_eq!(
            client.transport().sent[0].to_payload(),
            json!({"typehint": "DebugAttachReq", "hostname": "localhost", "port": "5005"})
        );
        assert_eq!(
            client.transport().sent[1].to_payload(),
            json!({"typehint": "DebugAttachReq", "hostname": "vm", "port": "8000"})
        );
    }

    #[test]
    fn test_list_breakpoints_sends_request() {
        let mut client = client_at("/root/A.scala", 1);
        client.execute(Command::ListBreakpoints).unwrap();
        assert_eq!(client.transport().sent, vec![DebugRequest::ListBreakpoints]);
    }

    #[test]
    fn test_vm_lifecycle() {
        let mut client = client_at("/root/A.scala", 1);
        assert_eq!(client.vm_state(), VmState::Disconnected);

        client.handle_event(1, &json!({"typehint": "DebugVmStartEvent"}));
        assert_eq!(client.vm_state(), VmState::Running);

        client.handle_event(2, &json!({"typehint": "DebugVmDisconnectEvent"}));
        assert_eq!(client.vm_state(), VmState::Disconnected);
        assert!(client.session().is_none());

        assert_eq!(
            client.editor().notifications,
            vec!["Debug VM started.", "Debug VM disconnected."]
        );
    }

    #[test]
    fn test_break_hit_marks_current_location() {
        let mut client = client_at("/root/A.scala", 3);
        client.set_breakpoint_at_cursor().unwrap();
        client.handle_event(1, &json!({"typehint": "DebugVmStartEvent"}));

        break_hit(&mut client, "/root/A.scala", 12, "t1");

        assert_eq!(client.vm_state(), VmState::Stopped);
        assert_eq!(client.target_thread(), Some(&ThreadId::from("t1")));
        assert_eq!(
            client.editor().notifications.last().map(String::as_str),
            Some("Execution paused at line 12 of A.scala")
        );

        let markers = client.editor().last_markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(
            markers[1],
            Marker {
                path: PathBuf::from("A.scala"),
                line: 12,
                kind: MarkerKind::Current,
            }
        );
    }

    #[test]
    fn test_break_hit_before_vm_start_opens_session() {
        let mut client = client_at("/root/A.scala", 3);
        break_hit(&mut client, "/root/A.scala", 3, "t9");

        assert_eq!(client.vm_state(), VmState::Stopped);
        let markers = client.editor().last_markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].kind, MarkerKind::Current);
    }

    #[test]
    fn test_vm_start_after_break_keeps_stopped_session() {
        let mut client = client_at("/root/A.scala", 3);
        break_hit(&mut client, "/root/A.scala", 12, "t1");
        let markers_before = client.editor().markers.len();

        client.handle_event(2, &json!({"typehint": "DebugVmStartEvent"}));

        assert_eq!(client.vm_state(), VmState::Stopped);
        assert_eq!(client.target_thread(), Some(&ThreadId::from("t1")));
        assert_eq!(
            client.session().and_then(DebugSession::current_location),
            Some(&Breakpoint::new("A.scala", 12))
        );
        assert_eq!(client.editor().markers.len(), markers_before);
        assert_eq!(
            client.editor().notifications.last().map(String::as_str),
            Some("Debug VM started.")
        );
    }

    #[test]
    fn test_break_hit_without_location_records_thread_only() {
        let mut client = client_at("/root/A.scala", 3);

        client.handle_event(1, &json!({"typehint": "DebugBreakEvent", "line": 5, "threadId": "t1"}));

        assert_eq!(client.vm_state(), VmState::Stopped);
        assert_eq!(client.target_thread(), Some(&ThreadId::from("t1")));
        assert!(client.session().and_then(DebugSession::current_location).is_none());
        assert!(client.editor().notifications.is_empty());
        assert!(client.editor().markers.is_empty());
    }

    #[test]
    fn test_break_hit_without_location_on_same_thread_keeps_marker() {
        let mut client = client_at("/root/A.scala", 3);
        break_hit(&mut client, "/root/A.scala", 12, "t1");
        let markers_before = client.editor().markers.len();
        let notes_before = client.editor().notifications.len();

        client.handle_event(2, &json!({"typehint": "DebugBreakEvent", "threadId": "t1"}));

        assert_eq!(
            client.session().and_then(DebugSession::current_location),
            Some(&Breakpoint::new("A.scala", 12))
        );
        assert_eq!(client.editor().markers.len(), markers_before);
        assert_eq!(client.editor().notifications.len(), notes_before);
    }

    #[test]
    fn test_break_hit_without_location_on_other_thread_clears_marker() {
        let mut client = client_at("/root/A.scala", 3);
        break_hit(&mut client, "/root/A.scala", 12, "t1");

        client.handle_event(2, &json!({"typehint": "DebugBreakEvent", "file": "/root/A.scala", "threadId": "t2"}));

        assert_eq!(client.target_thread(), Some(&ThreadId::from("t2")));
        assert!(client.session().and_then(DebugSession::current_location).is_none());
        assert!(client.editor().last_markers().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_cursor_path_sends_nothing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut client = client_at("/root/A.scala", 3);
        client.editor_mut().path = Some(PathBuf::from(OsStr::from_bytes(b"/root/\xffA.scala")));

        assert!(matches!(
            client.set_breakpoint_at_cursor(),
            Err(DebugError::NonUtf8Path(_))
        ));
        assert!(client.transport().sent.is_empty());
        assert!(client.registry().is_empty());
        assert!(client.editor().markers.is_empty());
    }

    #[test]
    fn test_break_hit_without_thread_keeps_previous_thread() {
        let mut client = client_at("/root/A.scala", 3);
        break_hit(&mut client, "/root/A.scala", 3, "t1");
        client.handle_event(
            2,
            &json!({"typehint": "DebugBreakEvent", "file": "/root/A.scala", "line": 5}),
        );

        assert_eq!(client.target_thread(), Some(&ThreadId::from("t1")));
        assert_eq!(
            client.session().and_then(DebugSession::current_location),
            Some(&Breakpoint::new("A.scala", 5))
        );
    }

    #[test]
    fn test_resume_uses_stopped_thread_and_clears_current_marker() {
        let mut client = client_at("/root/A.scala", 3);
        client.handle_event(1, &json!({"typehint": "DebugVmStartEvent"}));
        break_hit(&mut client, "/root/A.scala", 12, "t1");

        client.execute(Command::Step).unwrap();
        client.execute(Command::Next).unwrap();

        assert_eq!(
            client.transport().sent,
            vec![
                DebugRequest::Step {
                    thread_id: ThreadId::from("t1")
                },
                DebugRequest::Next {
                    thread_id: ThreadId::from("t1")
                },
            ]
        );
        assert_eq!(client.vm_state(), VmState::Running);
        assert!(client.editor().last_markers().is_empty());
    }

    #[test]
    fn test_backtrace_request_and_report() {
        let mut client = client_at("/root/A.scala", 3);
        break_hit(&mut client, "/root/A.scala", 12, "t1");

        client.execute(Command::Backtrace).unwrap();
        assert_eq!(
            client.transport().sent.last().map(DebugRequest::to_payload),
            Some(json!({"typehint": "DebugBacktraceReq", "threadId": "t1", "index": 0, "count": 100}))
        );

        client.handle_event(
            5,
            &json!({
                "typehint": "DebugBacktrace",
                "frames": [{
                    "index": 0,
                    "className": "A",
                    "methodName": "run",
                    "pcLocation": {"file": "/root/A.scala", "line": 12},
                    "locals": []
                }]
            }),
        );
        assert_eq!(
            client.editor().reports,
            vec!["Frame 0: A:run\n  File: /root/A.scala:12\n  Locals:"]
        );
    }

    // Documented behavior, not an endorsement: after the VM disconnects the
    // last known thread is still used for continue/step.
    #[test]
    fn test_continue_without_session_uses_last_known_thread() {
        let mut client = client_at("/root/A.scala", 3);
        break_hit(&mut client, "/root/A.scala", 12, "t1");
        client.handle_event(2, &json!({"typehint": "DebugVmDisconnectEvent"}));

        client.execute(Command::Continue).unwrap();

        assert_eq!(
            client.transport().sent,
            vec![DebugRequest::Continue {
                thread_id: ThreadId::from("t1")
            }]
        );
        assert_eq!(client.vm_state(), VmState::Disconnected);
    }

    #[test]
    fn test_thread_commands_fail_before_any_thread_is_known() {
        let mut client = client_at("/root/A.scala", 3);

        assert!(matches!(
            client.execute(Command::StepOut),
            Err(DebugError::NoKnownThread)
        ));
        assert!(matches!(
            client.execute(Command::Backtrace),
            Err(DebugError::NoKnownThread)
        ));
        assert!(client.transport().sent.is_empty());
    }

    #[test]
    fn test_output_is_forwarded_as_ascii() {
        let mut client = client_at("/root/A.scala", 3);
        client.handle_event(
            3,
            &json!({"typehint": "DebugOutputEvent", "body": "h\u{e9}llo\n"}),
        );
        assert_eq!(client.editor().notifications, vec!["hllo\n"]);
    }

    #[test]
    fn test_breakpoint_list_reconciles_against_registry() {
        let mut client = client_at("/root/f.scala", 3);
        for line in [3, 7, 9] {
            move_cursor(&mut client, "/root/f.scala", line);
            client.set_breakpoint_at_cursor().unwrap();
        }

        client.handle_event(
            4,
            &json!({
                "typehint": "BreakpointList",
                "active": [{"file": "/root/f.scala", "line": 3}],
                "pending": [{"file": "/root/f.scala", "line": 7}]
            }),
        );

        let entries = client.editor().quickfix.last().unwrap();
        let summary: Vec<_> = entries
            .iter()
            .map(|e| (e.path.to_string_lossy().into_owned(), e.line, e.text.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("f.scala".to_string(), 3, "active breakpoint"),
                ("f.scala".to_string(), 7, "pending breakpoint"),
                ("f.scala".to_string(), 9, "editor breakpoint"),
            ]
        );
    }

    #[test]
    fn test_later_snapshot_replaces_earlier_one() {
        let mut client = client_at("/root/f.scala", 3);

        client.handle_event(
            1,
            &json!({
                "typehint": "BreakpointList",
                "active": [{"file": "/root/f.scala", "line": 1}, {"file": "/root/f.scala", "line": 2}],
                "pending": []
            }),
        );
        client.handle_event(
            2,
            &json!({
                "typehint": "BreakpointList",
                "active": [{"file": "/root/g.scala", "line": 5}],
                "pending": []
            }),
        );

        let last = client.editor().quickfix.last().unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].path, PathBuf::from("g.scala"));
        assert_eq!(last[0].line, 5);
    }

    #[test]
    fn test_unknown_and_malformed_events_change_nothing() {
        let mut client = client_at("/root/A.scala", 3);
        client.set_breakpoint_at_cursor().unwrap();
        let markers_before = client.editor().markers.len();

        client.handle_event(1, &json!({"typehint": "Mystery"}));
        client.handle_event(2, &json!({"typehint": "BreakpointList", "active": "nope"}));
        client.handle_event(3, &json!({"no": "typehint"}));

        assert_eq!(client.vm_state(), VmState::Disconnected);
        assert_eq!(client.registry().len(), 1);
        assert!(client.target_thread().is_none());
        assert_eq!(client.editor().markers.len(), markers_before);
        assert!(client.editor().quickfix.is_empty());
        assert!(client.editor().notifications.is_empty());
    }
}
