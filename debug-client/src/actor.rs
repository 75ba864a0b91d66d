// Client actor
//
// Runs a DebuggerClient on its own task so commands from the host and events
// from the transport are applied strictly one at a time, in arrival order.

use crate::client::DebuggerClient;
use crate::commands::Command;
use crate::host::{Editor, Transport};
use crate::protocol::{DebugError, DebugResult};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Commands and events share one queue so their relative order is kept
const MAILBOX_SIZE: usize = 256;

pub enum ClientMessage {
    Command {
        command: Command,
        reply_tx: oneshot::Sender<DebugResult<()>>,
    },
    Event {
        call_id: u64,
        payload: Value,
    },
}

/// Handle for submitting work to the client task
#[derive(Clone, Debug)]
pub struct ClientHandle {
    message_tx: mpsc::Sender<ClientMessage>,
}

impl ClientHandle {
    /// Run a command and wait until it has been applied locally.
    ///
    /// This does not wait for the debugger to answer; any reply arrives later
    /// as an event.
    pub async fn execute(&self, command: Command) -> DebugResult<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.message_tx
            .send(ClientMessage::Command { command, reply_tx })
            .await
            .map_err(|_| DebugError::ClientClosed)?;

        reply_rx.await.map_err(|_| DebugError::ClientClosed)?
    }

    /// Queue an inbound event for dispatch
    pub async fn deliver_event(&self, call_id: u64, payload: Value) -> DebugResult<()> {
        self.message_tx
            .send(ClientMessage::Event { call_id, payload })
            .await
            .map_err(|_| DebugError::ClientClosed)
    }
}

/// Move `client` onto a new task.
///
/// The task exits once every handle is dropped and hands the client back
/// through the join handle.
pub fn spawn_client<T, E>(client: DebuggerClient<T, E>) -> (ClientHandle, JoinHandle<DebuggerClient<T, E>>)
where
    T: Transport + Send + 'static,
    E: Editor + Send + 'static,
{
    let (message_tx, message_rx) = mpsc::channel(MAILBOX_SIZE);
    let task = tokio::spawn(client_task(client, message_rx));

    (ClientHandle { message_tx }, task)
}

async fn client_task<T, E>(
    mut client: DebuggerClient<T, E>,
    mut message_rx: mpsc::Receiver<ClientMessage>,
) -> DebuggerClient<T, E>
where
    T: Transport,
    E: Editor,
{
    info!("Debugger client task started");

    while let Some(message) = message_rx.recv().await {
        match message {
            ClientMessage::Command { command, reply_tx } => {
                let result = client.execute(command);
                if reply_tx.send(result).is_err() {
                    debug!("Command caller went away before the reply");
                }
            }
            ClientMessage::Event { call_id, payload } => {
                client.handle_event(call_id, &payload);
            }
        }
    }

    info!("Debugger client task shutting down");
    client
}
