// ENSIME debug bridge - editor side of the ENSIME debugger over stdio
//
// Reads host commands and debugger events as JSON lines on stdin, writes
// outbound requests and editor updates as JSON lines on stdout.

use anyhow::Result;
use clap::Parser;
use ensime_debug_client::{spawn_client, ClientConfig, ClientHandle, DebuggerClient};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

mod cli;
mod host;
mod protocol;

use cli::Cli;
use host::{StdioEditor, StdioTransport};
use protocol::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing to stderr only - stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ensime_debug=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.client_config()?;

    info!(
        "Starting ENSIME debug bridge (root: {})",
        config.root_dir.display()
    );

    let (out_tx, out_rx) = mpsc::unbounded_channel();
    let (cursor_tx, cursor_rx) = watch::channel(Cursor::default());
    let writer = tokio::spawn(write_outbound(out_rx));

    let client = DebuggerClient::new(
        &config,
        StdioTransport::new(out_tx.clone()),
        StdioEditor::new(out_tx.clone(), cursor_rx, tempfile::tempdir()?),
    );
    let (handle, client_task) = spawn_client(client);

    info!("Debug bridge ready, waiting for input...");
    let input = read_input(
        BufReader::new(tokio::io::stdin()),
        &config,
        &cursor_tx,
        &handle,
        &out_tx,
    )
    .await;
    if let Err(e) = &input {
        error!("Input loop stopped: {}", e);
    }

    // Let the client drain its queue, then close the output channel
    drop(handle);
    drop(client_task.await?);
    drop(out_tx);
    writer.await??;

    info!("ENSIME debug bridge shutting down");
    input
}

/// Apply inbound lines until EOF. One message at a time; each command is
/// applied before the next line is read. Bytes that are not UTF-8 are
/// replaced rather than rejected, so a bad line never stops the bridge.
async fn read_input<R>(
    mut reader: R,
    config: &ClientConfig,
    cursor_tx: &watch::Sender<Cursor>,
    handle: &ClientHandle,
    out_tx: &mpsc::UnboundedSender<Outbound>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Host disconnected");
            return Ok(());
        }

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if line.is_empty() {
            continue;
        }

        debug!("Received: {}", line);

        match Inbound::parse(line) {
            Ok(Inbound::Command(command)) => {
                if let Some(cursor) = command.cursor() {
                    cursor_tx.send_replace(cursor);
                }

                let name = command.name();
                let result = match command.into_command(config) {
                    Ok(command) => handle.execute(command).await,
                    Err(e) => Err(e),
                };

                if let Err(e) = result {
                    warn!("Command failed: {}", e);
                    out_tx
                        .send(Outbound::Error {
                            command: name.to_string(),
                            message: e.to_string(),
                        })
                        .ok();
                }
            }
            Ok(Inbound::Event(event)) => {
                handle.deliver_event(event.call_id, event.payload).await?;
            }
            Err(e) => {
                error!("Invalid input line: {}", e);
            }
        }
    }
}

async fn write_outbound(mut out_rx: mpsc::UnboundedReceiver<Outbound>) -> Result<()> {
    let mut stdout = tokio::io::stdout();

    while let Some(message) = out_rx.recv().await {
        let text = serde_json::to_string(&message)?;
        debug!("Sending: {}", text);
        stdout.write_all(text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}
