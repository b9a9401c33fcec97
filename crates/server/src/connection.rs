//! Newline-delimited JSON adapter for one TCP connection.
//!
//! Each connection gets three tasks: the reader below, a forwarder that
//! projects every published state for this player, and a writer that owns the
//! socket's write half. The player leaves the session when the reader ends.
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use game_core::{GameSnapshot, PlayerId};
use runtime::{ClientMessage, HandlerResult, ServerMessage, SessionHandle};

const OUTBOX_CAPACITY: usize = 64;

pub async fn serve(stream: TcpStream, player: PlayerId, session: SessionHandle) -> anyhow::Result<()> {
    let peer = stream.peer_addr().ok();
    info!(target: "server::connection", player = %player, ?peer, "Client connected");

    let (read_half, write_half) = stream.into_split();
    let (out_tx, mut out_rx) = mpsc::channel::<ServerMessage>(OUTBOX_CAPACITY);

    let writer = tokio::spawn(async move {
        let mut writer = BufWriter::new(write_half);
        while let Some(message) = out_rx.recv().await {
            let mut line = serde_json::to_vec(&message)?;
            line.push(b'\n');
            writer.write_all(&line).await?;
            writer.flush().await?;
        }
        anyhow::Ok(())
    });

    let mut events = session.subscribe();
    let forward_tx = out_tx.clone();
    let observer = player.clone();
    let forwarder = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    let view = GameSnapshot::project(event.state(), Some(&observer));
                    if forward_tx.send(ServerMessage::State(view)).await.is_err() {
                        break;
                    }
                }
                // The next event carries the full state again.
                Err(RecvError::Lagged(skipped)) => {
                    warn!(target: "server::connection", player = %observer, skipped, "Snapshot stream lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let welcome = session.snapshot(Some(&player)).await?;
    out_tx
        .send(ServerMessage::State(welcome))
        .await
        .context("writer stopped before the first snapshot")?;

    let result = read_loop(read_half, &player, &session, &out_tx).await;

    let seated = session.disconnect(player.clone()).await?;
    forwarder.abort();
    drop(out_tx);
    writer.await??;
    info!(target: "server::connection", player = %player, seated, "Client disconnected");
    result
}

async fn read_loop(
    read_half: tokio::net::tcp::OwnedReadHalf,
    player: &PlayerId,
    session: &SessionHandle,
    out_tx: &mpsc::Sender<ServerMessage>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(read_half).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<ClientMessage>(&line) {
            Ok(message) => match message.decode(player) {
                Ok(action) => HandlerResult::from(session.submit(action).await),
                Err(err) => {
                    // Never reached the worker, so nothing was broadcast.
                    let view = session.snapshot(Some(player)).await?;
                    if out_tx.send(ServerMessage::State(view)).await.is_err() {
                        break;
                    }
                    HandlerResult::failed(err.to_string())
                }
            },
            Err(err) => HandlerResult::failed(format!("malformed message: {err}")),
        };
        debug!(
            target: "server::connection",
            player = %player,
            success = response.success,
            message = %response.message,
            "Handled message"
        );
        if out_tx.send(ServerMessage::Response(response)).await.is_err() {
            break;
        }
    }
    Ok(())
}
