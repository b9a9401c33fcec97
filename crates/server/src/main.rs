//! Game server binary.
//!
//! Serves one shared session over newline-delimited JSON on TCP.
//!
//! ```bash
//! GAME_LISTEN_ADDR=0.0.0.0:7878 RUST_LOG=debug cargo run -p game-server
//! ```
use anyhow::{Context, Result};
use tokio::net::TcpListener;

use game_core::PlayerId;
use game_server::{ServerConfig, connection, logging};
use runtime::{RuntimeConfig, SessionRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let server_config = ServerConfig::from_env()?;
    let _guard = logging::setup_logging(server_config.log_dir.as_deref())?;
    let runtime_config = RuntimeConfig::from_env()?;

    tracing::info!("Starting game server");
    tracing::info!("Session ID: {}", server_config.session_id);

    // 2. Open the session
    let registry = SessionRegistry::new(runtime_config);
    let session = registry.open(&server_config.session_id).await;

    // 3. Accept connections
    let listener = TcpListener::bind(server_config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", server_config.listen_addr))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let mut next_client: u64 = 0;
    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, _) = match accepted {
                    Ok(accepted) => accepted,
                    Err(err) => {
                        tracing::warn!("Accept failed: {err}");
                        continue;
                    }
                };
                next_client += 1;
                let player = PlayerId::new(format!("client_{next_client}"));
                let session = session.clone();
                tokio::spawn(async move {
                    if let Err(err) = connection::serve(stream, player.clone(), session).await {
                        tracing::warn!(player = %player, "Connection ended with error: {err:#}");
                    }
                });
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                break;
            }
        }
    }

    registry.close(&server_config.session_id).await;
    Ok(())
}
