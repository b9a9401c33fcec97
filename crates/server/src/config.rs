//! Server-specific configuration.
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// Where to listen and which session to serve.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub session_id: String,
    /// Extra log file directory. Logs always go to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 7878)),
            session_id: "default".to_owned(),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_LISTEN_ADDR` - Socket address to bind (default: 127.0.0.1:7878)
    /// - `GAME_SESSION_ID` - Session served to every connection (default: "default")
    /// - `GAME_LOG_DIR` - Also write logs to `<dir>/server.log`
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = env::var("GAME_LISTEN_ADDR") {
            config.listen_addr = addr
                .parse()
                .with_context(|| format!("GAME_LISTEN_ADDR is not a socket address: {addr}"))?;
        }
        if let Ok(id) = env::var("GAME_SESSION_ID")
            && !id.trim().is_empty()
        {
            config.session_id = id.trim().to_owned();
        }
        config.log_dir = env::var_os("GAME_LOG_DIR").map(PathBuf::from);

        Ok(config)
    }
}
