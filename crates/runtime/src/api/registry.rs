//! Session lookup by id.
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::handle::SessionHandle;
use crate::config::RuntimeConfig;

/// Maps session ids to running sessions.
#[derive(Clone)]
pub struct SessionRegistry {
    config: Arc<RuntimeConfig>,
    sessions: Arc<RwLock<HashMap<String, SessionHandle>>>,
}

impl SessionRegistry {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the session with this id, creating it first if needed.
    pub async fn open(&self, id: &str) -> SessionHandle {
        if let Some(handle) = self.get(id).await {
            return handle;
        }
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(id.to_owned())
            .or_insert_with(|| SessionHandle::spawn(id, &self.config))
            .clone()
    }

    pub async fn get(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Forgets the session. Its worker stops once the last handle is dropped.
    pub async fn close(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            tracing::info!(target: "runtime::session", session = %id, "Session closed");
        }
        removed
    }

    pub async fn session_ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.sessions.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}
