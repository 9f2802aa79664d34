//! In-memory draft sessions.
//!
//! One session per generated draft, keyed by a random UUID. Sessions hold the
//! profile, the chosen tone and the live draft text; the latest edit always
//! replaces the previous text. Sessions idle for longer than the configured
//! TTL are swept. Nothing survives a process restart.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::generation::tone::CompanyTone;
use crate::models::candidate::CandidateProfile;

#[derive(Debug, Clone)]
pub struct DraftSession {
    pub session_id: Uuid,
    pub profile: CandidateProfile,
    pub tone: CompanyTone,
    /// Live draft text, paragraphs separated by a blank line.
    pub draft: String,
    /// Last create, read or edit. Drives idle eviction.
    pub last_active: Instant,
}

/// Cheaply clonable handle; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, DraftSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(
        &self,
        profile: CandidateProfile,
        tone: CompanyTone,
        draft: String,
    ) -> DraftSession {
        let session = DraftSession {
            session_id: Uuid::new_v4(),
            profile,
            tone,
            draft,
            last_active: Instant::now(),
        };
        self.inner
            .write()
            .await
            .insert(session.session_id, session.clone());
        session
    }

    /// Reading a session counts as activity.
    pub async fn get(&self, id: Uuid) -> Option<DraftSession> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_active = Instant::now();
        Some(session.clone())
    }

    /// Replaces the live draft. Returns `None` for an unknown session.
    pub async fn update_draft(&self, id: Uuid, draft: String) -> Option<DraftSession> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id)?;
        session.draft = draft;
        session.last_active = Instant::now();
        Some(session.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<DraftSession> {
        self.inner.write().await.remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Drops every session idle for at least `max_idle`. Returns how many
    /// were dropped.
    pub async fn prune_idle(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now.duration_since(s.last_active) < max_idle);
        before - sessions.len()
    }

    /// Background sweep running every `max_idle / 2` (at least one second).
    pub fn spawn_idle_sweeper(&self, max_idle: Duration) -> JoinHandle<()> {
        let store = self.clone();
        let period = (max_idle / 2).max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let evicted = store.prune_idle(max_idle).await;
                if evicted > 0 {
                    debug!("Evicted {evicted} idle draft session(s)");
                }
            }
        })
    }
}
