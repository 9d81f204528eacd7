// seruni-client/src/session/identity.rs
// Visitor identity store

use std::io;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::models::OrderId;

use crate::storage::SessionStorage;

/// Storage key of the persisted visitor session
pub const SESSION_KEY: &str = "draft_session";

/// Anonymous visitor session
///
/// The token is issued by the server together with the order id; the pair
/// is stored and replaced as one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorSession {
    pub order_id: OrderId,
    pub visitor_token: String,
}

/// Persists the visitor session across runs
#[derive(Clone)]
pub struct VisitorIdentityStore {
    storage: Arc<dyn SessionStorage>,
}

impl VisitorIdentityStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Load the persisted session
    ///
    /// A malformed value is treated as absent.
    pub fn load(&self) -> Option<VisitorSession> {
        let raw = self.storage.get(SESSION_KEY)?;
        match serde_json::from_str::<VisitorSession>(&raw) {
            Ok(session) if !session.visitor_token.trim().is_empty() => Some(session),
            Ok(_) => {
                tracing::warn!("Stored visitor session has an empty token, ignoring");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored visitor session is corrupt, ignoring");
                None
            }
        }
    }

    /// Persist the session, replacing any previous one
    pub fn save(&self, session: &VisitorSession) -> io::Result<()> {
        let json = serde_json::to_string(session)?;
        self.storage.set(SESSION_KEY, &json)
    }

    /// Remove the persisted session
    pub fn clear(&self) -> io::Result<()> {
        self.storage.remove(SESSION_KEY)
    }
}

impl std::fmt::Debug for VisitorIdentityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitorIdentityStore").finish_non_exhaustive()
    }
}
