// seruni-client/src/session/draft.rs
// Draft order client - one live draft order per visitor

use std::sync::Arc;

use shared::StatusAck;
use shared::models::{DraftBootstrap, DraftOrder, MenuItemId, OrderId};

use super::identity::{VisitorIdentityStore, VisitorSession};
use crate::cart::{self, CartView, DisplayCounter};
use crate::client::HttpClient;
use crate::error::{ClientError, SessionError, SessionResult};
use crate::storage::SessionStorage;

/// Direction of a quantity adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Increment,
    Decrement,
}

impl QuantityChange {
    fn path_segment(self) -> &'static str {
        match self {
            Self::Increment => "inc",
            Self::Decrement => "dec",
        }
    }
}

/// How `ensure_draft` obtained its order id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftOutcome {
    /// Stored draft is still valid
    Resumed,
    /// No stored session, a new draft was created
    Created,
    /// Stored draft had expired and was replaced ("your cart was reset")
    Replaced { previous: OrderId },
}

/// Result of `ensure_draft`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnsuredDraft {
    pub order_id: OrderId,
    pub outcome: DraftOutcome,
}

impl EnsuredDraft {
    /// Whether the visitor should be told their cart was reset
    pub fn is_reset(&self) -> bool {
        matches!(self.outcome, DraftOutcome::Replaced { .. })
    }
}

/// Client for the server-held draft order
///
/// Holds the visitor session in memory, mirrored from the identity store.
/// Every mutation is confirmed by a full refetch; the only locally cached
/// number is the advisory display count.
pub struct DraftOrderClient<H: HttpClient> {
    http: H,
    identity: VisitorIdentityStore,
    counter: DisplayCounter,
    session: Option<VisitorSession>,
}

impl<H: HttpClient> DraftOrderClient<H> {
    /// Create a client, resuming any persisted visitor session
    pub fn new(http: H, storage: Arc<dyn SessionStorage>) -> Self {
        let identity = VisitorIdentityStore::new(storage.clone());
        let session = identity.load();
        Self {
            http,
            identity,
            counter: DisplayCounter::new(storage),
            session,
        }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn session(&self) -> Option<&VisitorSession> {
        self.session.as_ref()
    }

    pub fn current_order_id(&self) -> Option<OrderId> {
        self.session.as_ref().map(|s| s.order_id)
    }

    pub fn visitor_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.visitor_token.as_str())
    }

    pub fn identity(&self) -> &VisitorIdentityStore {
        &self.identity
    }

    pub fn display_counter(&self) -> &DisplayCounter {
        &self.counter
    }

    /// Make sure exactly one valid draft order is available
    ///
    /// Resumes the stored draft when the server still recognises it,
    /// otherwise discards the session and bootstraps a new draft.
    pub async fn ensure_draft(&mut self) -> SessionResult<EnsuredDraft> {
        self.session = self.identity.load();

        let previous = match self.current_order_id() {
            Some(order_id) => match self.fetch_draft(order_id).await {
                Ok(_) => {
                    tracing::debug!(order_id, "Resumed draft order");
                    return Ok(EnsuredDraft {
                        order_id,
                        outcome: DraftOutcome::Resumed,
                    });
                }
                Err(SessionError::DraftExpired { order_id }) => Some(order_id),
                Err(e) => return Err(e),
            },
            None => None,
        };

        let order_id = self.bootstrap().await?;
        let outcome = match previous {
            Some(previous) => {
                tracing::info!(previous, order_id, "Draft order expired, cart was reset");
                DraftOutcome::Replaced { previous }
            }
            None => DraftOutcome::Created,
        };

        Ok(EnsuredDraft { order_id, outcome })
    }

    /// Request a fresh draft; no visitor token is sent
    async fn bootstrap(&mut self) -> SessionResult<OrderId> {
        let created: DraftBootstrap = self
            .http
            .post_empty("/orders/draft", None)
            .await
            .map_err(SessionError::TransportFailure)?;

        if created.visitor_token.trim().is_empty() {
            return Err(SessionError::TransportFailure(ClientError::InvalidResponse(
                "draft response is missing the visitor token".into(),
            )));
        }

        let session = VisitorSession {
            order_id: created.order_id,
            visitor_token: created.visitor_token,
        };
        self.identity.save(&session)?;
        self.session = Some(session);

        tracing::info!(order_id = created.order_id, "Created draft order");
        Ok(created.order_id)
    }

    /// Fetch the current state of a draft order
    ///
    /// A draft the server no longer recognises invalidates the visitor
    /// session and yields [`SessionError::DraftExpired`].
    pub async fn fetch_draft(&mut self, order_id: OrderId) -> SessionResult<DraftOrder> {
        let path = format!("/orders/{order_id}");
        let fetched = self.http.get::<DraftOrder>(&path, self.visitor_token()).await;
        match fetched {
            Ok(draft) => {
                let count = cart::project(&draft).total_count;
                if let Err(e) = self.counter.cache_count(count) {
                    tracing::warn!(error = %e, "Failed to cache cart count");
                }
                Ok(draft)
            }
            Err(e) if e.is_rejection() => {
                tracing::info!(order_id, reason = %e.detail(), "Draft order no longer valid");
                if self.current_order_id() == Some(order_id) {
                    self.invalidate()?;
                }
                Err(SessionError::DraftExpired { order_id })
            }
            Err(e) => Err(SessionError::TransportFailure(e)),
        }
    }

    /// Add one unit of a menu item, then refetch
    pub async fn add_item(
        &mut self,
        order_id: OrderId,
        menu_item_id: MenuItemId,
    ) -> SessionResult<DraftOrder> {
        let path = format!("/orders/{order_id}/add/{menu_item_id}");
        self.mutate(&path, order_id, menu_item_id).await
    }

    /// Change a line's quantity by one, then refetch
    ///
    /// The server removes the line when a decrement reaches zero.
    pub async fn adjust_item(
        &mut self,
        order_id: OrderId,
        menu_item_id: MenuItemId,
        change: QuantityChange,
    ) -> SessionResult<DraftOrder> {
        let path = format!(
            "/orders/{order_id}/{}/{menu_item_id}",
            change.path_segment()
        );
        self.mutate(&path, order_id, menu_item_id).await
    }

    async fn mutate(
        &mut self,
        path: &str,
        order_id: OrderId,
        menu_item_id: MenuItemId,
    ) -> SessionResult<DraftOrder> {
        let ack: StatusAck = self
            .http
            .post_empty(path, self.visitor_token())
            .await
            .map_err(|e| {
                if e.is_rejection() {
                    tracing::warn!(order_id, menu_item_id, reason = %e.detail(), "Cart update rejected");
                    SessionError::MutationRejected {
                        menu_item_id,
                        detail: e.detail(),
                    }
                } else {
                    SessionError::TransportFailure(e)
                }
            })?;

        tracing::debug!(order_id, menu_item_id, status = %ack.status, "Cart updated");
        self.fetch_draft(order_id).await
    }

    /// Fetch the active draft and project it for display
    ///
    /// Without a session this yields an empty cart and no request is made.
    pub async fn refresh_cart(&mut self) -> SessionResult<CartView> {
        match self.current_order_id() {
            Some(order_id) => Ok(cart::project(&self.fetch_draft(order_id).await?)),
            None => Ok(CartView::default()),
        }
    }

    /// Drop the visitor session and the cached count
    ///
    /// The in-memory session is dropped even if storage fails.
    pub fn invalidate(&mut self) -> SessionResult<()> {
        self.session = None;
        self.identity.clear()?;
        self.counter.reset()?;
        Ok(())
    }
}

impl<H: HttpClient + std::fmt::Debug> std::fmt::Debug for DraftOrderClient<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftOrderClient")
            .field("http", &self.http)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
