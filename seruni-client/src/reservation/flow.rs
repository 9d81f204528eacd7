// seruni-client/src/reservation/flow.rs
// Reservation submission state machine

use shared::models::{DraftOrderItem, Location, OrderId, Reservation};

use super::form::{ReservationDetails, ReservationForm};
use super::handoff::{MessageHandoff, format_summary};
use crate::client::HttpClient;
use crate::error::{SessionError, SessionResult};
use crate::session::DraftOrderClient;

/// Current step of the booking flow, as painted by the UI
///
/// `Idle → Validating → AwaitingConfirmation → Submitting → Succeeded`.
/// A failed submission goes back to `AwaitingConfirmation` with the entered
/// details intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationState {
    Idle,
    Validating,
    AwaitingConfirmation(ReservationDetails),
    Submitting(ReservationDetails),
    Succeeded(ReservationReceipt),
}

impl ReservationState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::AwaitingConfirmation(_) => "awaiting_confirmation",
            Self::Submitting(_) => "submitting",
            Self::Succeeded(_) => "succeeded",
        }
    }
}

/// Outcome of a successful booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationReceipt {
    pub reservation: Reservation,
    /// Summary handed to the messaging collaborator
    pub message: String,
    /// Digits-only number the message went to; `None` if the location has none
    pub contact_phone: Option<String>,
}

/// Drives one booking from form submit to messaging hand-off
pub struct ReservationFlow<M: MessageHandoff> {
    state: ReservationState,
    handoff: M,
    restaurant_name: String,
}

impl<M: MessageHandoff> ReservationFlow<M> {
    pub fn new(handoff: M, restaurant_name: impl Into<String>) -> Self {
        Self {
            state: ReservationState::Idle,
            handoff,
            restaurant_name: restaurant_name.into(),
        }
    }

    pub fn state(&self) -> &ReservationState {
        &self.state
    }

    /// The confirm control is only live while waiting for confirmation
    pub fn is_confirm_enabled(&self) -> bool {
        matches!(self.state, ReservationState::AwaitingConfirmation(_))
    }

    /// Validate the form and open the confirmation step
    ///
    /// No network call is made. On a violation the flow is back at `Idle`.
    pub fn submit(&mut self, form: &ReservationForm) -> SessionResult<ReservationDetails> {
        match self.state {
            ReservationState::Idle | ReservationState::AwaitingConfirmation(_) => {}
            _ => {
                return Err(SessionError::InvalidState {
                    expected: "idle",
                    actual: self.state.name(),
                });
            }
        }

        self.state = ReservationState::Validating;
        match form.validate() {
            Ok(details) => {
                self.state = ReservationState::AwaitingConfirmation(details.clone());
                Ok(details)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Reservation form rejected");
                self.state = ReservationState::Idle;
                Err(e)
            }
        }
    }

    /// Abort the confirmation step
    pub fn cancel(&mut self) {
        if let ReservationState::AwaitingConfirmation(_) = self.state {
            self.state = ReservationState::Idle;
        }
    }

    /// Start over after a completed booking
    pub fn reset(&mut self) {
        if !matches!(self.state, ReservationState::Submitting(_)) {
            self.state = ReservationState::Idle;
        }
    }

    /// Confirm the booking: attach the draft, create the reservation,
    /// clear the visitor session and hand the summary to messaging.
    ///
    /// `locations` resolves the contact number of the chosen location.
    pub async fn confirm<H: HttpClient>(
        &mut self,
        drafts: &mut DraftOrderClient<H>,
        locations: &[Location],
    ) -> SessionResult<ReservationReceipt> {
        let details = match &self.state {
            ReservationState::AwaitingConfirmation(details) => details.clone(),
            other => {
                return Err(SessionError::InvalidState {
                    expected: "awaiting_confirmation",
                    actual: other.name(),
                });
            }
        };
        self.state = ReservationState::Submitting(details.clone());

        match self.submit_reservation(&details, drafts).await {
            Ok((reservation, items)) => self.complete(reservation, &items, drafts, locations),
            Err(e) => {
                tracing::warn!(error = %e, "Reservation submission failed");
                self.state = ReservationState::AwaitingConfirmation(details);
                Err(e)
            }
        }
    }

    /// Capture the draft and create the reservation
    async fn submit_reservation<H: HttpClient>(
        &self,
        details: &ReservationDetails,
        drafts: &mut DraftOrderClient<H>,
    ) -> SessionResult<(Reservation, Vec<DraftOrderItem>)> {
        let (order_id, items) = capture_draft(drafts).await?;
        let request = details.to_request(order_id);

        let reservation: Reservation = drafts
            .http()
            .post("/reservations/", &request, drafts.visitor_token())
            .await
            .map_err(|e| {
                if e.is_rejection() {
                    SessionError::ReservationRejected { detail: e.detail() }
                } else {
                    SessionError::TransportFailure(e)
                }
            })?;

        tracing::info!(
            reservation_id = reservation.id,
            queue_number = reservation.queue_number,
            order_id = ?order_id,
            "Reservation created"
        );
        Ok((reservation, items))
    }

    fn complete<H: HttpClient>(
        &mut self,
        reservation: Reservation,
        items: &[DraftOrderItem],
        drafts: &mut DraftOrderClient<H>,
        locations: &[Location],
    ) -> SessionResult<ReservationReceipt> {
        let message = format_summary(&self.restaurant_name, &reservation, items);

        // The draft is consumed; never reuse it
        if let Err(e) = drafts.invalidate() {
            tracing::error!(error = %e, "Failed to clear visitor session after reservation");
        }

        let contact_phone = locations
            .iter()
            .find(|l| l.id == reservation.location_id)
            .and_then(Location::contact_digits);

        let receipt = ReservationReceipt {
            reservation,
            message,
            contact_phone,
        };
        self.state = ReservationState::Succeeded(receipt.clone());

        match &receipt.contact_phone {
            Some(phone) => {
                self.handoff.hand_off(phone, &receipt.message);
                Ok(receipt)
            }
            None => {
                tracing::warn!(
                    location_id = receipt.reservation.location_id,
                    reservation_id = receipt.reservation.id,
                    "Location has no contact number, reservation created without hand-off"
                );
                Err(SessionError::HandoffMissingPhone {
                    location_id: receipt.reservation.location_id,
                    reservation_id: receipt.reservation.id,
                    queue_number: receipt.reservation.queue_number,
                })
            }
        }
    }
}

/// Fetch the active draft once. The order id is sent whenever a draft
/// was loaded, even with no lines; only a missing session sends none.
async fn capture_draft<H: HttpClient>(
    drafts: &mut DraftOrderClient<H>,
) -> SessionResult<(Option<OrderId>, Vec<DraftOrderItem>)> {
    let Some(order_id) = drafts.current_order_id() else {
        return Ok((None, Vec::new()));
    };

    let draft = drafts.fetch_draft(order_id).await?;
    let items: Vec<DraftOrderItem> = draft
        .items
        .into_iter()
        .filter(|i| i.quantity > 0)
        .collect();

    Ok((Some(order_id), items))
}

impl<M: MessageHandoff> std::fmt::Debug for ReservationFlow<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationFlow")
            .field("state", &self.state)
            .field("restaurant_name", &self.restaurant_name)
            .finish_non_exhaustive()
    }
}
