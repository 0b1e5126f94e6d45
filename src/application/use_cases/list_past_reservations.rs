use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::dto::{PastReservationsRequest, PastReservationsResponse};
use crate::application::errors::UseCaseError;
use crate::application::ports::ReservationRepository;
use crate::config::DEFAULT_LIMIT;
use crate::domain::value_objects::UserId;

/// Use case: List a guest's finished reservations
pub struct ListPastReservationsUseCase {
    reservation_repo: Arc<dyn ReservationRepository>,
    default_limit: i64,
}

impl ListPastReservationsUseCase {
    pub fn new(reservation_repo: Arc<dyn ReservationRepository>) -> Self {
        Self {
            reservation_repo,
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        request: PastReservationsRequest,
    ) -> Result<PastReservationsResponse, UseCaseError> {
        let limit = request.limit.unwrap_or(self.default_limit);

        let reservations = self
            .reservation_repo
            .list_past_for_guest(UserId::new(request.guest_id), limit)
            .await?;
        let total = reservations.len();
        debug!(total, limit, "Past reservations loaded");

        Ok(PastReservationsResponse {
            reservations,
            total,
            limit,
        })
    }
}
