use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::PastReservation;
use crate::domain::value_objects::UserId;
#[cfg(test)]
use mockall::automock;

/// Port for reservation queries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Reservations of `guest_id` that ended before today, earliest start first
    async fn list_past_for_guest(
        &self,
        guest_id: UserId,
        limit: i64,
    ) -> Result<Vec<PastReservation>, RepositoryError>;
}
