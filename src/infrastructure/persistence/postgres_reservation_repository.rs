use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::PastReservationRow;
use crate::application::ports::{RepositoryError, ReservationRepository};
use crate::domain::entities::PastReservation;
use crate::domain::value_objects::UserId;

pub struct PostgresReservationRepository {
    pool: PgPool,
}

impl PostgresReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PostgresReservationRepository {
    async fn list_past_for_guest(
        &self,
        guest_id: UserId,
        limit: i64,
    ) -> Result<Vec<PastReservation>, RepositoryError> {
        let rows = sqlx::query_as::<_, PastReservationRow>(
            r#"
            SELECT reservations.id AS reservation_id,
                   reservations.guest_id,
                   reservations.start_date,
                   reservations.end_date,
                   properties.*,
                   avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON property_reviews.property_id = properties.id
            WHERE reservations.guest_id = $1::integer
              AND reservations.end_date < NOW()::date
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id.as_i32())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PastReservationRow::into_domain).collect())
    }
}
