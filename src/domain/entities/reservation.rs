use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Property;
use crate::domain::value_objects::{PropertyId, ReservationId, UserId};

/// A guest's booking of a property between two calendar dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest_id: UserId,
    pub property_id: PropertyId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A finished reservation together with the reserved property and its
/// average review rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastReservation {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: f64,
}
