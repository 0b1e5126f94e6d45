mod cents;
mod ids;

pub use cents::Cents;
pub use ids::{PropertyId, ReservationId, UserId};
