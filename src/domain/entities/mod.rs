mod property;
mod reservation;
mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::{PastReservation, Reservation};
pub use user::{NewUser, User};
