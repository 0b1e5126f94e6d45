//! Internal row mapping structs shared by the Postgres repositories

use chrono::NaiveDate;

use crate::domain::entities::{PastReservation, Property, PropertyListing, Reservation, User};
use crate::domain::value_objects::{Cents, PropertyId, ReservationId, UserId};

#[derive(sqlx::FromRow)]
pub(crate) struct UserRow {
    id: i32,
    name: String,
    email: String,
    password: String,
}

impl UserRow {
    pub(crate) fn into_domain(self) -> User {
        User {
            id: UserId::new(self.id),
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct PropertyRow {
    id: i32,
    owner_id: i32,
    title: String,
    description: Option<String>,
    thumbnail_photo_url: String,
    cover_photo_url: String,
    cost_per_night: i32,
    street: String,
    city: String,
    province: String,
    post_code: String,
    country: String,
    parking_spaces: i32,
    number_of_bathrooms: i32,
    number_of_bedrooms: i32,
}

impl PropertyRow {
    pub(crate) fn into_domain(self) -> Property {
        Property {
            id: PropertyId::new(self.id),
            owner_id: UserId::new(self.owner_id),
            title: self.title,
            description: self.description,
            thumbnail_photo_url: self.thumbnail_photo_url,
            cover_photo_url: self.cover_photo_url,
            cost_per_night: Cents::new(self.cost_per_night),
            street: self.street,
            city: self.city,
            province: self.province,
            post_code: self.post_code,
            country: self.country,
            parking_spaces: self.parking_spaces,
            number_of_bathrooms: self.number_of_bathrooms,
            number_of_bedrooms: self.number_of_bedrooms,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct PropertyListingRow {
    #[sqlx(flatten)]
    property: PropertyRow,
    average_rating: f64,
}

impl PropertyListingRow {
    pub(crate) fn into_domain(self) -> PropertyListing {
        PropertyListing {
            property: self.property.into_domain(),
            average_rating: self.average_rating,
        }
    }
}

/// Reservation columns are aliased so they don't collide with `properties.*`
#[derive(sqlx::FromRow)]
pub(crate) struct PastReservationRow {
    reservation_id: i32,
    guest_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[sqlx(flatten)]
    property: PropertyRow,
    average_rating: f64,
}

impl PastReservationRow {
    pub(crate) fn into_domain(self) -> PastReservation {
        let property = self.property.into_domain();
        PastReservation {
            reservation: Reservation {
                id: ReservationId::new(self.reservation_id),
                guest_id: UserId::new(self.guest_id),
                property_id: property.id,
                start_date: self.start_date,
                end_date: self.end_date,
            },
            property,
            average_rating: self.average_rating,
        }
    }
}
