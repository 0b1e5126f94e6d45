use serde::{Deserialize, Serialize};

use crate::domain::entities::{PastReservation, PropertyListing};
use crate::domain::value_objects::UserId;

/// Optional criteria for property search.
///
/// A criterion only takes part in the query when it is *truthy*: a missing
/// value, an empty city, a zero id or price, and `NaN` are all treated as
/// "no filter". Use the `active_*` accessors rather than the raw fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearchFilter {
    /// Substring of the city name
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    /// Major units (dollars)
    pub minimum_price_per_night: Option<f64>,
    /// Major units (dollars)
    pub maximum_price_per_night: Option<f64>,
    /// 0-5 scale, compared against the average review rating
    pub minimum_rating: Option<f64>,
}

impl PropertySearchFilter {
    pub fn active_city(&self) -> Option<&str> {
        self.city.as_deref().filter(|city| !city.is_empty())
    }

    pub fn active_owner_id(&self) -> Option<UserId> {
        self.owner_id.filter(|id| *id != 0).map(UserId::new)
    }

    pub fn active_minimum_price(&self) -> Option<f64> {
        self.minimum_price_per_night.filter(is_truthy)
    }

    pub fn active_maximum_price(&self) -> Option<f64> {
        self.maximum_price_per_night.filter(is_truthy)
    }

    pub fn active_minimum_rating(&self) -> Option<f64> {
        self.minimum_rating.filter(is_truthy)
    }

    /// True when no criterion would restrict the search
    pub fn is_unfiltered(&self) -> bool {
        self.active_city().is_none()
            && self.active_owner_id().is_none()
            && self.active_minimum_price().is_none()
            && self.active_maximum_price().is_none()
            && self.active_minimum_rating().is_none()
    }
}

fn is_truthy(value: &f64) -> bool {
    *value != 0.0 && !value.is_nan()
}

/// DTO for property search request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPropertiesRequest {
    #[serde(flatten)]
    pub filter: PropertySearchFilter,
    pub limit: Option<i64>,
}

impl SearchPropertiesRequest {
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.filter.city = Some(city.into());
        self
    }

    pub fn with_owner_id(mut self, owner_id: i32) -> Self {
        self.filter.owner_id = Some(owner_id);
        self
    }

    pub fn with_price_range(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.filter.minimum_price_per_night = minimum;
        self.filter.maximum_price_per_night = maximum;
        self
    }

    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.filter.minimum_rating = Some(rating);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// DTO for property search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPropertiesResponse {
    pub properties: Vec<PropertyListing>,
    pub total: usize,
    pub limit: i64,
    /// No criterion restricted the search
    pub unfiltered: bool,
}

/// DTO for a guest's past reservations request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastReservationsRequest {
    pub guest_id: i32,
    pub limit: Option<i64>,
}

/// DTO for a guest's past reservations response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PastReservationsResponse {
    pub reservations: Vec<PastReservation>,
    pub total: usize,
    pub limit: i64,
}
