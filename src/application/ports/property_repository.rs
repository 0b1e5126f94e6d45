use async_trait::async_trait;

use super::RepositoryError;
use crate::application::dto::PropertySearchFilter;
use crate::domain::entities::{NewProperty, Property, PropertyListing};
#[cfg(test)]
use mockall::automock;

/// Port for property persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Properties matching `filter`, cheapest first, at most `limit` rows.
    /// Only properties with at least one review are returned.
    async fn search(
        &self,
        filter: &PropertySearchFilter,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, RepositoryError>;

    /// Insert a property; the nightly cost is stored in cents
    async fn create(&self, property: &NewProperty) -> Result<Property, RepositoryError>;
}
