use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::dto::{SearchPropertiesRequest, SearchPropertiesResponse};
use crate::application::errors::UseCaseError;
use crate::application::ports::PropertyRepository;
use crate::config::DEFAULT_LIMIT;

/// Use case: Filtered property search
pub struct SearchPropertiesUseCase {
    property_repo: Arc<dyn PropertyRepository>,
    default_limit: i64,
}

impl SearchPropertiesUseCase {
    pub fn new(property_repo: Arc<dyn PropertyRepository>) -> Self {
        Self {
            property_repo,
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    /// Execute search; an empty result is `Ok` with no properties
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        request: SearchPropertiesRequest,
    ) -> Result<SearchPropertiesResponse, UseCaseError> {
        let limit = request.limit.unwrap_or(self.default_limit);
        let unfiltered = request.filter.is_unfiltered();

        let properties = self.property_repo.search(&request.filter, limit).await?;
        let total = properties.len();
        debug!(total, limit, unfiltered, "Property search complete");

        Ok(SearchPropertiesResponse {
            properties,
            total,
            limit,
            unfiltered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::PropertySearchFilter;
    use crate::application::ports::MockPropertyRepository;
    use crate::domain::entities::{Property, PropertyListing};
    use crate::domain::value_objects::{Cents, PropertyId, UserId};
    use mockall::predicate::{always, eq};

    fn create_test_listing(id: i32, cost: i32) -> PropertyListing {
        PropertyListing {
            property: Property {
                id: PropertyId::new(id),
                owner_id: UserId::new(3),
                title: format!("Listing {}", id),
                description: None,
                thumbnail_photo_url: "thumb.jpg".to_string(),
                cover_photo_url: "cover.jpg".to_string(),
                cost_per_night: Cents::new(cost),
                street: "1 Main St".to_string(),
                city: "Vancouver".to_string(),
                province: "BC".to_string(),
                post_code: "V5K".to_string(),
                country: "Canada".to_string(),
                parking_spaces: 1,
                number_of_bathrooms: 1,
                number_of_bedrooms: 2,
            },
            average_rating: 4.2,
        }
    }

    #[tokio::test]
    async fn test_search_properties_happy_path() {
        // Arrange
        let mut mock_property_repo = MockPropertyRepository::new();
        let listings = vec![create_test_listing(1, 9000), create_test_listing(2, 12000)];
        let expected_filter = PropertySearchFilter {
            city: Some("Vancouver".to_string()),
            ..PropertySearchFilter::default()
        };
        mock_property_repo
            .expect_search()
            .with(eq(expected_filter), eq(5_i64))
            .times(1)
            .returning(move |_, _| Ok(listings.clone()));

        let use_case = SearchPropertiesUseCase::new(Arc::new(mock_property_repo));

        // Act
        let result = use_case
            .execute(
                SearchPropertiesRequest::default()
                    .with_city("Vancouver")
                    .with_limit(5),
            )
            .await;

        // Assert
        let response = result.unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.limit, 5);
        assert!(!response.unfiltered);
        assert_eq!(response.properties[0].property.id, PropertyId::new(1));
    }

    #[tokio::test]
    async fn test_search_properties_defaults_limit_to_ten() {
        let mut mock_property_repo = MockPropertyRepository::new();
        mock_property_repo
            .expect_search()
            .with(always(), eq(10_i64))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let use_case = SearchPropertiesUseCase::new(Arc::new(mock_property_repo));

        let response = use_case
            .execute(SearchPropertiesRequest::default())
            .await
            .unwrap();

        assert_eq!(response.total, 0);
        assert_eq!(response.limit, 10);
        assert!(response.unfiltered);
    }

    #[tokio::test]
    async fn test_search_properties_falsy_criteria_report_unfiltered() {
        let mut mock_property_repo = MockPropertyRepository::new();
        mock_property_repo
            .expect_search()
            .with(always(), eq(10_i64))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let use_case = SearchPropertiesUseCase::new(Arc::new(mock_property_repo));

        let request = SearchPropertiesRequest::default()
            .with_city("")
            .with_owner_id(0)
            .with_price_range(Some(0.0), Some(f64::NAN));
        let response = use_case.execute(request).await.unwrap();

        assert!(response.unfiltered);
    }

    #[tokio::test]
    async fn test_search_properties_configured_default_limit() {
        let mut mock_property_repo = MockPropertyRepository::new();
        mock_property_repo
            .expect_search()
            .with(always(), eq(25_i64))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let use_case =
            SearchPropertiesUseCase::new(Arc::new(mock_property_repo)).with_default_limit(25);

        let response = use_case
            .execute(SearchPropertiesRequest::default())
            .await
            .unwrap();
        assert_eq!(response.limit, 25);
    }
}
