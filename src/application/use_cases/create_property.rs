use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::errors::UseCaseError;
use crate::application::ports::PropertyRepository;
use crate::domain::entities::{NewProperty, Property};

/// Use case: Create a property listing
pub struct CreatePropertyUseCase {
    property_repo: Arc<dyn PropertyRepository>,
}

impl CreatePropertyUseCase {
    pub fn new(property_repo: Arc<dyn PropertyRepository>) -> Self {
        Self { property_repo }
    }

    /// Insert the property and return the stored row.
    ///
    /// `cost_per_night` goes in as dollars and comes back in cents.
    #[instrument(skip(self, property), fields(owner_id = %property.owner_id, title = %property.title))]
    pub async fn execute(&self, property: NewProperty) -> Result<Property, UseCaseError> {
        // Reject unrepresentable prices before a round trip
        property.cost_in_cents()?;

        let created = self.property_repo.create(&property).await?;
        info!(property_id = %created.id, cost_per_night = %created.cost_per_night, "Property created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockPropertyRepository;
    use crate::domain::value_objects::{Cents, PropertyId, UserId};

    fn create_test_new_property(cost_per_night: f64) -> NewProperty {
        NewProperty {
            owner_id: UserId::new(1),
            title: "Headed known".to_string(),
            description: Some("description".to_string()),
            thumbnail_photo_url: "thumb.jpg".to_string(),
            cover_photo_url: "cover.jpg".to_string(),
            cost_per_night,
            street: "1650 Hejto Center".to_string(),
            city: "Genwezuj".to_string(),
            province: "Newfoundland And Labrador".to_string(),
            post_code: "44583".to_string(),
            country: "Canada".to_string(),
            parking_spaces: 0,
            number_of_bathrooms: 2,
            number_of_bedrooms: 2,
        }
    }

    fn stored(property: &NewProperty) -> Property {
        Property {
            id: PropertyId::new(11),
            owner_id: property.owner_id,
            title: property.title.clone(),
            description: property.description.clone(),
            thumbnail_photo_url: property.thumbnail_photo_url.clone(),
            cover_photo_url: property.cover_photo_url.clone(),
            cost_per_night: property.cost_in_cents().unwrap(),
            street: property.street.clone(),
            city: property.city.clone(),
            province: property.province.clone(),
            post_code: property.post_code.clone(),
            country: property.country.clone(),
            parking_spaces: property.parking_spaces,
            number_of_bathrooms: property.number_of_bathrooms,
            number_of_bedrooms: property.number_of_bedrooms,
        }
    }

    #[tokio::test]
    async fn test_create_property_returns_cost_in_cents() {
        // Arrange
        let mut mock_property_repo = MockPropertyRepository::new();
        mock_property_repo
            .expect_create()
            .times(1)
            .returning(|property| Ok(stored(property)));

        let use_case = CreatePropertyUseCase::new(Arc::new(mock_property_repo));

        // Act
        let property = use_case
            .execute(create_test_new_property(150.0))
            .await
            .unwrap();

        // Assert
        assert_eq!(property.id, PropertyId::new(11));
        assert_eq!(property.cost_per_night, Cents::new(15000));
    }

    #[tokio::test]
    async fn test_create_property_rejects_non_finite_cost_without_querying() {
        let mut mock_property_repo = MockPropertyRepository::new();
        mock_property_repo.expect_create().times(0);

        let use_case = CreatePropertyUseCase::new(Arc::new(mock_property_repo));

        let result = use_case
            .execute(create_test_new_property(f64::INFINITY))
            .await;

        assert!(matches!(result, Err(UseCaseError::Domain(_))));
    }
}
