use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::query_builder::PropertyQuery;
use super::rows::{PropertyListingRow, PropertyRow};
use crate::application::dto::PropertySearchFilter;
use crate::application::ports::{PropertyRepository, RepositoryError};
use crate::domain::entities::{NewProperty, Property, PropertyListing};

pub struct PostgresPropertyRepository {
    pool: PgPool,
}

impl PostgresPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PostgresPropertyRepository {
    async fn search(
        &self,
        filter: &PropertySearchFilter,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, RepositoryError> {
        let query = PropertyQuery::build(filter, limit)?;
        debug!(sql = query.sql(), params = query.params().len(), "Searching properties");

        let rows: Vec<PropertyListingRow> = query.query_as().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(PropertyListingRow::into_domain).collect())
    }

    async fn create(&self, property: &NewProperty) -> Result<Property, RepositoryError> {
        let cost_per_night = property.cost_in_cents()?;

        let row = sqlx::query_as::<_, PropertyRow>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            )
            VALUES (
                $1::integer, $2::varchar, $3::text, $4::varchar, $5::varchar,
                $6::integer, $7::varchar, $8::varchar, $9::varchar, $10::varchar, $11::varchar,
                $12::integer, $13::integer, $14::integer
            )
            RETURNING *
            "#,
        )
        .bind(property.owner_id.as_i32())
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(cost_per_night.as_i32())
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_domain())
    }
}
