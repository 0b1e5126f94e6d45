//! SQL assembly for the filtered property search
//!
//! Placeholders are numbered by the position their value takes in the bind
//! list, so fragments never track indices themselves: the assembler hands
//! out `$N` as each value is bound.

use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::application::dto::PropertySearchFilter;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Cents;

/// Common SQL fragments for property queries
pub struct QueryBuilder;

impl QueryBuilder {
    /// Properties joined to their reviews, with the averaged rating.
    /// The inner join drops properties that have no reviews.
    pub const PROPERTY_SEARCH_SELECT: &'static str = "SELECT properties.*, \
         avg(property_reviews.rating)::float8 AS average_rating \
         FROM properties \
         JOIN property_reviews ON properties.id = property_reviews.property_id";

    pub const PROPERTY_SEARCH_GROUP_BY: &'static str = "GROUP BY properties.id";
}

/// A bind value for a dynamically assembled query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryParam {
    Text(String),
    Integer(i32),
    BigInt(i64),
    Real(f64),
}

/// One optional `WHERE` condition: `{expression}$N{cast}`
struct Predicate {
    expression: &'static str,
    cast: &'static str,
    value: QueryParam,
}

/// Accumulates clauses and bind values, numbering placeholders as it goes
struct SqlAssembler {
    clauses: Vec<String>,
    params: Vec<QueryParam>,
    has_predicate: bool,
}

impl SqlAssembler {
    fn new(base: &str) -> Self {
        Self {
            clauses: vec![base.to_string()],
            params: Vec::new(),
            has_predicate: false,
        }
    }

    /// Append a bind value and return its 1-based placeholder index
    fn bind(&mut self, value: QueryParam) -> usize {
        self.params.push(value);
        self.params.len()
    }

    fn push(&mut self, clause: impl Into<String>) {
        self.clauses.push(clause.into());
    }

    /// `WHERE` for the first predicate, `AND` after that
    fn push_predicate(&mut self, predicate: Predicate) {
        let keyword = if self.has_predicate { "AND" } else { "WHERE" };
        let index = self.bind(predicate.value);
        self.push(format!(
            "{} {}${}{}",
            keyword, predicate.expression, index, predicate.cast
        ));
        self.has_predicate = true;
    }

    fn finish(self) -> PropertyQuery {
        PropertyQuery {
            sql: self.clauses.join(" "),
            params: self.params,
        }
    }
}

/// A fully assembled property search: query text plus its bind values in
/// placeholder order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyQuery {
    sql: String,
    params: Vec<QueryParam>,
}

impl PropertyQuery {
    /// Assemble the search query for `filter`, returning at most `limit` rows.
    ///
    /// Only truthy criteria are included. `WHERE`-able criteria go in the
    /// fixed order city, owner, minimum price, maximum price; prices are
    /// bound in cents. The minimum rating always becomes a `HAVING` on the
    /// averaged rating, and the limit is always the last parameter.
    pub fn build(filter: &PropertySearchFilter, limit: i64) -> Result<Self, DomainError> {
        let mut predicates = Vec::with_capacity(4);

        if let Some(city) = filter.active_city() {
            predicates.push(Predicate {
                expression: "city LIKE ",
                cast: "",
                value: QueryParam::Text(format!("%{}%", city)),
            });
        }

        if let Some(owner_id) = filter.active_owner_id() {
            predicates.push(Predicate {
                expression: "properties.owner_id = ",
                cast: "::integer",
                value: QueryParam::Integer(owner_id.as_i32()),
            });
        }

        if let Some(minimum) = filter.active_minimum_price() {
            predicates.push(Predicate {
                expression: "properties.cost_per_night >= ",
                cast: "::integer",
                value: QueryParam::Integer(Cents::from_major(minimum)?.as_i32()),
            });
        }

        if let Some(maximum) = filter.active_maximum_price() {
            predicates.push(Predicate {
                expression: "properties.cost_per_night <= ",
                cast: "::integer",
                value: QueryParam::Integer(Cents::from_major(maximum)?.as_i32()),
            });
        }

        let mut assembler = predicates.into_iter().fold(
            SqlAssembler::new(QueryBuilder::PROPERTY_SEARCH_SELECT),
            |mut assembler, predicate| {
                assembler.push_predicate(predicate);
                assembler
            },
        );

        assembler.push(QueryBuilder::PROPERTY_SEARCH_GROUP_BY);

        if let Some(rating) = filter.active_minimum_rating() {
            let index = assembler.bind(QueryParam::Real(rating));
            assembler.push(format!(
                "HAVING avg(property_reviews.rating) >= ${}::real",
                index
            ));
        }

        let index = assembler.bind(QueryParam::BigInt(limit));
        assembler.push(format!("ORDER BY cost_per_night LIMIT ${}", index));

        Ok(assembler.finish())
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[QueryParam] {
        &self.params
    }

    /// Prepare the query with every parameter bound in placeholder order
    pub fn query_as<'q, O>(&'q self) -> QueryAs<'q, Postgres, O, PgArguments>
    where
        O: for<'r> FromRow<'r, PgRow>,
    {
        self.params
            .iter()
            .fold(sqlx::query_as::<_, O>(&self.sql), |query, param| match param {
                QueryParam::Text(value) => query.bind(value.as_str()),
                QueryParam::Integer(value) => query.bind(*value),
                QueryParam::BigInt(value) => query.bind(*value),
                QueryParam::Real(value) => query.bind(*value),
            })
    }
}
