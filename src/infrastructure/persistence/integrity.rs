//! Read-only checks for stored data that breaks what the repositories assume
//!
//! Each check counts every offending row and fetches at most `show` of them
//! as samples, so the totals never depend on how many rows are printed.

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

struct CheckQuery {
    label: &'static str,
    count_sql: &'static str,
    sample_sql: &'static str,
}

const CHECKS: [CheckQuery; 3] = [
    CheckQuery {
        label: "Properties with non-positive cost_per_night",
        count_sql: "SELECT count(*) FROM properties WHERE cost_per_night <= 0",
        sample_sql: "SELECT id, 'cost_per_night = ' || cost_per_night AS detail \
                     FROM properties WHERE cost_per_night <= 0 ORDER BY id LIMIT $1",
    },
    CheckQuery {
        label: "Reviews with rating outside 0-5",
        count_sql: "SELECT count(*) FROM property_reviews WHERE rating < 0 OR rating > 5",
        sample_sql: "SELECT id, 'property ' || property_id || ': rating = ' || rating AS detail \
                     FROM property_reviews WHERE rating < 0 OR rating > 5 ORDER BY id LIMIT $1",
    },
    CheckQuery {
        label: "Reservations ending before they start",
        count_sql: "SELECT count(*) FROM reservations WHERE end_date < start_date",
        sample_sql: "SELECT id, start_date || ' -> ' || end_date AS detail \
                     FROM reservations WHERE end_date < start_date ORDER BY id LIMIT $1",
    },
];

/// One offending row
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct IntegritySample {
    pub id: i32,
    pub detail: String,
}

/// Result of one check: the full count plus a bounded sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrityCheck {
    pub label: &'static str,
    pub total: i64,
    pub samples: Vec<IntegritySample>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrityReport {
    pub checks: Vec<IntegrityCheck>,
    /// Informational: the search join hides these
    pub unreviewed_properties: i64,
}

impl IntegrityReport {
    /// Total offending rows across every check
    pub fn problems(&self) -> i64 {
        self.checks.iter().map(|check| check.total).sum()
    }

    /// Run every check, keeping at most `show` samples per check
    #[instrument(skip(pool))]
    pub async fn collect(pool: &PgPool, show: i64) -> Result<Self, sqlx::Error> {
        let mut checks = Vec::with_capacity(CHECKS.len());

        for query in CHECKS.iter() {
            let total: i64 = sqlx::query_scalar(query.count_sql).fetch_one(pool).await?;
            let samples = sqlx::query_as::<_, IntegritySample>(query.sample_sql)
                .bind(show.max(0))
                .fetch_all(pool)
                .await?;
            debug!(check = query.label, total, "Integrity check complete");

            checks.push(IntegrityCheck {
                label: query.label,
                total,
                samples,
            });
        }

        let unreviewed_properties: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM properties \
             WHERE NOT EXISTS (SELECT 1 FROM property_reviews \
                               WHERE property_reviews.property_id = properties.id)",
        )
        .fetch_one(pool)
        .await?;

        Ok(Self {
            checks,
            unreviewed_properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(total: i64) -> IntegrityCheck {
        IntegrityCheck {
            label: "check",
            total,
            samples: vec![],
        }
    }

    #[test]
    fn test_problems_sums_totals_not_samples() {
        let report = IntegrityReport {
            checks: vec![check(4), check(0), check(2)],
            unreviewed_properties: 7,
        };
        assert_eq!(report.problems(), 6);
    }
}
