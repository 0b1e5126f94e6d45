mod database;
mod integrity;
mod postgres_property_repository;
mod postgres_reservation_repository;
mod postgres_user_repository;
mod query_builder;
mod rows;

pub use database::Database;
pub use integrity::{IntegrityCheck, IntegrityReport, IntegritySample};
pub use postgres_property_repository::PostgresPropertyRepository;
pub use postgres_reservation_repository::PostgresReservationRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use query_builder::{PropertyQuery, QueryBuilder, QueryParam};
