use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::application::{
    ports::{PropertyRepository, ReservationRepository, UserRepository},
    use_cases::{
        CreatePropertyUseCase, CreateUserUseCase, GetUserUseCase, ListPastReservationsUseCase,
        SearchPropertiesUseCase,
    },
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    Database, PostgresPropertyRepository, PostgresReservationRepository, PostgresUserRepository,
};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Database not configured; call with_database or with_pool first")]
    MissingDatabase,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Everything a caller needs: the pool handle plus one use case per
/// operation, all sharing that pool
pub struct Application {
    pub database: Database,
    pub get_user: Arc<GetUserUseCase>,
    pub create_user: Arc<CreateUserUseCase>,
    pub search_properties: Arc<SearchPropertiesUseCase>,
    pub create_property: Arc<CreatePropertyUseCase>,
    pub past_reservations: Arc<ListPastReservationsUseCase>,
}

impl Application {
    /// Close the connection pool; in-flight queries finish first
    pub async fn shutdown(&self) {
        info!("Shutting down");
        self.database.close().await;
    }
}

/// Application builder for dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    database: Option<Database>,
    user_repo: Option<Arc<dyn UserRepository>>,
    property_repo: Option<Arc<dyn PropertyRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            database: None,
            user_repo: None,
            property_repo: None,
            reservation_repo: None,
        }
    }

    /// Open the connection pool described by the config
    pub async fn with_database(mut self) -> Result<Self, BuildError> {
        info!("Connecting to database");
        self.database = Some(Database::connect(&self.config).await?);
        Ok(self)
    }

    /// Use a pool opened elsewhere
    pub fn with_pool(mut self, pool: PgPool) -> Self {
        self.database = Some(Database::from_pool(pool));
        self
    }

    /// Override the user repository (defaults to Postgres)
    pub fn with_user_repository(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    /// Override the property repository (defaults to Postgres)
    pub fn with_property_repository(mut self, repo: Arc<dyn PropertyRepository>) -> Self {
        self.property_repo = Some(repo);
        self
    }

    /// Override the reservation repository (defaults to Postgres)
    pub fn with_reservation_repository(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn build(self) -> Result<Application, BuildError> {
        let database = self.database.ok_or(BuildError::MissingDatabase)?;
        let pool = database.pool().clone();

        let user_repo: Arc<dyn UserRepository> = match self.user_repo {
            Some(repo) => repo,
            None => Arc::new(PostgresUserRepository::new(pool.clone())),
        };
        let property_repo: Arc<dyn PropertyRepository> = match self.property_repo {
            Some(repo) => repo,
            None => Arc::new(PostgresPropertyRepository::new(pool.clone())),
        };
        let reservation_repo: Arc<dyn ReservationRepository> = match self.reservation_repo {
            Some(repo) => repo,
            None => Arc::new(PostgresReservationRepository::new(pool)),
        };

        let default_limit = self.config.default_limit;
        let app = Application {
            database,
            get_user: Arc::new(GetUserUseCase::new(Arc::clone(&user_repo))),
            create_user: Arc::new(CreateUserUseCase::new(user_repo)),
            search_properties: Arc::new(
                SearchPropertiesUseCase::new(Arc::clone(&property_repo))
                    .with_default_limit(default_limit),
            ),
            create_property: Arc::new(CreatePropertyUseCase::new(property_repo)),
            past_reservations: Arc::new(
                ListPastReservationsUseCase::new(reservation_repo)
                    .with_default_limit(default_limit),
            ),
        };

        info!("Application layer initialized");
        Ok(app)
    }
}
