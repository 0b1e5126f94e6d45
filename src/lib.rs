//! # lightbnb_store - Data access for a vacation-rental booking site
//!
//! A thin PostgreSQL access layer: user lookup and creation, property search
//! and creation, and past-reservation listing for a guest.
//!
//! ## Architecture Layers
//!
//! - **Domain**: entities and value objects (ids, prices in cents)
//! - **Application**: ports (repository traits), DTOs, use cases
//! - **Infrastructure**: Postgres repositories, the property search query
//!   builder, and the connection pool handle
//!
//! ## Prices
//!
//! `cost_per_night` is stored in cents. Callers pass dollars on write
//! (`150.0`) and the store holds `15000`. Reads return the stored
//! [`value_objects::Cents`]; use [`value_objects::Cents::to_major`] to get dollars back.
//!
//! ## Example Usage
//!
//! ```no_run
//! use lightbnb_store::{application::ApplicationBuilder, dto::SearchPropertiesRequest, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = ApplicationBuilder::new(Config::from_env())
//!     .with_database()
//!     .await?
//!     .build()?;
//!
//! let request = SearchPropertiesRequest::default().with_city("Vancouver");
//! let response = app.search_properties.execute(request).await?;
//! println!("{} properties", response.total);
//!
//! app.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
