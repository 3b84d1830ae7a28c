//! # member-service
//!
//! Members grouped into teams, stored through repository traits with a
//! SeaORM backend, and served over a small REST API.
//!
//! ## Architecture
//!
//! - **domain**: entities, auditing and repository traits
//! - **application**: unit of work, auditor providers, startup seeding
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: HTTP API with Swagger documentation
//! - **shared**: paging primitives, errors, shutdown coordination

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, Migrator, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
