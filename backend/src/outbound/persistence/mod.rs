//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Adapters translate between Diesel rows (`models.rs`, `schema.rs`) and
//! domain types and contain no business rules. Connections come from an
//! explicitly constructed [`DbPool`] via `diesel-async` and `bb8`; every
//! failure is mapped to the owning port's error enum.
//!
//! # Example
//!
//! ```no_run
//! use ladder::outbound::persistence::{DbPool, DieselLadderRepository, PoolConfig};
//!
//! # async fn demo() -> Result<(), ladder::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/ladder")).await?;
//! let ladders = DieselLadderRepository::new(pool);
//! # let _ = ladders;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_ladder_repository;
mod diesel_match_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_ladder_repository::DieselLadderRepository;
pub use diesel_match_repository::DieselMatchRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{
    MIGRATIONS, MigrationError, run_pending_migrations, run_pending_migrations_blocking,
};
pub use pool::{DbPool, PoolConfig, PoolError};
