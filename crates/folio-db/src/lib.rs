//! # folio-db
//!
//! Database layer implementing the `folio-core` repository traits with
//! PostgreSQL via SQLx.
//!
//! - Connection pool management and SQL migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ```rust,ignore
//! use folio_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use folio_db::repositories::PgPostRepository;
//!
//! let pool = create_pool(&DatabaseConfig::with_url(url)).await?;
//! run_migrations(&pool).await?;
//! let posts = PgPostRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool, MIGRATIONS_DIR};
pub use repositories::{
    PgContactRepository, PgExperienceRepository, PgImageRepository, PgPostRepository,
    PgProfileRepository, PgProjectRepository, PgSkillRepository, PgTagRepository,
    PgUserRepository,
};
