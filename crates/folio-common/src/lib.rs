//! # folio-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_dummy_password, verify_password, Claims, JwtService};
pub use self::config::{
    AppConfig, ConfigError, CorsConfig, DatabaseConfig, JwtConfig, RateLimitConfig, ServerConfig,
    ServerMode, StorageConfig,
};
pub use error::{domain_status, AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
