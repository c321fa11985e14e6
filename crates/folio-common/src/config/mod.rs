//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, ConfigError, CorsConfig, DatabaseConfig, JwtConfig, RateLimitConfig,
    ServerConfig, ServerMode, StorageConfig,
};
