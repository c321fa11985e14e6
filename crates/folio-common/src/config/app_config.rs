//! Application configuration structs
//!
//! Settings come from an optional config file (`config.toml` by default,
//! `FOLIO_CONFIG` to point elsewhere) overlaid by environment variables. Both
//! use the same flat keys: `SERVER_PORT` in the environment is `server_port`
//! in the file.

use std::str::FromStr;

use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub rate_limit: RateLimitConfig,
}

/// Server run mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServerMode {
    #[default]
    Debug,
    Release,
    Test,
}

impl ServerMode {
    #[must_use]
    pub fn is_release(&self) -> bool {
        matches!(self, Self::Release)
    }
}

impl FromStr for ServerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            "test" => Ok(Self::Test),
            _ => Err(ConfigError::InvalidValue("SERVER_MODE", s.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub mode: ServerMode,
    /// Public origin used to build absolute media URLs
    pub base_url: String,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations at startup
    pub auto_migrate: bool,
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Media storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory served under `/media`
    pub root: String,
    pub max_upload_bytes: u64,
}

const DEFAULT_CONFIG_FILE: &str = "config";
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

impl AppConfig {
    /// Load configuration from `.env`, the optional config file and the
    /// process environment (highest precedence)
    ///
    /// # Errors
    /// Returns an error if a required value is missing or a value fails to parse
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let file = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(&file).required(false))
            .add_source(::config::Environment::default())
            .build()
            .map_err(|e| ConfigError::Source(e.to_string()))?;

        Self::from_settings(&settings)
    }

    /// Build from a layered `config::Config`
    ///
    /// # Errors
    /// Returns an error if a required value is missing or a value fails to parse
    pub fn from_settings(settings: &::config::Config) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| settings.get_string(&key.to_lowercase()).ok())
    }

    /// Build from a key lookup function using upper-case variable names
    ///
    /// # Errors
    /// Returns an error if a required value is missing or a value fails to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let server = ServerConfig {
            host: vars.string_or("SERVER_HOST", "0.0.0.0"),
            port: vars.parse_or("SERVER_PORT", 8080)?,
            mode: vars.parse_or("SERVER_MODE", ServerMode::Debug)?,
            base_url: vars
                .string_or("SERVER_BASE_URL", "http://localhost:8080")
                .trim_end_matches('/')
                .to_string(),
        };

        let url = match vars.get("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode={}",
                vars.string_or("DB_USER", "postgres"),
                vars.string_or("DB_PASSWORD", "password"),
                vars.string_or("DB_HOST", "localhost"),
                vars.parse_or::<u16>("DB_PORT", 5432)?,
                vars.string_or("DB_NAME", "personal_db"),
                vars.string_or("DB_SSLMODE", "disable"),
            ),
        };
        let database = DatabaseConfig {
            url,
            max_connections: vars.parse_or("DB_MAX_CONNECTIONS", 10)?,
            min_connections: vars.parse_or("DB_MIN_CONNECTIONS", 1)?,
            auto_migrate: vars.parse_or("DB_AUTO_MIGRATE", true)?,
        };

        let secret = vars.get("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?;
        if secret.is_empty() {
            return Err(ConfigError::InvalidValue("JWT_SECRET", "empty".to_string()));
        }
        let expiration_hours: i64 = vars.parse_or("JWT_EXPIRATION", 24)?;
        if expiration_hours < 1 {
            return Err(ConfigError::InvalidValue(
                "JWT_EXPIRATION",
                expiration_hours.to_string(),
            ));
        }

        let cors = CorsConfig {
            allowed_origins: vars
                .get("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        };

        let storage = StorageConfig {
            root: vars.string_or("STORAGE_ROOT", "./storage"),
            max_upload_bytes: vars.parse_or("STORAGE_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        };

        let rate_limit = RateLimitConfig {
            requests_per_second: vars.parse_or("RATE_LIMIT_REQUESTS_PER_SECOND", 10)?,
            burst: vars.parse_or("RATE_LIMIT_BURST", 50)?,
        };

        Ok(Self {
            server,
            database,
            jwt: JwtConfig {
                secret,
                expiration_hours,
            },
            cors,
            storage,
            rate_limit,
        })
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }

    fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    fn parse_or<T: FromStr>(&self, key: &'static str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw)),
            None => Ok(default),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("Failed to read configuration: {0}")]
    Source(String),
}
