//! Application configuration structs
//!
//! Loads configuration from environment variables and an optional `.env` file.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub web: ServerConfig,
    pub backends: BackendConfig,
    pub voting: VotingConfig,
    pub assets: AssetConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the catalog and voting backends live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    /// Remote services reached over HTTP
    #[default]
    Http,
    /// In-process backends seeded with the default catalog
    Memory,
}

impl FromStr for BackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown backend mode '{other}'")),
        }
    }
}

/// Backend service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub mode: BackendMode,
    /// Base URL of the emoji catalog service (http mode)
    pub emoji_url: Option<String>,
    /// Base URL of the voting service (http mode)
    pub voting_url: Option<String>,
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,
}

impl BackendConfig {
    /// Upper bound for a single backend call
    #[must_use]
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

/// What to do with table entries whose operation the voting client lacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OperationPolicy {
    /// Refuse to start
    #[default]
    Strict,
    /// Log and drop the entry
    Lenient,
}

impl FromStr for OperationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown operation policy '{other}'")),
        }
    }
}

/// Vote dispatch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VotingConfig {
    #[serde(default = "default_shortcode_table_path")]
    pub shortcode_table_path: PathBuf,
    #[serde(default)]
    pub unsupported_operation: OperationPolicy,
}

/// Static asset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "default_index_bundle")]
    pub index_bundle: PathBuf,
    #[serde(default = "default_favicon")]
    pub favicon: PathBuf,
    /// When set, the page shell loads the bundle from this dev server
    pub webpack_dev_server: Option<String>,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "emojivoto-web".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_call_timeout_ms() -> u64 {
    5000
}

fn default_shortcode_table_path() -> PathBuf {
    PathBuf::from("config/shortcode.json")
}

fn default_index_bundle() -> PathBuf {
    PathBuf::from("dist/index_bundle.js")
}

fn default_favicon() -> PathBuf {
    PathBuf::from("assets/favicon.ico")
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Parse an optional variable, rejecting values that are present but malformed
fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            s.trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidValue(key, e.to_string()))
        })
        .transpose()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if required keys are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backends = BackendConfig {
            mode: parse_var(&lookup, "BACKEND_MODE")?.unwrap_or_default(),
            emoji_url: lookup("EMOJISVC_HOST").filter(|s| !s.is_empty()),
            voting_url: lookup("VOTINGSVC_HOST").filter(|s| !s.is_empty()),
            call_timeout_ms: parse_var(&lookup, "BACKEND_CALL_TIMEOUT_MS")?
                .unwrap_or_else(default_call_timeout_ms),
        };

        if backends.mode == BackendMode::Http {
            if backends.emoji_url.is_none() {
                return Err(ConfigError::MissingVar("EMOJISVC_HOST"));
            }
            if backends.voting_url.is_none() {
                return Err(ConfigError::MissingVar("VOTINGSVC_HOST"));
            }
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: parse_var(&lookup, "APP_ENV")?.unwrap_or_default(),
            },
            web: ServerConfig {
                host: lookup("WEB_HOST").unwrap_or_else(default_host),
                port: parse_var(&lookup, "WEB_PORT")?.ok_or(ConfigError::MissingVar("WEB_PORT"))?,
            },
            backends,
            voting: VotingConfig {
                shortcode_table_path: lookup("SHORTCODE_TABLE_PATH")
                    .map_or_else(default_shortcode_table_path, PathBuf::from),
                unsupported_operation: parse_var(&lookup, "UNSUPPORTED_OPERATION_POLICY")?
                    .unwrap_or_default(),
            },
            assets: AssetConfig {
                index_bundle: lookup("INDEX_BUNDLE").map_or_else(default_index_bundle, PathBuf::from),
                favicon: lookup("FAVICON_PATH").map_or_else(default_favicon, PathBuf::from),
                webpack_dev_server: lookup("WEBPACK_DEV_SERVER").filter(|s| !s.is_empty()),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(&lookup, "RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var(&lookup, "RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
