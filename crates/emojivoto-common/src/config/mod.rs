//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AssetConfig, BackendConfig, BackendMode, ConfigError, CorsConfig,
    Environment, OperationPolicy, RateLimitConfig, ServerConfig, VotingConfig,
};
