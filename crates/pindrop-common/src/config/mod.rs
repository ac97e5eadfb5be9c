//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RedisConfig, ServerConfig, MIN_JWT_SECRET_LEN,
};
