//! Configuration loader with layered sources.

use crate::{AppConfig, CacheBackend};
use catalog_core::CatalogError;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "CATALOG";

/// Environment variable naming the active environment profile.
pub const ENV_PROFILE_VAR: &str = "CATALOG_ENV";

/// Configuration loader holding the resolved configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `CATALOG_` prefix and `__` nesting,
    ///    e.g. `CATALOG_DATABASE__URL`
    pub fn new(config_dir: impl AsRef<str>) -> Result<Self, CatalogError> {
        let config = Self::load_config(config_dir.as_ref())?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, CatalogError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, CatalogError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENV_PROFILE_VAR).unwrap_or_else(|_| "development".to_string());

        Self::load_for_environment(config_dir, &environment)
    }

    /// Loads configuration for an explicit environment profile.
    pub fn load_for_environment(
        config_dir: &str,
        environment: &str,
    ) -> Result<AppConfig, CatalogError> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment, "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_catalog_error)?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_catalog_error)?;

        if app_config.app.environment != environment {
            debug!(
                "Profile {} overrides app.environment {}",
                environment, app_config.app.environment
            );
            app_config.app.environment = environment.to_string();
        }

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Validates the configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), CatalogError> {
    if config.database.url.trim().is_empty() {
        return Err(CatalogError::Configuration("Database URL is required".to_string()));
    }

    if config.database.max_connections == 0 {
        return Err(CatalogError::Configuration(
            "database.max_connections must be greater than zero".to_string(),
        ));
    }

    if config.cache.ttl_secs == 0 {
        return Err(CatalogError::Configuration(
            "cache.ttl_secs must be greater than zero".to_string(),
        ));
    }

    match config.cache.effective_backend(&config.redis) {
        CacheBackend::Memory if config.cache.memory_capacity == 0 => {
            return Err(CatalogError::Configuration(
                "cache.memory_capacity must be greater than zero".to_string(),
            ));
        }
        CacheBackend::None if config.cache.backend == CacheBackend::Redis => {
            warn!("Redis cache selected but redis.enabled is false; caching is off");
        }
        _ => {}
    }

    Ok(())
}

fn config_error_to_catalog_error(err: ConfigError) -> CatalogError {
    CatalogError::Configuration(err.to_string())
}
