//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

/// Deployment environment, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Test,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "test" => AppEnv::Test,
            "production" | "prod" => AppEnv::Production,
            _ => AppEnv::Development,
        }
    }

    /// Variable holding the database URL for this environment.
    pub fn database_url_var(self) -> &'static str {
        match self {
            AppEnv::Test => "TEST_DATABASE_URL",
            AppEnv::Development | AppEnv::Production => "DATABASE_URL",
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub env: AppEnv,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let database = lookup(env.database_url_var()).map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: lookup("DB_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: lookup("DB_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.min_connections),
                ..defaults
            }
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            env,
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.env, AppEnv::Development);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_test_env_uses_test_database() {
        let config = config_from(&[
            ("APP_ENV", "test"),
            ("DATABASE_URL", "postgres://prod/blog"),
            ("TEST_DATABASE_URL", "postgres://localhost/test-blog"),
        ]);
        let db = config.database.expect("database configured");
        assert_eq!(db.url, "postgres://localhost/test-blog");
    }

    #[test]
    fn test_pool_settings_and_bad_port() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/blog"),
            ("DB_MAX_CONNECTIONS", "25"),
            ("PORT", "not-a-port"),
        ]);
        let db = config.database.expect("database configured");
        assert_eq!(db.max_connections, 25);
        assert_eq!(db.min_connections, 1);
        assert_eq!(config.port, 8080);
    }
}
