// --- File: crates/enrollify_config/src/lib.rs ---

pub mod models;

pub use models::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig, StripeConfig};

use config::{Config, ConfigError, Environment, File};
use dotenv::dotenv;

/// Loads the application configuration.
///
/// Sources, in order of precedence (later overrides earlier):
/// 1. built-in defaults,
/// 2. an optional `config/default.{toml,yaml,json}` file,
/// 3. `APP_`-prefixed environment variables with `__` as section
///    separator (e.g. `APP_SERVER__PORT=8080`).
///
/// Secrets (`ACCESS_TOKEN_SECRET`, `STRIPE_SECRET_KEY`) are read directly
/// from the environment by the crates that need them and never appear in
/// the config file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    // Load .env before reading the environment source.
    dotenv().ok();

    let builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("database.uri", "mongodb://localhost:27017")?
        .set_default("database.database", "enrollify")?
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix("APP").separator("__"));

    builder.build()?.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn config_from_toml(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn minimal_config_applies_defaults() {
        let config = config_from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 5000

            [database]
            uri = "mongodb://localhost:27017"
            database = "enrollify"
            "#,
        );

        assert_eq!(config.auth.token_ttl_seconds, 86_400);
        assert!(config.stripe.is_none());
    }

    #[test]
    fn stripe_section_is_optional_with_optional_currency() {
        let config = config_from_toml(
            r#"
            [server]
            host = "0.0.0.0"
            port = 5000

            [database]
            uri = "mongodb://localhost:27017"
            database = "enrollify"

            [stripe]
            "#,
        );

        let stripe = config.stripe.expect("stripe section present");
        assert!(stripe.currency.is_none());
    }
}
