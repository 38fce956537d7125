// --- File: crates/enrollify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
// Holds the MongoDB connection settings. Loaded via APP_DATABASE__URI /
// APP_DATABASE__DATABASE or from the config file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
}

// --- Auth Config ---
// Holds non-secret token settings. The signing secret is loaded directly
// from the ACCESS_TOKEN_SECRET env var, never from a config file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    /// Lifetime of issued tokens in seconds. Expiry is the only
    /// invalidation mechanism; there is no revocation list.
    pub token_ttl_seconds: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        // 1 day
        Self {
            token_ttl_seconds: 86_400,
        }
    }
}

// --- Stripe Config ---
// Holds non-secret Stripe config. Secret key loaded directly from env var:
// STRIPE_SECRET_KEY
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StripeConfig {
    pub currency: Option<String>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server and database config are mandatory
    pub server: ServerConfig,
    pub database: DatabaseConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub stripe: Option<StripeConfig>,
}
