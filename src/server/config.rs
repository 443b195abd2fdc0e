use secrecy::SecretString;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Largest amount accepted by a single deposit, withdrawal or transfer unless
/// `BANK_MAX_AMOUNT` overrides it.
pub const DEFAULT_MAX_AMOUNT: i64 = 1_000_000_000;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Shared secret presented by the game server as a bearer token.
    pub service_api_key: SecretString,
    pub max_amount: i64,

    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let max_amount = match std::env::var("BANK_MAX_AMOUNT") {
            Ok(value) => parse_max_amount(&value)?,
            Err(_) => DEFAULT_MAX_AMOUNT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            service_api_key: std::env::var("BANK_SERVICE_API_KEY")
                .ok()
                .filter(|key| !key.is_empty())
                .map(SecretString::new)
                .ok_or_else(|| ConfigError::MissingEnvVar("BANK_SERVICE_API_KEY".to_string()))?,
            max_amount,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN").ok(),
        })
    }
}

fn parse_max_amount(value: &str) -> Result<i64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "BANK_MAX_AMOUNT".to_string(),
        reason: reason.to_string(),
    };

    let max_amount = value
        .trim()
        .parse::<i64>()
        .map_err(|e| invalid(&e.to_string()))?;

    if max_amount < 1 {
        return Err(invalid("must be at least 1"));
    }

    Ok(max_amount)
}
