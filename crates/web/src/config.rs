use anyhow::{Context, Result};

use crate::auth::jwt::JwtConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
/// Eight days, matching the session length issued by the login service.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60 * 24 * 8;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt: JwtConfig,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(port) => port.parse().context("PORT must be a number")?,
            Err(_) => DEFAULT_PORT,
        };

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(mins) => mins
                .parse()
                .context("JWT_ACCESS_EXPIRY_MINS must be a number")?,
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        let secret = std::env::var("JWT_SECRET").context("Cannot load JWT_SECRET env variable")?;
        anyhow::ensure!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            jwt: JwtConfig {
                secret,
                access_token_expiry_mins,
            },
            cors_origins: parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_default()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
