use crate::constants;
use anyhow::{Context, Result};
use std::env;

/// Database connection settings, consumed by the database client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

/// HTTP server settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

/// Process-wide configuration, built once at startup and passed to
/// every collaborator that needs it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub api_base_url: String,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Required variables (`DB_HOST`, `DB_USER`, `DB_PASSWORD`,
    /// `DB_NAME`) produce an error naming the variable when absent;
    /// `DB_PORT` and `PORT` fall back to their documented defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = require(&lookup, "DB_HOST")?;
        let user = require(&lookup, "DB_USER")?;
        let password = require(&lookup, "DB_PASSWORD")?;
        let database = require(&lookup, "DB_NAME")?;
        let db_port = port_or_default(&lookup, "DB_PORT", constants::DEFAULT_DATABASE_PORT)?;
        let server_port = port_or_default(&lookup, "PORT", constants::DEFAULT_SERVER_PORT)?;
        let api_base_url =
            lookup("API_BASE_URL").unwrap_or_else(|| constants::DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            database: DatabaseConfig {
                host,
                user,
                password,
                database,
                port: db_port,
            },
            server: ServerConfig { port: server_port },
            api_base_url,
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name).with_context(|| format!("Missing environment variable: {name}"))
}

fn port_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u16,
) -> Result<u16> {
    match lookup(name) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid port in environment variable {name}: '{value}'")),
        None => Ok(default),
    }
}
