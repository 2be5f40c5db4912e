use std::net::SocketAddr;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::roster::{
        RosterLimits, DEFAULT_PRESELECTED_LIMIT, DEFAULT_STARTER_LIMIT, DEFAULT_SUBSTITUTE_LIMIT,
    },
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONT_URL: &str = "http://localhost:3000";

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Origins allowed by CORS.
    pub front_urls: Vec<String>,

    pub roster_limits: RosterLimits,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and every value parsed
    /// - `Err(AppError::ConfigErr)` - Missing required variable or unparsable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let front_urls = lookup("FRONT_URL")
            .unwrap_or_else(|| DEFAULT_FRONT_URL.to_string())
            .split(',')
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            front_urls,
            roster_limits: RosterLimits {
                starter: parse_or(&lookup, "STARTER_LIMIT", DEFAULT_STARTER_LIMIT)?,
                substitute: parse_or(&lookup, "SUBSTITUTE_LIMIT", DEFAULT_SUBSTITUTE_LIMIT)?,
                preselected: parse_or(&lookup, "PRESELECTED_LIMIT", DEFAULT_PRESELECTED_LIMIT)?,
            },
        })
    }

    /// Address the HTTP listener binds to.
    pub fn listen_addr(&self) -> Result<SocketAddr, AppError> {
        let raw = format!("{}:{}", self.host, self.port);

        raw.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidEnvVar {
                name: "HOST".to_string(),
                value: self.host.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
                reason: e.to_string(),
            }),
    }
}
