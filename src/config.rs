use clap::Parser;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_REVYOOS_WIDGET_CODE: &str = "eyJwIjoiNjVlMGZiNTg5MjBlYWEwMDYxMjdlNWVjIn0=";
pub const DEFAULT_HOSPITABLE_API_URL: &str = "https://public.api.hospitable.com/v2";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Every setting can come from a flag or its environment variable.
/// Flags win over the environment, which wins over the defaults.
#[derive(Debug, Parser)]
#[command(name = "stay-directly", about = "Direct-booking vacation rental site")]
pub struct Cli {
    #[arg(long, env = "HTTP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, short, env = "HTTP_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path of the SQLite database file.
    #[arg(long, env = "DATABASE_PATH", default_value = "stay_directly.sqlite3")]
    pub database: String,

    #[arg(long, env = "MAX_WORKERS", default_value_t = 8)]
    pub workers: usize,

    #[arg(long, env = "HOSPITABLE_API_URL", default_value = DEFAULT_HOSPITABLE_API_URL)]
    pub hospitable_api_url: String,

    #[arg(long, env = "HOSPITABLE_API_TOKEN", hide_env_values = true)]
    pub hospitable_api_token: Option<String>,

    #[arg(long, env = "REVYOOS_WIDGET_CODE", default_value = DEFAULT_REVYOOS_WIDGET_CODE)]
    pub revyoos_widget_code: String,

    #[arg(long, env = "HOSPITABLE_SEARCH_IDENTIFIER")]
    pub hospitable_search_identifier: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Configuration {
    http_host: String,
    http_port: u16,
    database_path: String,
    max_workers: usize,
    hospitable_api_url: String,
    hospitable_api_token: Option<String>,
    revyoos_widget_code: String,
    hospitable_search_identifier: Option<String>,
}

impl Configuration {
    pub fn load(cli: Cli) -> Result<Self, ConfigError> {
        if cli.workers == 0 {
            return Err(ConfigError::Invalid {
                name: "MAX_WORKERS",
                expected: "a positive integer",
                value: cli.workers.to_string(),
            });
        }

        let revyoos_widget_code = non_blank(Some(cli.revyoos_widget_code))
            .unwrap_or_else(|| DEFAULT_REVYOOS_WIDGET_CODE.to_string());

        Ok(Self {
            http_host: cli.host,
            http_port: cli.port,
            database_path: cli.database,
            max_workers: cli.workers,
            hospitable_api_url: cli.hospitable_api_url,
            hospitable_api_token: non_blank(cli.hospitable_api_token),
            revyoos_widget_code,
            hospitable_search_identifier: non_blank(cli.hospitable_search_identifier),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.http_host, self.http_port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            name: "HTTP_HOST",
            expected: "an IP address",
            value: self.http_host.clone(),
        })
    }

    pub fn database_path(&self) -> &str {
        &self.database_path
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    pub fn hospitable_api_url(&self) -> &str {
        &self.hospitable_api_url
    }

    pub fn hospitable_api_token(&self) -> Option<&str> {
        self.hospitable_api_token.as_deref()
    }

    pub fn revyoos_widget_code(&self) -> &str {
        &self.revyoos_widget_code
    }

    pub fn hospitable_search_identifier(&self) -> Option<&str> {
        self.hospitable_search_identifier.as_deref()
    }
}

/// An exported-but-empty variable counts as unset.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
