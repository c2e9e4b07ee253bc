use std::fmt;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 8;
const DEFAULT_APP_NAME: &str = "Talks";

/// Which talk store backend to run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String, max_connections: u32 },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub app_name: String,
    pub store: StoreBackend,
    pub timezones_file: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{key} must be set"),
            ConfigError::Invalid { key, value } => write!(f, "{key} has invalid value '{value}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Read configuration from the process environment, after loading `.env`
    /// if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            log::info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let app_name = get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let timezones_file = get("TIMEZONES_FILE").filter(|v| !v.is_empty()).map(PathBuf::from);

        let store = match get("TALK_STORE").as_deref().unwrap_or("postgres") {
            "memory" => StoreBackend::Memory,
            "postgres" => {
                let database_url = get("DATABASE_URL")
                    .filter(|v| !v.is_empty())
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?;
                let max_connections = match get("DB_MAX_CONNECTIONS") {
                    Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                        key: "DB_MAX_CONNECTIONS",
                        value: v.clone(),
                    })?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                StoreBackend::Postgres { database_url, max_connections }
            }
            other => {
                return Err(ConfigError::Invalid {
                    key: "TALK_STORE",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self { bind_addr, app_name, store, timezones_file })
    }
}
