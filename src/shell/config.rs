use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::modules::activities::core::catalog::{Catalog, CatalogError, mergington_catalog, parse_catalog};

pub const HOST_VAR: &str = "ACTIVITIES_HOST";
pub const PORT_VAR: &str = "ACTIVITIES_PORT";
pub const STATIC_DIR_VAR: &str = "ACTIVITIES_STATIC_DIR";
pub const SEED_FILE_VAR: &str = "ACTIVITIES_SEED_FILE";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ACTIVITIES_PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error("'{0}' is not a valid listen address")]
    InvalidAddress(String),

    #[error("cannot read seed file {path}: {source}")]
    SeedFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: lookup(STATIC_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            seed_file: lookup(SEED_FILE_VAR)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }

    /// The seed file when one is configured, the Mergington catalog otherwise.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.seed_file else {
            return Ok(mergington_catalog());
        };
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedFile {
            path: path.clone(),
            source,
        })?;
        Ok(parse_catalog(&json)?)
    }
}
