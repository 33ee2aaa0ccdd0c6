use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SPARK_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("SPARK_PORT")
            .unwrap_or_else(|| "8000".into())
            .parse()
            .context("SPARK_PORT must be a port number")?;
        let db_path = lookup("SPARK_DB_PATH")
            .unwrap_or_else(|| "spark.db".into())
            .into();

        Ok(Self {
            host,
            port,
            db_path,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
