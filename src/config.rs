mod database_config;
mod raw_config;

use url::Url;

pub use self::{database_config::DatabaseConfig, raw_config::RawConfig};

/// Main server config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Version of the Flowsched binary.
    pub version: String,
    /// HTTP port to bind API server to.
    pub http_port: u16,
    /// External/public URL through which service is being accessed.
    pub public_url: Url,
    /// Database configuration.
    pub db: DatabaseConfig,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            http_port: raw_config.port,
            public_url: raw_config.public_url,
            db: raw_config.db,
        }
    }
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, RawConfig};

    #[test]
    fn conversion_from_raw_config() {
        let raw_config = RawConfig::default();
        let config = Config::from(raw_config.clone());

        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.http_port, raw_config.port);
        assert_eq!(config.public_url, raw_config.public_url);
        assert_eq!(config.db.name, raw_config.db.name);
    }
}
