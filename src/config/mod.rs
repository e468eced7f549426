use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Runtime settings. Every field has a default matching the service's
/// hardwired constants, so the process runs with no configuration at all.
/// Overridable via an optional `configuration` file or `APP__`-prefixed
/// environment variables (e.g. `APP__PORT`, `APP__MONGODB__URI`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for MongoConfig {
    fn default() -> Self {
        MongoConfig {
            uri: default_uri(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hardwired_constants() {
        let mongodb = MongoConfig::default();
        assert_eq!(mongodb.uri, "mongodb://localhost:27017");
        assert_eq!(mongodb.connect_timeout_secs, 10);
        assert_eq!(default_port(), 8080);
    }
}
