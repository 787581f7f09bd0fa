//! Daemon settings
//!
//! Built-in defaults overlaid by `JOBBOARD_*` environment variables.

use config::{Config, ConfigError, Environment};
use jobboard_api_http::HttpServerConfig;
use serde::Deserialize;

const ENV_PREFIX: &str = "JOBBOARD";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    /// Start with the two default postings
    pub seed: bool,
    /// `json` for structured logs, anything else for pretty output
    pub log_format: String,
}

impl Settings {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        let defaults = HttpServerConfig::default();
        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("cors_origin", defaults.cors_origin)?
            .set_default("seed", true)?
            .set_default("log_format", "pretty")?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    pub fn http(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origin: self.cors_origin.clone(),
        }
    }
}
