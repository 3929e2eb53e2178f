use std::{env, path::PathBuf, time::Duration};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    /// History base the pages are mounted under, e.g. `/` or `/dispatch/`.
    pub base_url: String,
    pub assets_dir: PathBuf,
    pub view_load_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "0.0.0.0:3000".to_string(),
            base_url: "/".to_string(),
            assets_dir: PathBuf::from("assets"),
            view_load_timeout: Duration::from_secs(15),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(bind_addr) = lookup("BIND_ADDR") {
            config.bind_addr = bind_addr;
        }

        if let Some(base_url) = lookup("BASE_URL") {
            // The base is mounted as a static route prefix.
            if !base_url.starts_with('/') || base_url.contains([':', '*', '?', '#']) {
                return Err(ConfigError::Invalid {
                    name: "BASE_URL",
                    value: base_url,
                });
            }
            config.base_url = base_url;
        }

        if let Some(assets_dir) = lookup("ASSETS_DIR") {
            config.assets_dir = PathBuf::from(assets_dir);
        }

        if let Some(timeout) = lookup("VIEW_LOAD_TIMEOUT_SECS") {
            let secs = timeout
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    name: "VIEW_LOAD_TIMEOUT_SECS",
                    value: timeout,
                })?;
            config.view_load_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
