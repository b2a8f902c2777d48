//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    "real_world_events=debug,tower_http=debug".to_string()
}

pub fn load_config() -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        .set_default("log_filter", default_log_filter())?
        // Load from config file in the working directory if it exists
        .add_source(::config::File::with_name("config").required(false))
        // Override with environment variables (RWE_PORT, RWE_LOG_FILTER)
        .add_source(
            ::config::Environment::with_prefix("RWE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
