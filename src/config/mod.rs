//! Configuration management
//!
//! Natively the backend URL is layered from defaults, an optional
//! `storefront.{toml,json,yaml}` file and `STOREFRONT_*` environment
//! variables. Browser builds have no environment, so they use the URL
//! `build.rs` baked in.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Backend URL compiled into this build
pub const BUILD_API_URL: &str = env!("STOREFRONT_API_URL");

pub const DEFAULT_LOG_FILTER: &str = "storefront=debug";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Base URL every backend path is joined onto
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// `tracing` filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_api_url() -> String {
    BUILD_API_URL.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Reject anything that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api_url)
            .with_context(|| format!("api_url is not a valid URL: {}", self.api_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api_url must be http or https, got {}", url.scheme());
        }
        Ok(())
    }
}

/// Directory searched for `storefront.*` (STOREFRONT_CONFIG_DIR or cwd)
#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub fn get_config_dir() -> std::path::PathBuf {
    std::env::var("STOREFRONT_CONFIG_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        .set_default("api_url", BUILD_API_URL)?
        .set_default("log_filter", DEFAULT_LOG_FILTER)?
        .add_source(
            ::config::File::with_name(&config_dir.join("storefront").to_string_lossy())
                .required(false),
        )
        // STOREFRONT_API_URL, STOREFRONT_LOG_FILTER
        .add_source(::config::Environment::with_prefix("STOREFRONT").try_parsing(true))
        .build()?;

    let config: Config = config.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

/// Browser builds: the compiled-in URL.
#[cfg(any(target_arch = "wasm32", not(feature = "server")))]
pub fn load_config() -> Result<Config> {
    let config = Config::default();
    config.validate()?;
    Ok(config)
}
