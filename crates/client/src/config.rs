use serde::Deserialize;

use crate::Result;

const DEFAULT_CONFIG_PATH: &str = "config/gruzzolo.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub username: String,
    /// Transport timeout; the only timeout in the client stack.
    pub request_timeout_secs: u64,
    /// Reference currency for cross-currency comparisons.
    pub reference_currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            username: String::new(),
            request_timeout_secs: 30,
            reference_currency: engine::REFERENCE_CURRENCY.to_string(),
        }
    }
}

/// Loads configuration from a TOML file (optional) overlaid with
/// `GRUZZOLO_`-prefixed environment variables.
pub fn load(path: Option<&str>) -> Result<AppConfig> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    let settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(config::Environment::with_prefix("GRUZZOLO"))
        .build()?
        .try_deserialize()?;
    Ok(settings)
}
