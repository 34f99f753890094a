use ::config::builder::DefaultState;
use ::config::{Config as LayeredConfig, ConfigBuilder, Environment, File};
use anyhow::{Context, Result};
use dirs::home_dir;
use minezero_core::environmental::{MineType, OffsetMode, CARBON_MARKET_RATE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment variables that override the config file
pub const ENV_PREFIX: &str = "MINEZERO";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Output format (json, table, text)
    pub output_format: OutputFormat,

    /// Price used to value credits (currency per tonne CO₂)
    pub credit_price: f64,

    /// Offset mode used when a command does not name one
    pub offset_mode: OffsetMode,

    /// Mine type used for benchmark comparison when not given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mine_type: Option<MineType>,

    /// Enable debug logging
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Table,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "text" => Ok(OutputFormat::Text),
            other => anyhow::bail!("Invalid output format: {other}. Must be: json, table, or text"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            credit_price: CARBON_MARKET_RATE,
            offset_mode: OffsetMode::Combined,
            mine_type: None,
            debug: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("No configuration file found, writing defaults to {:?}", config_path);
            Config::default().save_to(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Layer defaults, the file at `path` (if present) and `MINEZERO_*` variables
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = Self::file_layers(path)?
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read config file")?
            .try_deserialize()
            .context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with the file at `path` only.
    ///
    /// Environment overrides are not applied and values are not validated,
    /// so commands that rewrite the file can repair it without persisting
    /// a temporary `MINEZERO_*` override.
    pub fn load_file(path: &Path) -> Result<Self> {
        Self::file_layers(path)?
            .build()
            .context("Failed to read config file")?
            .try_deserialize()
            .context("Failed to parse config file")
    }

    fn file_layers(path: &Path) -> Result<ConfigBuilder<DefaultState>> {
        let mut builder = LayeredConfig::builder().add_source(
            LayeredConfig::try_from(&Config::default()).context("Failed to encode defaults")?,
        );

        if path.exists() {
            debug!("Loading configuration from {:?}", path);
            builder = builder.add_source(File::from(path.to_path_buf()));
        }

        Ok(builder)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.credit_price.is_finite() || self.credit_price < 0.0 {
            anyhow::bail!(
                "credit_price must be a non-negative number, got {}",
                self.credit_price
            );
        }
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = home_dir().context("Failed to get home directory")?;
        Ok(home.join(".minezero").join("cli").join("config.toml"))
    }
}
