//! Configuration for `modntt run`
//!
//! Settings come from an optional TOML or JSON file and are overridden by
//! whatever was given on the command line.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the run report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable polynomials
    #[default]
    Text,
    /// One JSON document
    Json,
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => bail!("cannot detect config format of {}", path.display()),
        }
    }
}

/// Partially specified settings, from a file or from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    /// Transform length N
    pub length: Option<usize>,
    /// Prime modulus P
    pub modulus: Option<u64>,
    /// Root of unity to use instead of deriving one
    pub root: Option<u64>,
    /// Seed for the random test vectors
    pub seed: Option<u64>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: Option<String>,
    /// Report format
    pub format: Option<OutputFormat>,
}

impl PartialConfig {
    /// Load settings from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content, format)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse settings from a string in the given format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Toml => toml::from_str(content).context("failed to parse TOML")?,
            ConfigFormat::Json => serde_json::from_str(content).context("failed to parse JSON")?,
        };
        Ok(config)
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            length: overrides.length.or(self.length),
            modulus: overrides.modulus.or(self.modulus),
            root: overrides.root.or(self.root),
            seed: overrides.seed.or(self.seed),
            log_level: overrides.log_level.or(self.log_level),
            format: overrides.format.or(self.format),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    /// Transform length N
    pub length: usize,
    /// Prime modulus P
    pub modulus: u64,
    /// Root of unity to use instead of deriving one
    pub root: Option<u64>,
    /// Seed for the random test vectors
    pub seed: Option<u64>,
    /// Default tracing filter
    pub log_level: Option<String>,
    /// Report format
    pub format: OutputFormat,
}

impl RunConfig {
    /// Check that the settings describe a usable run
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            bail!("transform length N must be positive");
        }
        if self.modulus < 2 {
            bail!("modulus P must be at least 2, got {}", self.modulus);
        }
        Ok(())
    }
}

impl TryFrom<PartialConfig> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(partial: PartialConfig) -> Result<Self> {
        let (Some(length), Some(modulus)) = (partial.length, partial.modulus) else {
            bail!(
                "insufficient arguments: usage is `modntt run <N> <P>` \
                 (or set length and modulus in a config file)"
            );
        };
        let config = Self {
            length,
            modulus,
            root: partial.root,
            seed: partial.seed,
            log_level: partial.log_level,
            format: partial.format.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
