//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::catalog::ALL_CATEGORIES;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the product catalog JSON file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Natural-language search endpoint
    #[serde(default = "default_nlp_endpoint")]
    pub nlp_endpoint: String,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Request timeout for the search endpoint in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Symbol printed before prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Maximum description length before truncation
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,

    /// Filter: category, or "All"
    #[serde(default = "default_category")]
    pub category: String,

    /// Filter: maximum price as entered (blank for unbounded)
    #[serde(default)]
    pub max_price: String,

    /// Filter: whitespace-separated keywords
    #[serde(default)]
    pub filter_term: String,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("product_details.json")
}

fn default_nlp_endpoint() -> String {
    "http://localhost:5000/search".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_description_limit() -> usize {
    200
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            nlp_endpoint: default_nlp_endpoint(),
            proxy: None,
            timeout_secs: default_timeout_secs(),
            format: OutputFormat::Table,
            currency_symbol: default_currency_symbol(),
            description_limit: default_description_limit(),
            category: default_category(),
            max_price: String::new(),
            filter_term: String::new(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("catalog.toml");
        if local_config.exists() {
            debug!("Found catalog.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("catalog-search").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(path) = std::env::var("CATALOG_PATH") {
            if !path.trim().is_empty() {
                self.catalog_path = PathBuf::from(path);
            }
        }

        if let Ok(endpoint) = std::env::var("CATALOG_NLP_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.nlp_endpoint = endpoint;
            }
        }

        if let Ok(proxy) = std::env::var("CATALOG_PROXY") {
            if !proxy.trim().is_empty() {
                self.proxy = Some(proxy);
            }
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
