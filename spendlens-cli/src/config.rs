use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spendlens_ingest::IngestOptions;
use std::fs;
use std::path::PathBuf;

use crate::report::Format;
use crate::state::{ensure_spendlens_home, spendlens_home};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ingest: IngestSection,
    pub report: ReportSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestSection {
    /// Bytes read from the top of a file to detect its delimiter
    pub sample_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub format: Format,
    pub top_categories: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Filter used when RUST_LOG is unset
    pub level: String,
}

impl Default for IngestSection {
    fn default() -> Self {
        Self {
            sample_bytes: spendlens_ingest::loader::DEFAULT_SAMPLE_BYTES,
        }
    }
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            format: Format::Text,
            top_categories: spendlens_finance::TOP_CATEGORIES,
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            sample_bytes: self.ingest.sample_bytes,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(spendlens_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_spendlens_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let p = save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
