use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::keyword::KeywordPolicy;

pub const DEFAULT_ENCYCLOPEDIA_BASE: &str = "https://zh.wikipedia.org/wiki/";
pub const DEFAULT_AGGREGATOR_BASE: &str = "https://crt.sh/";
pub const DEFAULT_OUTPUT_FILE: &str = "Target-organization-certificate-name-list.txt";
pub const DEFAULT_LOG_FILE: &str = "ct_harvest.log";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub encyclopedia_base: String,
    pub aggregator_base: String,
    pub output_file: PathBuf,
    pub log_file: PathBuf,
    pub timeout_secs: u64,
    pub policy: KeywordPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encyclopedia_base: DEFAULT_ENCYCLOPEDIA_BASE.to_string(),
            aggregator_base: DEFAULT_AGGREGATOR_BASE.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            timeout_secs: 30,
            policy: KeywordPolicy::Interactive,
        }
    }
}

impl Config {
    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let cfg: Config = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_secs == 0 {
            bail!("timeout must be at least one second");
        }
        if self.output_file.as_os_str().is_empty() {
            bail!("output file path is empty");
        }
        for (name, base) in [
            ("encyclopedia base", &self.encyclopedia_base),
            ("aggregator base", &self.aggregator_base),
        ] {
            url::Url::parse(base).with_context(|| format!("invalid {} URL: {}", name, base))?;
        }
        Ok(())
    }
}
