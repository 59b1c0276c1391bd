use std::fs;

use anyhow::{Context, Result};

use crate::model::AppConfig;

use super::{LocalStore, write_atomic};

impl LocalStore {
    /// Missing file means defaults.
    pub fn read_config(&self) -> Result<AppConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: AppConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &AppConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.config_path(), &bytes).context("write config.json")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/store/config_file_tests.rs"]
mod tests;
