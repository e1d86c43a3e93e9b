use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct VehicleConfig {
    #[serde(default = "default_id")]
    pub id: i64,
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            id: default_id(),
            name: default_name(),
        }
    }
}

impl VehicleConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: VehicleConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

fn default_id() -> i64 {
    1
}

fn default_name() -> String {
    "Xiaomi".to_string()
}
