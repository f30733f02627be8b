use serde::{Deserialize, Serialize};
use crate::models::MAX_COORDINATE;
use crate::storage::HISTORY_SLOT;
use crate::verbosity::MAX_VERBOSITY;
use crate::v_info;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasConfig {
    pub storage: StorageConfig,
    pub coordinates: CoordinateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File holding the persisted storage slots
    pub path: String,
    /// Slot name the visitation record is stored under
    pub slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinateConfig {
    /// Largest value any coordinate axis may take
    pub max_coordinate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default verbosity (0=quiet, 1=basic, 2=full)
    pub verbosity: u8,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: "storage/atlas_storage.json".to_string(),
                slot: HISTORY_SLOT.to_string(),
            },
            coordinates: CoordinateConfig {
                max_coordinate: MAX_COORDINATE,
            },
            output: OutputConfig {
                verbosity: 0,
            },
        }
    }
}

impl AtlasConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            v_info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: AtlasConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            v_info!("📋 Creating default configuration at {}", config_path);
            let config = AtlasConfig::default();
            config.save(config_path)?;
            v_info!("💡 Edit {} to customize storage location", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.path.trim().is_empty() {
            return Err("storage.path must not be empty".to_string());
        }
        if self.storage.slot.is_empty() {
            return Err("storage.slot must not be empty".to_string());
        }

        if self.coordinates.max_coordinate == 0 {
            return Err("max_coordinate must be greater than 0".to_string());
        }

        if self.output.verbosity > MAX_VERBOSITY {
            return Err(format!("verbosity must be between 0 and {}", MAX_VERBOSITY));
        }

        v_info!("✅ Configuration validation passed");
        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        v_info!("📋 Configuration Summary:");
        v_info!("   💾 Storage file: {}", self.storage.path);
        v_info!("   🗂️  History slot: {}", self.storage.slot);
        v_info!("   🌌 Max coordinate: {}", self.coordinates.max_coordinate);
    }
}
