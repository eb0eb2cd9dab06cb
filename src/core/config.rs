use crate::core::detector::PlatformDetector;
use crate::core::hardware_info::DEFAULT_HARDWARE_INFO_PATH;
use crate::error::{PlatformError, Result};
use crate::platform::board_name::BoardNameRegistry;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the hardware-info source path
pub const HARDWARE_INFO_ENV: &str = "SBC_PLATFORM_CPUINFO";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Hardware-info source; `/proc/cpuinfo` when unset
    #[serde(default)]
    pub hardware_info_path: Option<PathBuf>,
    /// Explicit path to the `mraa-gpio` tool instead of a `PATH` lookup
    #[serde(default)]
    pub mraa_gpio_path: Option<PathBuf>,
    /// Board-name capabilities that are never queried
    #[serde(default)]
    pub disabled_capabilities: Vec<String>,
}

impl DetectorConfig {
    /// Load the user config, or defaults when there is none.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env();
        Ok(config)
    }

    /// Load from `path`. A missing or empty file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&data).map_err(|e| {
            PlatformError::config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Override fields from the environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(std::env::var_os(HARDWARE_INFO_ENV));
    }

    /// Apply a value of the hardware-info override; empty values are ignored.
    pub fn apply_env_from(&mut self, hardware_info_path: Option<OsString>) {
        if let Some(path) = hardware_info_path.filter(|v| !v.is_empty()) {
            log::debug!("Using hardware info path from {}", HARDWARE_INFO_ENV);
            self.hardware_info_path = Some(PathBuf::from(path));
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlatformError::config("Could not determine config directory"))?;

        Ok(config_dir.join("sbc-platform").join("config.json"))
    }

    /// Effective hardware-info source path
    pub fn hardware_info_path(&self) -> PathBuf {
        self.hardware_info_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HARDWARE_INFO_PATH))
    }

    pub fn set_hardware_info_path(&mut self, path: PathBuf) {
        self.hardware_info_path = Some(path);
    }

    pub fn is_capability_enabled(&self, name: &str) -> bool {
        !self.disabled_capabilities.iter().any(|c| c == name)
    }

    /// Board-name registry with disabled capabilities removed
    pub fn board_name_registry(&self) -> BoardNameRegistry {
        let mut registry = BoardNameRegistry::with_defaults(self.mraa_gpio_path.clone());
        for name in &self.disabled_capabilities {
            registry.remove(name);
        }
        registry
    }

    /// Detector for the host configured by this config
    pub fn build_detector(&self) -> PlatformDetector {
        PlatformDetector::new()
            .with_hardware_info_path(self.hardware_info_path())
            .with_board_names(self.board_name_registry())
    }
}
