use crate::domain::device::DeviceKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Static per-device-type defaults consulted when the client prefills a new
/// inventory row. Never consulted by the computation core.
#[derive(Debug, Deserialize, Clone)]
pub struct PresetsConfig {
    #[serde(default)]
    pub presets: Vec<DevicePreset>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DevicePreset {
    /// Device-type tag, e.g. "router", "switch", "cable".
    pub tag: String,
    pub kind: DeviceKind,
    pub description: String,
    /// Default power draw in watts; 0 for cable presets.
    #[serde(default)]
    pub watts: f64,
    /// Embodied kg CO2 per unit; only meaningful for cable presets.
    #[serde(default)]
    pub embodied_kg: f64,
}

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("unknown device type: {0}")]
    UnknownDeviceType(String),
}

#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<DevicePreset>,
}

impl PresetCatalog {
    pub fn new(config: PresetsConfig) -> Self {
        Self {
            presets: config.presets,
        }
    }

    pub fn all(&self) -> &[DevicePreset] {
        &self.presets
    }

    pub fn preset_for(&self, tag: &str) -> Result<&DevicePreset, PresetError> {
        self.presets
            .iter()
            .find(|p| p.tag == tag)
            .ok_or_else(|| PresetError::UnknownDeviceType(tag.to_string()))
    }
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_presets_config() -> anyhow::Result<PresetsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/presets"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
