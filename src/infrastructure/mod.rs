// Infrastructure layer - Configuration and presets
pub mod config;
