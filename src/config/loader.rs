use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

use crate::config::settings::ParleyConfig;
use crate::error::{ParleyError, Result};

/// Get XDG-compliant config directory
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "parley")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ParleyError::Config("Could not determine config directory".to_string()))
}

/// Get config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from file, creating default if not exists
pub fn load_config() -> Result<ParleyConfig> {
    let path = config_path()?;

    if !path.exists() {
        let config = ParleyConfig::default();
        save_config(&config)?;
        return Ok(config);
    }

    let content = fs::read_to_string(&path)?;
    let config: ParleyConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save config to file
pub fn save_config(config: &ParleyConfig) -> Result<()> {
    let path = config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = ParleyConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[segmentation]"));
        assert!(toml.contains("[cleaning]"));
        assert!(toml.contains("[export]"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = ParleyConfig::default();
        config.cleaning.extra_fillers.push("frankly".to_string());

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: ParleyConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.cleaning.extra_fillers, vec!["frankly"]);
        assert_eq!(parsed.export.include_labels, config.export.include_labels);
    }

    #[test]
    fn test_config_paths_are_valid() {
        let _ = config_dir();
        let _ = config_path();
    }
}
