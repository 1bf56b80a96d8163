//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?
        .join("counter-gui");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a JSON config file
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = app_data_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

/// Save a JSON config file
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    let content = serde_json::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

/// Delete a config file
pub fn delete_config(filename: &str) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::settings::UiSettings;

    #[test]
    fn missing_file_yields_default() {
        let settings: UiSettings =
            load_config("does-not-exist.json").expect("load should fall back to default");
        assert_eq!(settings.window.width, 800.0);
        assert_eq!(settings.window.height, 600.0);
    }

    #[test]
    fn save_load_round_trip() {
        let filename = format!("test-settings-{}.json", std::process::id());

        let mut settings = UiSettings::default();
        settings.window.width = 1024.0;
        settings.window.height = 768.0;

        save_config(&filename, &settings).expect("save should succeed");
        let loaded: UiSettings = load_config(&filename).expect("load should succeed");
        assert_eq!(loaded.window.width, 1024.0);
        assert_eq!(loaded.window.height, 768.0);

        delete_config(&filename).expect("cleanup should succeed");
    }
}
