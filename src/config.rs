use crate::errors::{MostradorError, MostradorResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bot_name: String,
    pub reply_delay_min_ms: u64,
    pub reply_delay_max_ms: u64,
    pub panel_open_on_start: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_name: "Asistente Virtual".to_string(),
            reply_delay_min_ms: 500,
            reply_delay_max_ms: 1000,
            panel_open_on_start: false,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> MostradorResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| MostradorError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| MostradorError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;

        *CONFIG.write().unwrap() = config;
        log::info!("configuration loaded from {}", config_path.display());
    } else {
        // Create default config
        let mut config = Config::default();

        if let Ok(level) = env::var("RUST_LOG") {
            config.log_level = level;
        }

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            MostradorError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| MostradorError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| MostradorError::config_error(format!("Failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
        log::info!("default configuration written to {}", config_path.display());
    }

    Ok(())
}

fn get_config_path() -> MostradorResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| MostradorError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("mostrador").join("config.json"))
}

fn validate_config(config: &Config) -> MostradorResult<()> {
    if config.bot_name.trim().is_empty() {
        return Err(MostradorError::config_error("bot_name is required"));
    }

    if config.reply_delay_min_ms == 0 {
        return Err(MostradorError::config_error(
            "reply_delay_min_ms must be greater than 0",
        ));
    }

    if config.reply_delay_min_ms >= config.reply_delay_max_ms {
        return Err(MostradorError::config_error(
            "reply_delay_min_ms must be less than reply_delay_max_ms",
        ));
    }

    if config.log_level.trim().is_empty() {
        return Err(MostradorError::config_error("log_level is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> MostradorResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    let config_str = serde_json::to_string_pretty(&updated_config)
        .map_err(|e| MostradorError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(&config_path, config_str)
        .map_err(|e| MostradorError::config_error(format!("Failed to write config file: {}", e)))?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_bot_name() {
        let mut config = Config::default();
        config.bot_name = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_zero_min_delay() {
        let mut config = Config::default();
        config.reply_delay_min_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_inverted_delay_window() {
        let mut config = Config::default();
        config.reply_delay_min_ms = 1000;
        config.reply_delay_max_ms = 500;
        assert!(validate_config(&config).is_err());

        config.reply_delay_min_ms = 500;
        config.reply_delay_max_ms = 500;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_update_config_rejects_invalid() {
        let mut config = Config::default();
        config.reply_delay_min_ms = 0;
        // Validation runs before anything is persisted.
        assert!(update_config(config).is_err());
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::default();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded: Config = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(validate_config(&loaded).is_ok());
        assert_eq!(loaded.reply_delay_min_ms, 500);
        assert_eq!(loaded.reply_delay_max_ms, 1000);
        assert_eq!(loaded.bot_name, "Asistente Virtual");
    }
}
