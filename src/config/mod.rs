use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{errors::EstimateError, estimate::Category, utils};

const TMP_SUFFIX: &str = "tmp";
const MAX_DECIMALS: u8 = 6;

/// Shell preferences. Cost records are never written here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub default_category: Category,
    pub decimal_places: u8,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "€".into(),
            default_category: Category::Woodworking,
            decimal_places: 2,
            screen_reader_mode: false,
            high_contrast_mode: false,
        }
    }
}

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: [&str; 5] = [
    "currency",
    "default_category",
    "decimals",
    "screen_reader",
    "high_contrast",
];

impl Config {
    /// Updates one preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), EstimateError> {
        match key.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "currency" | "currency_symbol" => {
                self.currency_symbol = value.trim().to_string();
            }
            "default_category" | "category" => {
                self.default_category = value.parse()?;
            }
            "decimals" | "decimal_places" | "precision" => {
                let places: u8 = value.trim().parse().map_err(|_| {
                    EstimateError::Config(format!("`{}` is not a whole number", value))
                })?;
                if places > MAX_DECIMALS {
                    return Err(EstimateError::Config(format!(
                        "decimals must be between 0 and {}",
                        MAX_DECIMALS
                    )));
                }
                self.decimal_places = places;
            }
            "screen_reader" | "screen_reader_mode" => {
                self.screen_reader_mode = parse_flag(value)?;
            }
            "high_contrast" | "high_contrast_mode" => {
                self.high_contrast_mode = parse_flag(value)?;
            }
            other => {
                return Err(EstimateError::Config(format!(
                    "unknown key `{}` (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn decimals(&self) -> usize {
        usize::from(self.decimal_places)
    }
}

fn parse_flag(value: &str) -> Result<bool, EstimateError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(EstimateError::Config(format!(
            "`{}` is not a flag (use on/off)",
            other
        ))),
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(utils::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: utils::config_file_in(&base),
        }
    }

    /// Loads the stored preferences, or defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, EstimateError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), EstimateError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let written = write_atomic(&tmp, &json)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(EstimateError::from));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), EstimateError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().join("nested"));
        let mut config = Config::default();
        config.set("currency", "$").unwrap();
        config.set("default_category", "laser").unwrap();
        manager.save(&config).expect("save config");

        let loaded = manager.load().expect("load config");
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.default_category, Category::Laser);
        assert!(!tmp_path(manager.path()).exists());
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("decimals", "9").is_err());
        assert!(config.set("decimals", "two").is_err());
        assert!(config.set("high_contrast", "maybe").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert!(matches!(
            config.set("default_category", "pottery"),
            Err(EstimateError::InvalidCategory(_))
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn failed_save_leaves_no_temp_file() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        // A non-empty directory where the file should go makes the rename fail.
        fs::create_dir_all(manager.path().join("blocker")).unwrap();

        let result = manager.save(&Config::default());
        assert!(matches!(result, Err(EstimateError::Storage(_))));
        assert!(!tmp_path(manager.path()).exists());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        fs::write(manager.path(), r#"{ "decimal_places": 3 }"#).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.decimal_places, 3);
        assert_eq!(loaded.currency_symbol, "€");
    }
}
