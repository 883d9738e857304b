//! Persistent user preferences: session identity, language model settings,
//! and output accessibility flags.

use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use uuid::Uuid;

use crate::{
    core::{
        errors::{Result, TrackerError},
        utils::{app_data_dir, config_file_in, ensure_dir, write_atomic},
    },
    domain::Session,
};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmSettings {
    pub model: String,
    pub api_base: String,
    /// Name of the environment variable holding the API key; the key itself is never stored.
    pub api_key_env: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            api_base: DEFAULT_API_BASE.into(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
        }
    }
}

impl LlmSettings {
    pub fn api_key(&self) -> Result<String> {
        env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TrackerError::ConfigError(format!(
                    "{} environment variable not set",
                    self.api_key_env
                ))
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub user_id: Uuid,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub high_contrast_mode: bool,
    #[serde(default)]
    pub screen_reader_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_id: Uuid::new_v4(),
            llm: LlmSettings::default(),
            high_contrast_mode: false,
            screen_reader_mode: false,
        }
    }
}

impl Config {
    pub fn session(&self) -> Session {
        Session::new(self.user_id)
    }
}

/// Loads and saves [`Config`] as a JSON document.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        let path = config_file_in(&base);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    /// Reads the stored config; a missing file yields defaults with a fresh user id.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| TrackerError::ConfigError(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    /// Loads the config and persists it when it did not exist yet, so the
    /// generated user id stays stable across runs.
    pub fn load_or_init(&self) -> Result<Config> {
        let existed = self.path.exists();
        let config = self.load()?;
        if !existed {
            self.save(&config)?;
            tracing::info!(path = %self.path.display(), "created default configuration");
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_or_init_persists_a_stable_user_id() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let first = manager.load_or_init().unwrap();
        let second = manager.load_or_init().unwrap();
        assert_eq!(first.user_id, second.user_id);
        assert!(manager.path().exists());
    }

    #[test]
    fn missing_llm_section_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let user_id = Uuid::new_v4();
        fs::write(manager.path(), format!(r#"{{"user_id": "{user_id}"}}"#)).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.user_id, user_id);
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert!(!config.high_contrast_mode);
    }

    #[test]
    fn corrupt_config_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "not json").unwrap();
        assert!(matches!(manager.load(), Err(TrackerError::ConfigError(_))));
    }

    #[test]
    fn api_key_reads_named_variable() {
        let settings = LlmSettings {
            api_key_env: "HOURS_CORE_TEST_KEY_UNSET_VARIABLE".into(),
            ..LlmSettings::default()
        };
        assert!(matches!(settings.api_key(), Err(TrackerError::ConfigError(_))));
    }
}
