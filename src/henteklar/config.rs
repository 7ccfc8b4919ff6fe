use crate::error::{HenteklarError, Result};
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 800;

/// Client configuration, stored in `config.json` next to the session slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HenteklarConfig {
    /// Language used for all rendered text
    #[serde(default)]
    pub language: Locale,

    /// Simulated latency of the demo login
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

fn default_login_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

impl Default for HenteklarConfig {
    fn default() -> Self {
        Self {
            language: Locale::default(),
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl HenteklarConfig {
    pub const KEYS: [&'static str; 2] = ["language", "login-delay-ms"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: HenteklarConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "language" => Some(self.language.to_string()),
            "login-delay-ms" => Some(self.login_delay_ms.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "language" => {
                self.language = value.parse()?;
            }
            "login-delay-ms" => {
                self.login_delay_ms = value.parse().map_err(|_| {
                    HenteklarError::Config(format!(
                        "login-delay-ms must be a whole number of milliseconds, got {}",
                        value
                    ))
                })?;
            }
            other => {
                return Err(HenteklarError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HenteklarConfig::default();
        assert_eq!(config.language, Locale::Nb);
        assert_eq!(config.login_delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = HenteklarConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, HenteklarConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("henteklar");

        let mut config = HenteklarConfig::default();
        config.set("language", "en").unwrap();
        config.set("login-delay-ms", "0").unwrap();
        config.save(&nested).unwrap();

        let loaded = HenteklarConfig::load(&nested).unwrap();
        assert_eq!(loaded.language, Locale::En);
        assert_eq!(loaded.login_delay_ms, 0);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"language":"en"}"#).unwrap();

        let loaded = HenteklarConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.language, Locale::En);
        assert_eq!(loaded.login_delay_ms, DEFAULT_LOGIN_DELAY_MS);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = HenteklarConfig::default();
        assert!(config.set("language", "sv").is_err());
        assert!(config.set("login-delay-ms", "soon").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert_eq!(config, HenteklarConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = HenteklarConfig::default();
        for key in HenteklarConfig::KEYS {
            assert!(config.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(config.get("nope"), None);
    }
}
