use std::path::{Path, PathBuf};

use employ_core::api::routes::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

pub const API_URL_ENV: &str = "EMPLOY_API_URL";
pub const API_KEY_ENV: &str = "EMPLOY_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl Config {
    /// `<config_dir>/employ/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("employ").join("config.json"))
    }

    /// Defaults, then the config file, then environment overrides.
    pub fn load() -> Self {
        Self::load_from(Self::default_path().as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    pub fn load_from(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(path) = path
            && path.exists()
        {
            match std::fs::read_to_string(path)
                .map_err(anyhow::Error::from)
                .and_then(|content| {
                    serde_json::from_str::<Config>(&content)
                        .map_err(anyhow::Error::from)
                }) {
                Ok(loaded) => config = loaded,
                Err(e) => log::warn!(
                    "Ignoring unreadable config file {}: {}",
                    path.display(),
                    e
                ),
            }
        }

        if let Some(api_url) = env(API_URL_ENV).filter(|v| !v.trim().is_empty())
        {
            config.api_url = api_url;
        }
        if let Some(api_key) = env(API_KEY_ENV).filter(|v| !v.trim().is_empty())
        {
            config.api_key = Some(api_key);
        }

        config
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        match Self::default_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_demo_api() {
        let config = Config::load_from(None, env_of(&[]));
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn file_then_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employ").join("config.json");
        Config {
            api_url: "https://file.example/api".into(),
            api_key: Some("file-key".into()),
        }
        .save_to(&path)
        .unwrap();

        let from_file = Config::load_from(Some(&path), env_of(&[]));
        assert_eq!(from_file.api_url, "https://file.example/api");
        assert_eq!(from_file.api_key.as_deref(), Some("file-key"));

        let overridden = Config::load_from(
            Some(&path),
            env_of(&[(API_URL_ENV, "http://localhost:9000")]),
        );
        assert_eq!(overridden.api_url, "http://localhost:9000");
        assert_eq!(overridden.api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let config = Config::load_from(Some(&path), env_of(&[]));
        assert_eq!(config, Config::default());
    }
}
