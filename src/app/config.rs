use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use crate::app::error::ConfigError;

pub const CONFIG_DIR: &str = "movie_search";
pub const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_token: String,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub log_level: String,
    /// Config file the values were read from, if one existed.
    pub file: Option<PathBuf>,
    /// `.env` file loaded into the environment, if any.
    pub dotenv: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(alias = "token")]
    api_token: Option<String>,
    base_url: Option<String>,
    image_base_url: Option<String>,
    language: Option<String>,
    log_level: Option<String>,
}

/// Location of the optional `config.json`, falling back to the working
/// directory when the platform has no config dir.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

/// Loads configuration from `.env`, the config file and the process environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let dotenv = dotenvy::dotenv().ok();
    let config = load_from(&config_path(), |key| std::env::var(key).ok())?;
    Ok(Config { dotenv, ..config })
}

/// Resolves defaults < file < environment. `env` is injected so tests never
/// touch the real process environment.
pub fn load_from<F>(path: &Path, env: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (raw, file) = match read_raw(path)? {
        Some(raw) => (raw, Some(path.to_path_buf())),
        None => (RawConfig::default(), None),
    };
    let env = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let api_token = env("TMDB_TOKEN")
        .or(raw.api_token)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ConfigError::MissingToken(path.to_path_buf()))?;

    Ok(Config {
        api_token,
        base_url: env("TMDB_BASE_URL")
            .or(raw.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        image_base_url: env("TMDB_IMAGE_BASE_URL")
            .or(raw.image_base_url)
            .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
        language: env("TMDB_LANGUAGE")
            .or(raw.language)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        log_level: env("MOVIE_SEARCH_LOG")
            .or(raw.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        file,
        dotenv: None,
    })
}

/// `None` when the file does not exist.
fn read_raw(path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let parsed = serde_json::from_str::<RawConfig>(&contents).map_err(|source| {
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            Ok(Some(parsed))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_token_with_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = load_from(&path, env_from(&[("TMDB_TOKEN", "abc")])).expect("config");
        assert_eq!(config.api_token, "abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.image_base_url, DEFAULT_IMAGE_BASE_URL);
        assert_eq!(config.language, DEFAULT_LANGUAGE);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.file, None);
    }

    #[test]
    fn missing_token_fails_fast() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let err = load_from(&path, env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken(_)));

        let err = load_from(&path, env_from(&[("TMDB_TOKEN", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken(_)));
    }

    #[test]
    fn file_values_are_overridden_by_env() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"{"api_token": "from-file", "language": "de-DE", "base_url": "http://localhost:9000/3"}"#,
        )
        .expect("write config");

        let config = load_from(&path, env_from(&[("TMDB_LANGUAGE", "fr-FR")])).expect("config");
        assert_eq!(config.api_token, "from-file");
        assert_eq!(config.base_url, "http://localhost:9000/3");
        assert_eq!(config.language, "fr-FR");
        assert_eq!(config.file.as_deref(), Some(path.as_path()));

        let config = load_from(&path, env_from(&[("TMDB_TOKEN", "from-env")])).expect("config");
        assert_eq!(config.api_token, "from-env");
        assert_eq!(config.language, "de-DE");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").expect("write config");

        let err = load_from(&path, env_from(&[("TMDB_TOKEN", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
