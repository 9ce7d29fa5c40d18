// Settings resolution and persistence. The token and base URL come from (in
// priority order) the DIGITALOCEAN_TOKEN environment variable, then the
// settings file at ~/.config/do-cli/config.json, then built-in defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.digitalocean.com";
pub const TOKEN_ENV_VAR: &str = "DIGITALOCEAN_TOKEN";

const CONFIG_DIR: &str = "do-cli";
const CONFIG_FILE: &str = "config.json";

/// Local settings for the CLI. Resolved once at startup and passed explicitly
/// into every command; never read through global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub token: String,
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings for this invocation. A missing settings file is not an
    /// error (defaults with an empty token are returned); a malformed one is,
    /// so a corrupted token is never silently ignored.
    pub fn load() -> Result<Self> {
        let env_token = std::env::var(TOKEN_ENV_VAR).ok();
        Self::resolve(env_token, &config_path()?)
    }

    /// Persist the full settings record to the per-user settings file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    // Resolution core, separated from `load` so the priority order can be
    // tested without mutating the process environment.
    fn resolve(env_token: Option<String>, path: &Path) -> Result<Self> {
        if let Some(token) = env_token.filter(|t| !t.is_empty()) {
            // The env token wins outright and forces the default base URL;
            // the settings file is not consulted at all.
            return Ok(Settings {
                token,
                base_url: DEFAULT_BASE_URL.to_string(),
            });
        }
        Self::load_file(path)
    }

    fn load_file(path: &Path) -> Result<Self> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(err) => {
                return Err(Error::Config(format!(
                    "failed to read {}: {}",
                    path.display(),
                    err
                )))
            }
        };

        let mut settings: Settings = serde_json::from_str(&data).map_err(|err| {
            Error::Config(format!("invalid settings file {}: {}", path.display(), err))
        })?;
        if settings.base_url.is_empty() {
            settings.base_url = DEFAULT_BASE_URL.to_string();
        }
        Ok(settings)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|err| {
                Error::Config(format!(
                    "failed to create config directory {}: {}",
                    dir.display(),
                    err
                ))
            })?;
        }

        let data = serde_json::to_string_pretty(self)
            .map_err(|err| Error::Config(format!("failed to serialize settings: {}", err)))?;
        fs::write(path, data).map_err(|err| {
            Error::Config(format!("failed to write {}: {}", path.display(), err))
        })?;

        // The token is a secret: keep the file readable by the owner only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|err| {
                Error::Config(format!(
                    "failed to set permissions on {}: {}",
                    path.display(),
                    err
                ))
            })?;
        }

        Ok(())
    }
}

fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Error::Config("could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("config.json")
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_settings_path(&dir);

        let settings = Settings {
            token: "tok-123".to_string(),
            base_url: "https://api.example.com".to_string(),
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::resolve(None, &path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_settings_path(&dir);

        let loaded = Settings::resolve(None, &path).unwrap();
        assert_eq!(loaded.token, "");
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_settings_path(&dir);
        fs::write(&path, "{not json").unwrap();

        let err = Settings::resolve(None, &path).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
    }

    #[test]
    fn env_token_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_settings_path(&dir);
        Settings {
            token: "file-token".to_string(),
            base_url: "https://other.example.com".to_string(),
        }
        .save_to(&path)
        .unwrap();

        let loaded = Settings::resolve(Some("env-token".to_string()), &path).unwrap();
        assert_eq!(loaded.token, "env-token");
        // The env override also forces the default base URL.
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn empty_env_token_falls_through_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_settings_path(&dir);
        Settings {
            token: "file-token".to_string(),
            base_url: "https://other.example.com".to_string(),
        }
        .save_to(&path)
        .unwrap();

        let loaded = Settings::resolve(Some(String::new()), &path).unwrap();
        assert_eq!(loaded.token, "file-token");
        assert_eq!(loaded.base_url, "https://other.example.com");
    }

    #[test]
    fn empty_base_url_in_file_gets_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_settings_path(&dir);
        fs::write(&path, r#"{"token": "tok", "base_url": ""}"#).unwrap();

        let loaded = Settings::resolve(None, &path).unwrap();
        assert_eq!(loaded.token, "tok");
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_fields_in_file_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_settings_path(&dir);
        fs::write(&path, r#"{"token": "tok"}"#).unwrap();

        let loaded = Settings::resolve(None, &path).unwrap();
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = temp_settings_path(&dir);
        Settings::default().save_to(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
