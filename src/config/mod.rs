//! Configuration management module.
//!
//! This module handles loading and saving the application configuration: the
//! submission endpoint and the theme preference.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::ui::Theme;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/select-field-builder";
pub const DEFAULT_ENDPOINT: &str = "https://webhook.site/b1971fb0-dd60-4fa4-b88b-ee04271da2db";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: String,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default values and no file.
    ///
    pub fn new() -> Config {
        Config {
            endpoint: default_endpoint(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// Load the configuration from the default directory or the custom one
    /// if provided. A missing file is created with default values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if !file_path.exists() {
            log::info!(
                "No configuration found, writing defaults to {}",
                file_path.display()
            );
            return self.save();
        }

        let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.endpoint = data.endpoint;
        self.theme_name = data.theme_name;
        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            endpoint: self.endpoint.clone(),
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;
        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the configured theme, or an error if the name is unknown.
    ///
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::from_name(&self.theme_name)
            .ok_or_else(|| ConfigError::UnknownTheme(self.theme_name.clone()))
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Word;
    use fake::Fake;

    fn scratch_dir() -> PathBuf {
        let word: String = Word().fake();
        std::env::temp_dir().join(format!(
            "select-field-builder-{}-{}-{}",
            std::process::id(),
            word,
            (0..u32::MAX).fake::<u32>()
        ))
    }

    #[test]
    fn test_new_has_defaults() {
        let config = Config::new();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.theme_name, "tokyo-night");
        assert!(config.file_path().is_none());
        assert!(config.theme().is_ok());
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = scratch_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        let file_path = dir.join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));

        let contents = fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains(DEFAULT_ENDPOINT));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_reads_existing_file() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "endpoint: http://localhost:8080/fields\ntheme_name: dracula\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/fields");
        assert_eq!(config.theme_name, "dracula");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_fills_missing_keys() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "theme_name: rose-pine-dawn\n").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.theme_name, "rose-pine-dawn");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "endpoint: [unterminated\n").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_unknown_theme() {
        let mut config = Config::new();
        config.theme_name = "neon".to_string();
        assert!(matches!(config.theme(), Err(ConfigError::UnknownTheme(_))));
    }
}
