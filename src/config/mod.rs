//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the directory API location, tenant identifiers, page size and the
//! placeholders used when submitting a new employee.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::state::SubmissionDefaults;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/employee-directory";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub project_id: String,
    pub environment_id: String,
    pub page_size: usize,
    pub defaults: SubmissionDefaults,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_environment_id")]
    pub environment_id: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub defaults: SubmissionDefaults,
}

fn default_base_url() -> String {
    "https://free-ap-south-1.cosmocloud.io/development/api".to_string()
}

fn default_project_id() -> String {
    "66aa21c7440310e3620e0a31".to_string()
}

fn default_environment_id() -> String {
    "66aa21c7440310e3620e0a32".to_string()
}

fn default_page_size() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the default settings.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            project_id: default_project_id(),
            environment_id: default_environment_id(),
            page_size: default_page_size(),
            defaults: SubmissionDefaults::default(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, initialize one with the
    /// default settings at the default path or the custom path if provided.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            log::info!("Writing default configuration to {}", file_path.display());
            return self.save();
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            source: e,
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        if data.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "page_size".to_string(),
                message: "must be greater than zero".to_string(),
            }
            .into());
        }
        self.base_url = data.base_url;
        self.project_id = data.project_id;
        self.environment_id = data.environment_id;
        self.page_size = data.page_size;
        self.defaults = data.defaults;
        log::debug!("Loaded configuration from {}", file_path.display());
        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            base_url: self.base_url.clone(),
            project_id: self.project_id.clone(),
            environment_id: self.environment_id.clone(),
            page_size: self.page_size,
            defaults: self.defaults.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

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

    /// Return the path of the loaded configuration file, if any.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use tempfile::tempdir;

    type TestResult = Result<(), Box<dyn Error>>;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert!(config.base_url.contains("cosmocloud.io"));
        assert_eq!(config.project_id, "66aa21c7440310e3620e0a31");
        assert_eq!(config.environment_id, "66aa21c7440310e3620e0a32");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.defaults, SubmissionDefaults::default());
        assert!(config.file_path().is_none());
    }

    #[test]
    fn test_load_writes_default_file() -> TestResult {
        let dir = tempdir()?;
        let mut config = Config::new();
        config.load(dir.path().to_str())?;
        let file_path = dir.path().join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));

        let contents = fs::read_to_string(&file_path)?;
        assert!(contents.contains("page_size: 10"));
        assert!(contents.contains("Test Department"));
        Ok(())
    }

    #[test]
    fn test_load_creates_missing_directory() -> TestResult {
        let dir = tempdir()?;
        let nested = dir.path().join("nested").join("config");
        let mut config = Config::new();
        config.load(nested.to_str())?;
        assert!(nested.join(FILE_NAME).exists());
        Ok(())
    }

    #[test]
    fn test_load_existing_file() -> TestResult {
        let dir = tempdir()?;
        fs::write(
            dir.path().join(FILE_NAME),
            "base_url: http://localhost:8080/api\npage_size: 25\ndefaults:\n  department: Finance\n",
        )?;

        let mut config = Config::new();
        config.load(dir.path().to_str())?;
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.project_id, "66aa21c7440310e3620e0a31");
        assert_eq!(config.defaults.department, "Finance");
        assert_eq!(config.defaults.state, "NA");
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> TestResult {
        let dir = tempdir()?;
        let mut config = Config::new();
        config.load(dir.path().to_str())?;
        config.page_size = 50;
        config.defaults.state = "CA".to_string();
        config.save()?;

        let mut reloaded = Config::new();
        reloaded.load(dir.path().to_str())?;
        assert_eq!(reloaded.page_size, 50);
        assert_eq!(reloaded.defaults.state, "CA");
        Ok(())
    }

    #[test]
    fn test_load_rejects_zero_page_size() -> TestResult {
        let dir = tempdir()?;
        fs::write(dir.path().join(FILE_NAME), "page_size: 0\n")?;

        let mut config = Config::new();
        let result = config.load(dir.path().to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidValue { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_load_rejects_malformed_file() -> TestResult {
        let dir = tempdir()?;
        fs::write(dir.path().join(FILE_NAME), "page_size: [not, a, number]\n")?;

        let mut config = Config::new();
        let result = config.load(dir.path().to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_load_unreadable_file() -> TestResult {
        let dir = tempdir()?;
        // A directory where the file should be cannot be read as text
        fs::create_dir(dir.path().join(FILE_NAME))?;

        let mut config = Config::new();
        let result = config.load(dir.path().to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::LoadFailed { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_save_without_path() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
