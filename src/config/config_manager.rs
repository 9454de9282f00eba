use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CLASSIFIER_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{SdgError, SdgResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// The file `load` reads: the explicit path, or the default one when it exists.
    pub fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(Self::default_path()).filter(|default_path| default_path.exists()),
        }
    }

    pub fn endpoint_override() -> Option<String> {
        std::env::var(CLASSIFIER_URL_ENV)
            .ok()
            .map(|endpoint| endpoint.trim().to_string())
            .filter(|endpoint| !endpoint.is_empty())
    }

    /// Loads the config file if present, otherwise defaults. The endpoint
    /// may be overridden through the environment. Runs before the logger
    /// is set up, so it does not log.
    pub fn load(path: Option<&Path>) -> SdgResult<Config> {
        let mut config = match Self::resolve_path(path) {
            Some(path) => Self::load_file(&path)?,
            None => Config::default(),
        };

        if let Some(endpoint) = Self::endpoint_override() {
            config.classifier.endpoint = endpoint;
        }

        Ok(config)
    }

    pub fn load_file(path: &Path) -> SdgResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| SdgError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> SdgResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate_config(config: &Config) -> SdgResult<()> {
        let endpoint = config.classifier.endpoint.trim();
        if endpoint.is_empty() {
            return Err(SdgError::config_error(
                "Classifier endpoint is empty",
                Some("classifier.endpoint"),
                Some("Set the URL of the SDG classification service"),
            ));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(SdgError::config_error(
                &format!("Classifier endpoint '{endpoint}' is not an http(s) URL"),
                Some("classifier.endpoint"),
                None,
            ));
        }
        if config.classifier.timeout_secs == 0 {
            return Err(SdgError::config_error(
                "Request timeout must be at least one second",
                Some("classifier.timeout_secs"),
                None,
            ));
        }
        if config.classifier.concurrency == 0 {
            return Err(SdgError::config_error(
                "Concurrency must be at least 1",
                Some("classifier.concurrency"),
                Some("Use 1 for strictly sequential classification"),
            ));
        }
        if config.retry.enabled && config.retry.max_attempts == 0 {
            return Err(SdgError::config_error(
                "Retry is enabled with zero attempts",
                Some("retry.max_attempts"),
                None,
            ));
        }
        if config.report.window_years == 0 {
            return Err(SdgError::config_error(
                "Report year window is empty",
                Some("report.window_years"),
                None,
            ));
        }
        Ok(())
    }

    pub fn create_sample_config(path: Option<&Path>) -> SdgResult<PathBuf> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);
        if path.exists() {
            return Err(SdgError::file_error(
                &path.display().to_string(),
                "create config",
                "file already exists",
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, SAMPLE_CONFIG)?;
        Ok(path)
    }
}

const SAMPLE_CONFIG: &str = r#"# SDG Classifier Configuration

[classifier]
# Classification service; SDG_CLASSIFIER_URL overrides this value
endpoint = "https://aurora-sdg.labs.vu.nl/classifier/classify/elsevier-sdg-multi"
# Per-request timeout
timeout_secs = 30
# Requests in flight at once (1 = one line at a time)
concurrency = 1

[retry]
# When enabled, failed lines are retried and then recorded as unclassified
# instead of aborting the whole report
enabled = false
max_attempts = 3
base_delay_ms = 500
max_delay_ms = 5000

[report]
# Selectable report years: first_year .. first_year + window_years - 1
first_year = 2022
window_years = 4

[output]
# "table" or "json"
format = "table"
verbose = false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_and_validates() {
        let config = ConfigManager::parse(SAMPLE_CONFIG).unwrap();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert_eq!(config.report.years(), 2022..=2025);
        assert!(!config.retry.enabled);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigManager::parse("").unwrap();
        assert_eq!(config.classifier.concurrency, 1);
        assert_eq!(config.classifier.timeout_secs, 30);
    }
}
