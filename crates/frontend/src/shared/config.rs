//! Конфигурация приложения
//!
//! Значения по умолчанию зашиты в бинарник из `config/app.toml`.
//! Часть настроек можно переопределить из query-строки страницы:
//! `?source=remote&locale=en`.

use serde::Deserialize;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config/app.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid query overrides: {0}")]
    Query(String),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    Mock,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub data_source: DataSourceKind,
    pub api_port: u16,
    pub default_locale: String,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    #[serde(default)]
    pub mock_latency_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Overrides accepted from the page URL
#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    source: Option<DataSourceKind>,
    locale: Option<String>,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(contents)?;
        if config.page_size_options.is_empty() {
            config.page_size_options = vec![config.page_size];
        }
        config.page_size = config.page_size.max(1);
        Ok(config)
    }

    pub fn with_query(mut self, query: &str) -> Result<Self, ConfigError> {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Ok(self);
        }
        let overrides: QueryOverrides =
            serde_qs::from_str(query).map_err(|e| ConfigError::Query(e.to_string()))?;
        if let Some(source) = overrides.source {
            self.data_source = source;
        }
        if let Some(locale) = overrides.locale {
            self.default_locale = locale;
        }
        Ok(self)
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Load the embedded configuration and apply the page's query overrides.
    ///
    /// Broken overrides are logged and skipped.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_toml(DEFAULT_CONFIG)?;
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match config.clone().with_query(&search) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("{}", e);
                Ok(config)
            }
        }
    }
}

pub fn use_app_config() -> AppConfig {
    leptos::prelude::use_context::<AppConfig>().expect("AppConfig not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.data_source, DataSourceKind::Mock);
        assert_eq!(config.api_port, 3000);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(config.log_level().unwrap(), log::Level::Debug);
    }

    #[test]
    fn test_query_overrides() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG)
            .unwrap()
            .with_query("?active=port&source=remote&locale=en")
            .unwrap();
        assert_eq!(config.data_source, DataSourceKind::Remote);
        assert_eq!(config.default_locale, "en");
    }

    #[test]
    fn test_bad_source_override_is_an_error() {
        let result = AppConfig::from_toml(DEFAULT_CONFIG)
            .unwrap()
            .with_query("source=ftp");
        assert!(matches!(result, Err(ConfigError::Query(_))));
    }

    #[test]
    fn test_missing_options_fall_back_to_page_size() {
        let config = AppConfig::from_toml(
            r#"
data_source = "remote"
api_port = 8080
default_locale = "en"
page_size = 20
page_size_options = []
"#,
        )
        .unwrap();
        assert_eq!(config.page_size_options, vec![20]);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.mock_latency_ms, 0);
    }
}
