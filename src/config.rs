use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::clients::jikan::JIKAN_API;
use crate::clients::mymemory::MYMEMORY_API;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub catalog: CatalogConfig,

    pub recommendations: RecommendationConfig,

    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// "pretty" or "json"
    pub log_format: String,

    /// Key-value file holding favorites and the language preference.
    pub data_path: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Forces the UI language ("es" or "en"), ignoring the saved preference.
    pub language: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "pretty".to_string(),
            data_path: default_data_path().to_string_lossy().to_string(),
            worker_threads: 2,
            language: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,

    pub user_agent: String,

    pub search_limit: usize,

    pub suggestion_limit: usize,

    pub top_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: JIKAN_API.to_string(),
            request_timeout_seconds: 30,
            user_agent: format!("AnimeFinder/{}", env!("CARGO_PKG_VERSION")),
            search_limit: 20,
            suggestion_limit: 5,
            top_limit: 12,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Genres taken from a set of search results.
    pub seed_genre_limit: usize,

    /// Genres taken from a single anime when falling back to genre fan-out.
    pub anime_genre_limit: usize,

    pub per_genre_limit: usize,

    pub anime_per_genre_limit: usize,

    pub max_results: usize,

    /// Curated references considered before enrichment.
    pub curated_limit: usize,

    /// Detail requests dispatched together while enriching curated references.
    pub enrichment_batch_size: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            seed_genre_limit: 3,
            anime_genre_limit: 4,
            per_genre_limit: 10,
            anime_per_genre_limit: 8,
            max_results: 12,
            curated_limit: 12,
            enrichment_batch_size: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub enabled: bool,

    pub base_url: String,

    /// Language the catalog writes synopses in. Jikan synopses are English, so
    /// only the Spanish UI needs translating; the English UI makes no calls.
    pub source_language: String,

    /// Synopses longer than this are cut before translation.
    pub max_length: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: MYMEMORY_API.to_string(),
            source_language: "en".to_string(),
            max_length: 500,
        }
    }
}

fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("anime-finder"))
        .unwrap_or_else(|| PathBuf::from("data"))
        .join("storage.json")
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("anime-finder").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".anime-finder").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.catalog.base_url).context("Invalid catalog base URL")?;

        if self.translation.enabled {
            url::Url::parse(&self.translation.base_url).context("Invalid translation base URL")?;
        }

        let rec = &self.recommendations;
        if rec.enrichment_batch_size == 0 {
            anyhow::bail!("recommendations.enrichment_batch_size must be > 0");
        }
        if rec.max_results == 0 {
            anyhow::bail!("recommendations.max_results must be > 0");
        }
        if rec.per_genre_limit == 0 || rec.anime_per_genre_limit == 0 {
            anyhow::bail!("Per-genre limits must be > 0");
        }

        if let Some(lang) = &self.general.language
            && crate::i18n::Language::from_code(lang).is_none()
        {
            anyhow::bail!("Unsupported language '{lang}', expected 'es' or 'en'");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog.base_url, "https://api.jikan.moe/v4");
        assert_eq!(config.recommendations.seed_genre_limit, 3);
        assert_eq!(config.recommendations.anime_genre_limit, 4);
        assert_eq!(config.recommendations.max_results, 12);
        assert_eq!(config.recommendations.enrichment_batch_size, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[catalog]"));
        assert!(toml_str.contains("[recommendations]"));
        assert!(toml_str.contains("[translation]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"
            language = "en"

            [recommendations]
            enrichment_batch_size = 2
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.language.as_deref(), Some("en"));
        assert_eq!(config.recommendations.enrichment_batch_size, 2);

        assert_eq!(config.recommendations.per_genre_limit, 10);
        assert_eq!(config.catalog.search_limit, 20);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.recommendations.enrichment_batch_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.catalog.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!("anime-finder-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.catalog.top_limit = 25;
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.catalog.top_limit, 25);

        let _ = std::fs::remove_file(path);
    }
}
