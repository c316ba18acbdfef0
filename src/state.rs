use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};

use crate::clients::jikan::JikanClient;
use crate::clients::mymemory::MyMemoryClient;
use crate::config::Config;
use crate::db::{Store, StoreError};
use crate::i18n::{self, Language, Translator};
use crate::services::{CatalogClient, FavoritesService, RecommendationService, TranslationService};

/// Everything a command needs, built once per process.
pub struct AppState {
    pub config: Config,

    pub store: Store,

    pub catalog: Arc<dyn CatalogClient>,

    pub recommendations: RecommendationService,

    pub favorites: FavoritesService,

    pub translation: TranslationService,

    pub translator: Translator,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::open_or_reset(&config.general.data_path)
            .await
            .context("Failed to open local storage")?;
        let catalog: Arc<dyn CatalogClient> = Arc::new(JikanClient::from_config(&config.catalog)?);

        let translation = if config.translation.enabled {
            let timeout = Duration::from_secs(config.catalog.request_timeout_seconds);
            match MyMemoryClient::new(&config.translation.base_url, timeout) {
                Ok(client) => TranslationService::new(Arc::new(client), config.translation.clone()),
                Err(e) => {
                    warn!(error = %e, "Translation client unavailable, synopses stay untranslated");
                    TranslationService::disabled()
                }
            }
        } else {
            TranslationService::disabled()
        };

        Ok(Self::with_parts(config, store, catalog, translation).await)
    }

    /// Assembles the state around an existing catalog and translation service.
    pub async fn with_parts(
        config: Config,
        store: Store,
        catalog: Arc<dyn CatalogClient>,
        translation: TranslationService,
    ) -> Self {
        let language = i18n::initial_language(&store, config.general.language.as_deref()).await;
        let favorites = FavoritesService::load(store.clone()).await;
        let recommendations =
            RecommendationService::new(catalog.clone(), config.recommendations.clone());

        info!(
            language = %language,
            favorites = favorites.count().await,
            "Application state initialized"
        );

        Self {
            config,
            store,
            catalog,
            recommendations,
            favorites,
            translation,
            translator: Translator::new(language),
        }
    }

    /// Switches the UI language and saves it as the preference.
    pub async fn change_language(&mut self, language: Language) -> Result<(), StoreError> {
        self.translator.set_language(language);
        i18n::save_language(&self.store, language).await?;
        info!(language = %language, "Language changed");
        Ok(())
    }

    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    #[must_use]
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.translator.t_with(key, params)
    }
}
