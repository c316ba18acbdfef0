use std::sync::Arc;

use tracing::warn;

use crate::clients::mymemory::{MyMemoryClient, TranslationError};
use crate::config::TranslationConfig;
use crate::i18n::{Language, Translator};

/// Machine translation backend.
#[async_trait::async_trait]
pub trait TextTranslator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError>;
}

#[async_trait::async_trait]
impl TextTranslator for MyMemoryClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        MyMemoryClient::translate(self, text, source, target).await
    }
}

/// Translates catalog synopses into the UI language.
///
/// Translation is best effort: any failure yields the original text.
pub struct TranslationService {
    backend: Option<Arc<dyn TextTranslator>>,
    config: TranslationConfig,
}

impl TranslationService {
    #[must_use]
    pub fn new(backend: Arc<dyn TextTranslator>, config: TranslationConfig) -> Self {
        let backend = config.enabled.then_some(backend);
        Self { backend, config }
    }

    /// Service that never translates.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            backend: None,
            config: TranslationConfig {
                enabled: false,
                ..TranslationConfig::default()
            },
        }
    }

    fn needs_translation(&self, target: Language) -> bool {
        self.backend.is_some() && !self.config.source_language.eq_ignore_ascii_case(target.code())
    }

    /// `text` in `target`, or `text` unchanged when translation is off,
    /// unnecessary, or fails.
    pub async fn translate_text(&self, text: &str, target: Language) -> String {
        if text.trim().is_empty() || !self.needs_translation(target) {
            return text.to_string();
        }
        let Some(backend) = &self.backend else {
            return text.to_string();
        };

        match backend
            .translate(text, &self.config.source_language, target.code())
            .await
        {
            Ok(translated) => translated,
            Err(e) => {
                warn!(error = %e, target = %target, "Error translating text");
                text.to_string()
            }
        }
    }

    /// Synopsis ready for display in the translator's language.
    ///
    /// Long synopses are cut to `max_length` characters before being sent.
    pub async fn translate_synopsis(&self, synopsis: Option<&str>, translator: &Translator) -> String {
        let synopsis = match synopsis {
            Some(s) if !s.trim().is_empty() => s,
            _ => return translator.t("synopsisNotAvailable"),
        };

        if !self.needs_translation(translator.language()) {
            return synopsis.to_string();
        }

        let text = truncate_chars(synopsis, self.config.max_length);
        self.translate_text(&text, translator.language()).await
    }
}

/// First `max` characters of `text` followed by `...` when it was longer.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingTranslator {
        calls: Mutex<Vec<(String, String, String)>>,
        fail: bool,
    }

    impl RecordingTranslator {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail,
            })
        }
    }

    #[async_trait::async_trait]
    impl TextTranslator for RecordingTranslator {
        async fn translate(
            &self,
            text: &str,
            source: &str,
            target: &str,
        ) -> Result<String, TranslationError> {
            self.calls.lock().unwrap().push((
                text.to_string(),
                source.to_string(),
                target.to_string(),
            ));
            if self.fail {
                Err(TranslationError::Empty)
            } else {
                Ok(format!("[{target}] {text}"))
            }
        }
    }

    #[test]
    fn test_truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exact", 5), "exact");
    }

    #[tokio::test]
    async fn test_no_translation_into_source_language() {
        let backend = RecordingTranslator::new(false);
        let service = TranslationService::new(backend.clone(), TranslationConfig::default());

        let text = service
            .translate_synopsis(Some("A story."), &Translator::new(Language::En))
            .await;
        assert_eq!(text, "A story.");
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_translates_and_truncates_long_synopsis() {
        let backend = RecordingTranslator::new(false);
        let config = TranslationConfig {
            max_length: 4,
            ..TranslationConfig::default()
        };
        let service = TranslationService::new(backend.clone(), config);

        let text = service
            .translate_synopsis(Some("abcdefgh"), &Translator::new(Language::Es))
            .await;
        assert_eq!(text, "[es] abcd...");

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, "en");
        assert_eq!(calls[0].2, "es");
    }

    #[tokio::test]
    async fn test_failure_returns_original() {
        let service =
            TranslationService::new(RecordingTranslator::new(true), TranslationConfig::default());
        let text = service.translate_text("Hello", Language::Es).await;
        assert_eq!(text, "Hello");
    }

    #[tokio::test]
    async fn test_missing_synopsis_uses_placeholder() {
        let service = TranslationService::disabled();
        let t = Translator::new(Language::Es);
        assert_eq!(
            service.translate_synopsis(None, &t).await,
            "Sinopsis no disponible"
        );
        assert_eq!(
            service.translate_synopsis(Some("   "), &t).await,
            "Sinopsis no disponible"
        );
        assert_eq!(service.translate_synopsis(Some("Texto"), &t).await, "Texto");
    }

    #[tokio::test]
    async fn test_disabled_config_never_calls_backend() {
        let backend = RecordingTranslator::new(false);
        let config = TranslationConfig {
            enabled: false,
            ..TranslationConfig::default()
        };
        let service = TranslationService::new(backend.clone(), config);
        assert_eq!(service.translate_text("Hello", Language::Es).await, "Hello");
        assert!(backend.calls.lock().unwrap().is_empty());
    }
}
