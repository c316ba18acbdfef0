//! Bilingual (Spanish / English) UI strings.

mod tables;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::db::{Store, StoreError, keys};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::Es, Self::En];

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Language from a POSIX locale string such as `es_ES.UTF-8` or `en-US`.
    #[must_use]
    pub fn from_locale(locale: &str) -> Option<Self> {
        let code = locale.split(['_', '-', '.']).next()?;
        Self::from_code(code)
    }

    /// Detects the language from the usual locale variables, defaulting to Spanish.
    #[must_use]
    pub fn detect() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .and_then(|locale| Self::from_locale(&locale))
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Looks up UI strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translation for `key`, or the key itself when it has no entry.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// Translation for `key` with `{name}` placeholders filled from `params`.
    ///
    /// Placeholders without a matching param are left untouched.
    #[must_use]
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let Some(template) = tables::lookup(self.language, key) else {
            warn!(key, language = %self.language, "Missing translation");
            return key.to_string();
        };

        if params.is_empty() {
            return template.to_string();
        }

        let params: HashMap<&str, &str> = params.iter().copied().collect();
        interpolate(template, &params)
    }
}

fn interpolate(template: &str, params: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.find('}') {
            Some(end)
                if !after[..end].is_empty()
                    && after[..end]
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_') =>
            {
                let name = &after[..end];
                match params.get(name) {
                    Some(value) if !value.is_empty() => out.push_str(value),
                    _ => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Resolves the starting language: a forced code wins, then the saved
/// preference, then locale detection.
pub async fn initial_language(store: &Store, forced: Option<&str>) -> Language {
    if let Some(lang) = forced.and_then(Language::from_code) {
        return lang;
    }

    match store.get::<String>(keys::LANGUAGE).await {
        Ok(Some(saved)) => {
            if let Some(lang) = Language::from_code(&saved) {
                info!(language = %lang, "Language loaded from preferences");
                return lang;
            }
            warn!(saved, "Ignoring unsupported saved language");
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Failed to read saved language"),
    }

    let detected = Language::detect();
    info!(language = %detected, "Language detected");
    detected
}

/// Persists `language` as the preferred UI language.
pub async fn save_language(store: &Store, language: Language) -> Result<(), StoreError> {
    store.set(keys::LANGUAGE, &language.code()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("ES"), Some(Language::Es));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(Language::from_locale("es_ES.UTF-8"), Some(Language::Es));
        assert_eq!(Language::from_locale("en-US"), Some(Language::En));
        assert_eq!(Language::from_locale("C.UTF-8"), None);
        assert_eq!(Language::from_locale("de_DE"), None);
    }

    #[test]
    fn test_translate_both_languages() {
        let es = Translator::new(Language::Es);
        let en = Translator::new(Language::En);
        assert_eq!(es.t("search"), "Buscar");
        assert_eq!(en.t("search"), "Search");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let t = Translator::new(Language::En);
        assert_eq!(t.t("doesNotExist"), "doesNotExist");
    }

    #[test]
    fn test_interpolation() {
        let t = Translator::new(Language::En);
        assert_eq!(
            t.t_with("recommendationsSuccess", &[("count", "7"), ("title", "Monster")]),
            "Found 7 recommendations for \"Monster\""
        );
        // missing params stay visible
        assert_eq!(
            t.t_with("recommendationsFor", &[("count", "1")]),
            "Recommendations for \"{title}\""
        );
    }

    #[test]
    fn test_interpolate_ignores_non_placeholders() {
        let params: HashMap<&str, &str> = [("a", "1")].into_iter().collect();
        assert_eq!(interpolate("{a} { b} {} {a", &params), "1 { b} {} {a");
    }

    #[test]
    fn test_every_key_exists_in_both_languages() {
        for key in tables::KEYS {
            for lang in Language::ALL {
                assert!(
                    tables::lookup(lang, key).is_some(),
                    "missing {key} for {lang}"
                );
            }
        }
    }

    #[tokio::test]
    async fn test_initial_language_prefers_forced_then_saved() {
        let path = std::env::temp_dir()
            .join(format!("anime-finder-i18n-{}", std::process::id()))
            .join("storage.json");
        let store = Store::in_memory(&path);

        save_language(&store, Language::En).await.unwrap();
        assert_eq!(initial_language(&store, None).await, Language::En);
        assert_eq!(initial_language(&store, Some("es")).await, Language::Es);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
