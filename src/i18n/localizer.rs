// SPDX-License-Identifier: MPL-2.0
//! Active-language state and dotted-key translation.

use crate::domain::locale::{Locale, UnsupportedLocale};
use crate::i18n::catalog::Catalog;
use unic_langid::LanguageIdentifier;

/// Owns the active locale and translates dotted keys against the catalogs.
pub struct Localizer {
    catalog: Catalog,
    current: Locale,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::with_locale(Locale::default())
    }
}

impl Localizer {
    /// Creates a localizer with the startup locale resolved from, in order:
    /// a CLI override, the persisted preference, the system locale, and
    /// finally the Uzbek (Latin) default. Never fails.
    #[must_use]
    pub fn new(cli_lang: Option<String>, stored: Option<String>) -> Self {
        let current = resolve_locale(
            cli_lang.as_deref(),
            stored.as_deref(),
            sys_locale::get_locale().as_deref(),
        );
        Self {
            catalog: Catalog::load(),
            current,
        }
    }

    /// Creates a localizer with a fixed locale, bypassing resolution.
    #[must_use]
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            catalog: Catalog::load(),
            current: locale,
        }
    }

    /// The currently active locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.current
    }

    /// Switches the active language. All subsequent [`tr`](Self::tr) calls
    /// read the new locale's table.
    pub fn set_locale(&mut self, locale: Locale) {
        self.current = locale;
    }

    /// Switches the active language by code.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedLocale`] for a code outside the supported set;
    /// the active locale is left unchanged.
    pub fn set_locale_code(&mut self, code: &str) -> Result<Locale, UnsupportedLocale> {
        let locale = Locale::from_code(code).ok_or_else(|| UnsupportedLocale(code.to_string()))?;
        self.current = locale;
        Ok(locale)
    }

    /// Translates a dotted key.
    ///
    /// Looks up the active locale's table first, then the Uzbek fallback
    /// table, and finally returns the key itself, so missing copy shows up on
    /// the page instead of taking it down.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.catalog
            .get(self.current, key)
            .or_else(|| self.catalog.get(Locale::Uzbek, key))
            .map_or_else(|| key.to_string(), ToString::to_string)
    }
}

/// Startup locale resolution chain: CLI override, persisted preference,
/// system locale, default. Pure so every step is testable.
fn resolve_locale(cli_lang: Option<&str>, stored: Option<&str>, system: Option<&str>) -> Locale {
    // 1. CLI override (accepts system-style tags like `ru-RU` as a courtesy)
    if let Some(code) = cli_lang {
        if let Some(locale) = Locale::from_code(code).or_else(|| locale_from_system_tag(code)) {
            return locale;
        }
    }

    // 2. Persisted preference, canonical codes only
    if let Some(code) = stored {
        if let Some(locale) = Locale::from_code(code) {
            return locale;
        }
    }

    // 3. System-reported locale
    if let Some(tag) = system {
        if let Some(locale) = locale_from_system_tag(tag) {
            return locale;
        }
    }

    Locale::default()
}

/// Maps a system-reported BCP-47 tag onto a supported locale.
///
/// Matching is by primary language subtag plus script, so `ru-RU` resolves to
/// Russian and `uz-Cyrl-UZ` to Uzbek Cyrillic. Region subtags are ignored.
fn locale_from_system_tag(tag: &str) -> Option<Locale> {
    let identifier: LanguageIdentifier = tag.parse().ok()?;
    match identifier.language.as_str() {
        "uz" => match identifier.script {
            Some(script) if script.as_str() == "Cyrl" => Some(Locale::UzbekCyrillic),
            _ => Some(Locale::Uzbek),
        },
        "ru" => Some(Locale::Russian),
        "en" => Some(Locale::English),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn resolve_prefers_cli_over_everything() {
        let locale = resolve_locale(Some("en"), Some("ru"), Some("uz-Latn-UZ"));
        assert_eq!(locale, Locale::English);
    }

    #[test]
    fn resolve_prefers_stored_over_system() {
        let locale = resolve_locale(None, Some("uz-cyrl"), Some("en-US"));
        assert_eq!(locale, Locale::UzbekCyrillic);
    }

    #[test]
    fn resolve_falls_back_to_system_tag() {
        let locale = resolve_locale(None, None, Some("ru-RU"));
        assert_eq!(locale, Locale::Russian);
    }

    #[test]
    fn resolve_ignores_invalid_stored_code() {
        let locale = resolve_locale(None, Some("klingon"), Some("en-GB"));
        assert_eq!(locale, Locale::English);
    }

    #[test]
    fn resolve_defaults_to_uzbek_latin() {
        assert_eq!(resolve_locale(None, None, None), Locale::Uzbek);
        assert_eq!(resolve_locale(None, None, Some("de-DE")), Locale::Uzbek);
    }

    #[test]
    fn system_tag_matching_uses_script() {
        assert_eq!(
            locale_from_system_tag("uz-Cyrl-UZ"),
            Some(Locale::UzbekCyrillic)
        );
        assert_eq!(locale_from_system_tag("uz-UZ"), Some(Locale::Uzbek));
        assert_eq!(locale_from_system_tag("uz"), Some(Locale::Uzbek));
    }

    #[test]
    fn system_tag_matching_ignores_region() {
        assert_eq!(locale_from_system_tag("en-AU"), Some(Locale::English));
        assert_eq!(locale_from_system_tag("ru-BY"), Some(Locale::Russian));
    }

    #[test]
    fn garbage_system_tag_resolves_to_none() {
        assert_eq!(locale_from_system_tag("not a tag!"), None);
    }

    #[test]
    fn tr_reads_the_active_table() {
        let mut localizer = Localizer::with_locale(Locale::English);
        let english = localizer.tr("nav.home");
        localizer.set_locale(Locale::Russian);
        let russian = localizer.tr("nav.home");
        assert_ne!(english, russian);
    }

    #[test]
    fn tr_is_idempotent_under_unchanged_state() {
        let localizer = Localizer::with_locale(Locale::Russian);
        assert_eq!(localizer.tr("hero.title1"), localizer.tr("hero.title1"));
    }

    #[test]
    fn tr_returns_missing_keys_verbatim() {
        let localizer = Localizer::with_locale(Locale::English);
        assert_eq!(localizer.tr("no.such.key"), "no.such.key");
    }

    #[test]
    fn tr_falls_back_to_the_uzbek_table() {
        // A key present only in uz must surface its uz value under every
        // active locale.
        for locale in Locale::ALL {
            let mut tables: HashMap<Locale, HashMap<String, String>> = Locale::ALL
                .into_iter()
                .map(|l| (l, HashMap::new()))
                .collect();
            tables
                .get_mut(&Locale::Uzbek)
                .expect("uz table")
                .insert("only.in.uzbek".to_string(), "qiymat".to_string());
            let localizer = Localizer {
                catalog: Catalog::from_tables(tables),
                current: locale,
            };
            assert_eq!(localizer.tr("only.in.uzbek"), "qiymat");
        }
    }

    #[test]
    fn set_locale_code_accepts_all_supported_codes() {
        let mut localizer = Localizer::default();
        for locale in Locale::ALL {
            assert_eq!(localizer.set_locale_code(locale.code()), Ok(locale));
            assert_eq!(localizer.locale(), locale);
        }
    }

    #[test]
    fn set_locale_code_rejects_unknown_codes_without_mutating() {
        let mut localizer = Localizer::with_locale(Locale::Russian);
        let err = localizer.set_locale_code("xx").unwrap_err();
        assert_eq!(err, UnsupportedLocale("xx".to_string()));
        assert_eq!(localizer.locale(), Locale::Russian);
    }
}
