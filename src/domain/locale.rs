// SPDX-License-Identifier: MPL-2.0
//! Supported display languages.
//!
//! The landing page ships in exactly four languages. Modeling them as an enum
//! makes an invalid active language unrepresentable: validation happens once,
//! at the string boundary ([`Locale::from_code`]), and everything downstream
//! works with the closed set.

use std::fmt;

/// One of the four supported display languages.
///
/// `Uzbek` (Latin script) is the default and the fallback source for
/// translations missing from the other catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Uzbek,
    UzbekCyrillic,
    Russian,
    English,
}

impl Locale {
    /// All supported locales, in language-menu order.
    pub const ALL: [Locale; 4] = [
        Locale::Uzbek,
        Locale::UzbekCyrillic,
        Locale::Russian,
        Locale::English,
    ];

    /// Canonical locale code, used for storage and catalog file names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Uzbek => "uz",
            Locale::UzbekCyrillic => "uz-cyrl",
            Locale::Russian => "ru",
            Locale::English => "en",
        }
    }

    /// Name of the language in the language itself, for the language menu.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Uzbek => "O'zbekcha",
            Locale::UzbekCyrillic => "Ўзбекча",
            Locale::Russian => "Русский",
            Locale::English => "English",
        }
    }

    /// BCP-47 tag handed to the speech synthesizer for the voice demo.
    ///
    /// Both Uzbek scripts share the `uz-UZ` voice.
    #[must_use]
    pub fn speech_tag(self) -> &'static str {
        match self {
            Locale::Uzbek | Locale::UzbekCyrillic => "uz-UZ",
            Locale::Russian => "ru-RU",
            Locale::English => "en-US",
        }
    }

    /// Parses a canonical locale code, case-insensitively.
    ///
    /// This is the strict validation used for persisted preferences and
    /// language-change requests. Anything outside the four canonical codes is
    /// rejected; lenient matching of system tags lives in the i18n layer.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A language-change request named a code outside the supported set.
///
/// The request is a no-op; the active locale is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl fmt::Display for UnsupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale code: {}", self.0)
    }
}

impl std::error::Error for UnsupportedLocale {}
