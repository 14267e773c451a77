// SPDX-License-Identifier: MPL-2.0
//! Embedded translation catalogs.
//!
//! Each supported locale ships one TOML document under `assets/i18n/`, named
//! after its canonical code (`uz.toml`, `uz-cyrl.toml`, ...). The documents
//! use nested tables for readability; at load time they are flattened to the
//! dotted keys the rest of the application looks up (`[hero]` / `title1`
//! becomes `hero.title1`). Catalogs are loaded once at startup and never
//! mutated afterwards.

use crate::domain::locale::Locale;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Immutable set of per-locale string tables.
pub struct Catalog {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    /// Loads the catalogs embedded in the binary.
    ///
    /// # Panics
    ///
    /// Panics if an embedded catalog is missing or malformed. The catalog
    /// files are build-time constants, so this can only happen on a broken
    /// build.
    #[must_use]
    pub fn load() -> Self {
        let mut tables = HashMap::new();
        for locale in Locale::ALL {
            let filename = format!("{}.toml", locale.code());
            let content = Asset::get(&filename)
                .unwrap_or_else(|| panic!("missing embedded catalog: {filename}"));
            let document: toml::Table =
                toml::from_str(&String::from_utf8_lossy(content.data.as_ref()))
                    .unwrap_or_else(|err| panic!("invalid catalog {filename}: {err}"));
            let mut table = HashMap::new();
            flatten_into(&document, "", &mut table);
            tables.insert(locale, table);
        }
        Self { tables }
    }

    /// Looks up a dotted key in one locale's table. No fallback.
    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Builds a catalog from explicit tables, for fallback tests.
    #[cfg(test)]
    pub(crate) fn from_tables(tables: HashMap<Locale, HashMap<String, String>>) -> Self {
        Self { tables }
    }

    /// All keys of one locale's table, for authoring guards in tests.
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.tables
            .get(&locale)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }
}

/// Walks a TOML table depth-first, joining nested table names with dots.
fn flatten_into(table: &toml::Table, prefix: &str, out: &mut HashMap<String, String>) {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(text) => {
                out.insert(key, text.clone());
            }
            toml::Value::Table(nested) => flatten_into(nested, &key, out),
            // Catalogs hold display strings only; other value types are
            // authoring mistakes and are skipped.
            _ => {}
        }
    }
}
