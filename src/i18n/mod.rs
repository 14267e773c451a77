// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the landing page.
//!
//! This module owns the active display language and the translation catalogs.
//! It handles language detection, embedded catalog loading, and dotted-key
//! string lookup.
//!
//! # Features
//!
//! - Startup locale resolution from CLI, persisted preference, or system locale
//! - Embedded per-locale TOML catalogs, flattened to dotted keys
//! - Runtime language switching
//! - Fallback to the Uzbek (Latin) catalog, then to the key itself, when a
//!   translation is missing

pub mod catalog;
pub mod localizer;

pub use catalog::Catalog;
pub use localizer::Localizer;
