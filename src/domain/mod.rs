// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains the pure types the rest of the application is built
//! around. It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`locale`]: Supported display languages ([`Locale`](locale::Locale),
//!   [`UnsupportedLocale`](locale::UnsupportedLocale))
//! - [`section`]: Page anchor regions ([`Section`](section::Section),
//!   [`SectionBounds`](section::SectionBounds))

pub mod locale;
pub mod section;
