// SPDX-License-Identifier: MPL-2.0
//! `assistantdrive-landing` is the single-page landing experience for the
//! AssistantDrive mobile driving assistant, built with the Iced GUI framework.
//!
//! It renders the marketing page (hero, features, how-it-works, demo,
//! privacy, download, footer) with client-side language switching across
//! four locales and scroll-based navigation highlighting, and demonstrates
//! dotted-key internationalization, preference persistence, and port-based
//! capability injection.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
