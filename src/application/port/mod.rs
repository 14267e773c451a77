// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters
//! implement. These traits use only domain types, ensuring the application
//! layer remains independent of concrete implementations. They are the Rust
//! face of the host-environment capabilities a browser page would get for
//! free: durable key-value storage, speech synthesis, and section geometry.
//!
//! # Available Ports
//!
//! - [`preferences`]: Durable storage for the language preference
//! - [`speech`]: Speech synthesis for the voice-alert demo
//! - [`layout`]: Section geometry lookup for scroll tracking
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no process types)
//! - Methods return `Result` with per-port error types
//! - No `async fn` - blocking adapters are wrapped in tasks by the caller

pub mod layout;
pub mod preferences;
pub mod speech;

// Re-export main types for convenience
pub use layout::SectionLayout;
pub use preferences::{PreferenceStore, StoreError};
pub use speech::{SpeechError, SpeechSynthesizer};
