// SPDX-License-Identifier: MPL-2.0
//! UI layer - the Iced views composing the landing page.
//!
//! # Modules
//!
//! - [`design_tokens`]: Palette, spacing, typography, and radius scales
//! - [`layout`]: Fixed section heights and the derived page geometry
//! - [`navbar`]: Fixed navigation bar with section highlight and language menu
//! - [`sections`]: One view per page section, hero through footer

pub mod design_tokens;
pub mod layout;
pub mod navbar;
pub mod sections;
