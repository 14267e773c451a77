// SPDX-License-Identifier: MPL-2.0
//! Read-model state derived from host-environment input.

pub mod section_tracker;

pub use section_tracker::{SectionTracker, SCROLL_BIAS};
