// SPDX-License-Identifier: MPL-2.0
//! Fixed section heights and the derived page geometry.
//!
//! The page renders every section at a fixed design height, so the vertical
//! extent of each anchor region is known without measuring widgets. The
//! privacy block sits between the demo and download sections but carries no
//! anchor of its own, which leaves a real gap in the tracked ranges - the
//! scroll tracker's retention rule covers it.

use crate::application::port::layout::SectionLayout;
use crate::domain::section::{Section, SectionBounds};

/// Height of the fixed navigation bar overlaying the page.
pub const NAV_HEIGHT: f32 = 64.0;

pub const HERO_HEIGHT: f32 = 780.0;
pub const FEATURES_HEIGHT: f32 = 900.0;
pub const HOW_IT_WORKS_HEIGHT: f32 = 620.0;
pub const DEMO_HEIGHT: f32 = 720.0;
pub const PRIVACY_HEIGHT: f32 = 640.0;
pub const DOWNLOAD_HEIGHT: f32 = 600.0;
pub const FOOTER_HEIGHT: f32 = 460.0;

/// The page's vertical blocks in render order. `None` marks blocks without an
/// anchor (the privacy block); the footer carries the `contact` anchor.
const BLOCKS: [(Option<Section>, f32); 7] = [
    (Some(Section::Home), HERO_HEIGHT),
    (Some(Section::Features), FEATURES_HEIGHT),
    (Some(Section::HowItWorks), HOW_IT_WORKS_HEIGHT),
    (Some(Section::Demo), DEMO_HEIGHT),
    (None, PRIVACY_HEIGHT),
    (Some(Section::Download), DOWNLOAD_HEIGHT),
    (Some(Section::Contact), FOOTER_HEIGHT),
];

/// Scroll-space bounds of every anchored section, derived from the fixed
/// block heights.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    entries: Vec<(Section, SectionBounds)>,
}

impl PageGeometry {
    #[must_use]
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(Section::ALL.len());
        let mut top = 0.0;
        for (section, height) in BLOCKS {
            if let Some(section) = section {
                entries.push((section, SectionBounds::new(top, height)));
            }
            top += height;
        }
        Self { entries }
    }

    /// Total scrollable height of the page.
    #[must_use]
    pub fn page_height(&self) -> f32 {
        BLOCKS.iter().map(|(_, height)| height).sum()
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionLayout for PageGeometry {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, bounds)| *bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_bounds() {
        let geometry = PageGeometry::new();
        for section in Section::ALL {
            assert!(geometry.bounds(section).is_some(), "no bounds for {section}");
        }
    }

    #[test]
    fn home_starts_at_the_top() {
        let geometry = PageGeometry::new();
        let home = geometry.bounds(Section::Home).expect("home bounds");
        assert!((home.top - 0.0).abs() < f32::EPSILON);
        assert!((home.height - HERO_HEIGHT).abs() < f32::EPSILON);
    }

    #[test]
    fn sections_stack_without_overlap() {
        let geometry = PageGeometry::new();
        let mut previous_bottom = 0.0;
        for section in Section::ALL {
            let bounds = geometry.bounds(section).expect("bounds");
            assert!(
                bounds.top >= previous_bottom,
                "{section} starts above the previous section's bottom"
            );
            previous_bottom = bounds.bottom();
        }
    }

    #[test]
    fn privacy_block_leaves_a_gap_between_demo_and_download() {
        let geometry = PageGeometry::new();
        let demo = geometry.bounds(Section::Demo).expect("demo bounds");
        let download = geometry.bounds(Section::Download).expect("download bounds");
        assert!((download.top - demo.bottom() - PRIVACY_HEIGHT).abs() < f32::EPSILON);
    }

    #[test]
    fn footer_carries_the_contact_anchor() {
        let geometry = PageGeometry::new();
        let contact = geometry.bounds(Section::Contact).expect("contact bounds");
        assert!((contact.bottom() - geometry.page_height()).abs() < f32::EPSILON);
        assert!((contact.height - FOOTER_HEIGHT).abs() < f32::EPSILON);
    }
}
