// SPDX-License-Identifier: MPL-2.0
//! Page anchor regions of the single-page layout.
//!
//! The declared order of [`Section::ALL`] matches the vertical layout order of
//! the page; the scroll tracker scans it front to back and lets the first
//! match win, so overlapping ranges always resolve to the earlier section.

use std::fmt;

/// A named anchor region of the page, in vertical layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Features,
    HowItWorks,
    Demo,
    Download,
    Contact,
}

impl Section {
    /// Every section, in vertical layout order. The scan order of the
    /// scroll tracker.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Features,
        Section::HowItWorks,
        Section::Demo,
        Section::Download,
        Section::Contact,
    ];

    /// Sections with a navigation-bar entry. `Contact` is reachable only by
    /// scrolling (the footer carries its anchor).
    pub const NAV: [Section; 5] = [
        Section::Home,
        Section::Features,
        Section::HowItWorks,
        Section::Demo,
        Section::Download,
    ];

    /// Anchor identifier of the section.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::HowItWorks => "how-it-works",
            Section::Demo => "demo",
            Section::Download => "download",
            Section::Contact => "contact",
        }
    }

    /// Translation key of the navigation label for this section.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::Features => "nav.features",
            Section::HowItWorks => "nav.howItWorks",
            Section::Demo => "nav.demo",
            Section::Download => "nav.download",
            Section::Contact => "nav.contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Vertical extent of a section in scroll-space pixels.
///
/// Containment is half-open: a position exactly at `top + height` belongs to
/// the next section, never to two sections at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Whether a scroll-space position falls inside `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, position: f32) -> bool {
        position >= self.top && position < self.top + self.height
    }

    /// Position just past the last pixel of the section.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_order_matches_layout_order() {
        assert_eq!(Section::ALL[0], Section::Home);
        assert_eq!(Section::ALL[5], Section::Contact);
    }

    #[test]
    fn nav_sections_exclude_contact() {
        assert!(!Section::NAV.contains(&Section::Contact));
        assert_eq!(Section::NAV.len(), Section::ALL.len() - 1);
    }

    #[test]
    fn anchors_are_unique() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.anchor(), b.anchor());
            }
        }
    }

    #[test]
    fn bounds_containment_is_half_open() {
        let bounds = SectionBounds::new(800.0, 600.0);
        assert!(!bounds.contains(799.9));
        assert!(bounds.contains(800.0));
        assert!(bounds.contains(1399.9));
        assert!(!bounds.contains(1400.0));
    }

    #[test]
    fn bottom_is_top_plus_height() {
        let bounds = SectionBounds::new(100.0, 50.0);
        assert!((bounds.bottom() - 150.0).abs() < f32::EPSILON);
    }

    #[test]
    fn display_matches_anchor() {
        assert_eq!(Section::HowItWorks.to_string(), "how-it-works");
    }
}
