// SPDX-License-Identifier: MPL-2.0
//! Scroll-position tracking for navigation highlighting.
//!
//! The tracker is the single source of truth for which page section counts as
//! "in view". It keeps no transition table: every scroll tick recomputes the
//! active section from scratch, so the result is the same whether the user
//! scrolled there pixel by pixel or jumped in one step.

use crate::application::port::layout::SectionLayout;
use crate::domain::section::Section;

/// How far a section's top must pass above the viewport top before the
/// section counts as entered, in pixels.
pub const SCROLL_BIAS: f32 = 100.0;

/// Computes the currently active [`Section`] from vertical scroll offsets.
///
/// Sections are scanned in declared order and the first whose bounds contain
/// the biased scroll position wins. When no section matches - above the first
/// section, below the last, or inside a gap between tracked sections - the
/// previously active section is retained; the tracker never clears to "none".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTracker {
    active: Section,
}

impl SectionTracker {
    /// Creates a tracker with the topmost section active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Section::Home,
        }
    }

    /// The section currently considered in view.
    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    /// Feeds one scroll tick and returns the (possibly unchanged) active
    /// section.
    ///
    /// `scroll_top` is the vertical scroll offset of the page. Sections whose
    /// layout is unavailable are skipped for this tick and reconsidered on
    /// the next one.
    pub fn observe(&mut self, scroll_top: f32, layout: &dyn SectionLayout) -> Section {
        let probe = scroll_top + SCROLL_BIAS;
        for section in Section::ALL {
            let Some(bounds) = layout.bounds(section) else {
                continue;
            };
            if bounds.contains(probe) {
                self.active = section;
                break;
            }
        }
        self.active
    }

    /// Marks a section active directly, used when a navigation click snaps
    /// the page to it. The following scroll ticks take over from there.
    pub fn select(&mut self, section: Section) {
        self.active = section;
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
