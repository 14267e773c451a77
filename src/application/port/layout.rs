// SPDX-License-Identifier: MPL-2.0
//! Section geometry port for scroll tracking.

use crate::domain::section::{Section, SectionBounds};

/// Supplies the vertical extent of each page section.
///
/// `None` means the section has no measurable position yet (for example, it
/// has not been laid out). The scroll tracker skips such sections for the
/// current tick and retries on the next one; it is not an error.
pub trait SectionLayout {
    /// The bounds of `section` in scroll-space pixels, if known.
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}
