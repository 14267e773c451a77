// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the landing page.
//!
//! The palette mirrors the site's dark slate-and-cyan scheme. Spacing follows
//! an 8px grid; typography is a small fixed scale.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    // Dark surfaces (slate scale)
    pub const SLATE_950: Color = Color::from_rgb(0.008, 0.024, 0.090);
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);

    // Muted text (gray scale)
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);

    // Accents
    pub const CYAN_400: Color = Color::from_rgb(0.133, 0.827, 0.933);
    pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const EMERALD_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Barely-there tint for hover states.
    pub const TINT_FAINT: f32 = 0.05;
    /// Tint behind the active navigation item.
    pub const TINT_SOFT: f32 = 0.10;
    /// Subtle borders on cards and panels.
    pub const BORDER_SUBTLE: f32 = 0.20;
    /// Near-opaque navbar backdrop over scrolling content.
    pub const BACKDROP: f32 = 0.92;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 13.0;
    pub const SMALL: f32 = 14.0;
    pub const BODY: f32 = 16.0;
    pub const LEAD: f32 = 20.0;
    pub const H3: f32 = 22.0;
    pub const H2: f32 = 34.0;
    pub const HERO: f32 = 52.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 16.0;
}

/// A color with its alpha replaced, for tints and translucent backdrops.
#[must_use]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

// Compile-time assertions to validate the scales.
const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);
    assert!(spacing::XL < spacing::XXL);
    assert!(typography::CAPTION < typography::BODY);
    assert!(typography::H2 < typography::HERO);
    assert!(opacity::TINT_FAINT < opacity::TINT_SOFT);
    assert!(opacity::BORDER_SUBTLE < opacity::BACKDROP);
};
