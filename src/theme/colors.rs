//! Colors - Counter Starter Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Color palette - All colors are accessed via associated functions
pub struct UiColors;

impl UiColors {
    // Primary colors
    /// Header background - Near black
    pub fn header_bg() -> Rgba { rgb(0x1a1a1a) }
    /// Primary accent - Indigo (for main buttons and the logo block)
    pub fn accent() -> Rgba { rgb(0x646cff) }
    /// Accent hover - Lighter indigo
    pub fn accent_hover() -> Rgba { rgb(0x747bff) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0x242424) }
    /// Card / content area background
    pub fn card_bg() -> Rgba { rgb(0x2f2f2f) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgba(0xffffffde) }
    /// Secondary text (hints)
    pub fn text_secondary() -> Rgba { rgb(0x888888) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xf5f5f5) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0x3c3c3c) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x646cff) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0x1a1a1a) }
    /// Secondary button text
    pub fn button_secondary_text() -> Rgba { rgba(0xffffffde) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x888888) }
}
