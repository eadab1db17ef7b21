//! Colors - Widget Theme Colors

use gpui::{rgb, Rgba};

/// Color palette - All colors are accessed via associated functions
pub struct ChallengeColors;

impl ChallengeColors {
    /// Header background - Cyan/Teal
    pub fn header_bg() -> Rgba { rgb(0x2cb3b8) }
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Counter display well background
    pub fn well_bg() -> Rgba { rgb(0xf5f5f5) }
    /// Counter display well border
    pub fn well_border() -> Rgba { rgb(0xe3e3e3) }

    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    /// Toggle text once latched
    pub fn success() -> Rgba { rgb(0x22c55e) }

    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x337ab7) }
    /// Primary button hover background
    pub fn button_primary_hover() -> Rgba { rgb(0x286090) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary button hover background
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
}
