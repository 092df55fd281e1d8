// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for colors, spacing, and sizing.
//!
//! Tokens are designed to be consistent; maintain the ratios (e.g. `MD`
//! equals `XS * 2`) when modifying them.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.06, 0.06, 0.07);
    pub const GRAY_700: Color = Color::from_rgb(0.24, 0.24, 0.27);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.45);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Control-bar overlay background.
    pub const OVERLAY_STRONG: f32 = 0.8;
    /// Hovered overlay buttons.
    pub const OVERLAY_HOVER: f32 = 0.35;
    /// Resting overlay buttons.
    pub const OVERLAY_NORMAL: f32 = 0.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Icon size inside control buttons.
    pub const ICON_SM: f32 = 16.0;
    /// Transport button height.
    pub const BUTTON_HEIGHT: f32 = 28.0;
    /// Height of the clickable progress track.
    pub const PROGRESS_TRACK_HEIGHT: f32 = 6.0;
    /// Time readout font size.
    pub const TEXT_SM: f32 = 12.0;
    /// Title font size.
    pub const TEXT_XL: f32 = 24.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
}
