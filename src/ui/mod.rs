// SPDX-License-Identifier: MPL-2.0
//! User interface components for the player widget.
//!
//! This module follows a component-based architecture with the Elm-style
//! "state down, messages up" pattern: the control bar renders a snapshot of
//! playback state and emits intents, never holding state of its own.
//!
//! - [`control_bar`] - Transport buttons, progress track, time readout
//! - [`progress`] - Clickable progress track widget (Canvas based)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering

pub mod control_bar;
pub mod design_tokens;
pub mod icons;
pub mod progress;
pub mod styles;
