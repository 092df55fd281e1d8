// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time and handles are cached using
//! `OnceLock`, so repeated view calls reuse the same handle.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `expand` not `enter_fullscreen`).

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $data:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = $data;
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Transport Icons
// =============================================================================

define_icon!(
    play,
    br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><polygon points="7,4 20,12 7,20" fill="#ffffff"/></svg>"##,
    "Play icon: triangle pointing right."
);

define_icon!(
    pause,
    br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><rect x="6" y="4" width="4" height="16" fill="#ffffff"/><rect x="14" y="4" width="4" height="16" fill="#ffffff"/></svg>"##,
    "Pause icon: two vertical bars."
);

define_icon!(
    skip_back,
    br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><rect x="5" y="5" width="2" height="14" fill="#ffffff"/><polygon points="19,5 9,12 19,19" fill="#ffffff"/></svg>"##,
    "Skip-back icon: bar with triangle pointing left."
);

define_icon!(
    skip_forward,
    br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><polygon points="5,5 15,12 5,19" fill="#ffffff"/><rect x="17" y="5" width="2" height="14" fill="#ffffff"/></svg>"##,
    "Skip-forward icon: triangle pointing right with bar."
);

// =============================================================================
// Fullscreen Icons
// =============================================================================

define_icon!(
    expand,
    br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M4 9V4h5M20 9V4h-5M4 15v5h5M20 15v5h-5" fill="none" stroke="#ffffff" stroke-width="2" stroke-linecap="round"/></svg>"##,
    "Expand icon: four outward corner brackets."
);

define_icon!(
    minimize,
    br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M9 4v5H4M15 4v5h5M9 20v-5H4M15 20v-5h5" fill="none" stroke="#ffffff" stroke-width="2" stroke-linecap="round"/></svg>"##,
    "Minimize icon: four inward corner brackets."
);

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}
