// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::control_bar;
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A control bar interaction.
    ControlBar(control_bar::Message),

    /// Periodic playback tick; drives the surface clock and the mirrors.
    Tick(Instant),

    /// A window was opened or resized; records the id and re-queries the
    /// actual window mode so the fullscreen mirror tracks external changes.
    WindowObserved(window::Id),

    /// Result of a window-mode query; the only path that writes the
    /// fullscreen mirror.
    FullscreenModeFetched(window::Mode),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,

    /// Media source locator; falls back to the config, then the default.
    pub source: Option<String>,

    /// Duration reported by the clock surface for this source, in seconds.
    pub duration_hint: Option<f64>,
}
