// SPDX-License-Identifier: MPL-2.0
//! Media surface port definition.
//!
//! This module defines the [`MediaSurface`] trait, the narrow capability
//! interface the player widget needs from a playback backend: exactly
//! {load, play, pause, query paused, query/set position, query duration}.
//!
//! # Design Notes
//!
//! - The surface is **stateful** - it maintains the current playback position
//! - Methods are not `async` - play/pause requests are fire-and-forget from
//!   the widget's perspective and reconciled on the next tick
//! - Fullscreen is deliberately absent: it belongs to the window that hosts
//!   the widget, not to the media backend

use crate::error::MediaError;
use std::fmt;
use std::time::Instant;

/// A media source locator plus the pass-through attributes the widget does
/// not interpret itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    /// Location of the media (file path or URL). Passed through unmodified.
    pub locator: String,

    /// Duration the backend should report once metadata is available, for
    /// backends that cannot probe it themselves (the clock surface).
    /// Backends with real demuxing ignore this.
    pub duration_hint_secs: Option<f64>,
}

impl MediaSource {
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            duration_hint_secs: None,
        }
    }

    #[must_use]
    pub fn with_duration_hint(mut self, secs: f64) -> Self {
        self.duration_hint_secs = Some(secs);
        self
    }
}

/// Port for media playback backends.
///
/// Implementations maintain internal state (position, paused flag, known
/// duration). The widget treats the surface as the source of truth and keeps
/// only best-effort mirrors of it, resynchronized on every tick.
///
/// # Lifecycle
///
/// 1. Create the surface
/// 2. Call `load()` with a source
/// 3. Drive it with `tick()` at UI tick frequency
/// 4. Control it with `play()` / `pause()` / `set_position_secs()`
pub trait MediaSurface: fmt::Debug {
    /// Opens a media source.
    ///
    /// Resets position to the beginning and forgets any previous duration.
    /// Duration becomes observable via [`MediaSurface::duration_secs`] once
    /// metadata is available, which may be later than `load` returns.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] if the source cannot be accepted.
    fn load(&mut self, source: &MediaSource) -> Result<(), MediaError>;

    /// Requests playback to start or resume. Fire-and-forget; the surface
    /// may refuse, which the caller observes through `is_paused()` later.
    fn play(&mut self);

    /// Requests playback to pause. Fire-and-forget, like `play`.
    fn pause(&mut self);

    /// Returns true when the surface is not advancing.
    fn is_paused(&self) -> bool;

    /// Current playback position in seconds.
    fn position_secs(&self) -> f64;

    /// Moves the playhead. Out-of-range or non-finite targets are resolved
    /// by the surface (typically clamped), never by the caller.
    fn set_position_secs(&mut self, secs: f64);

    /// Total duration in seconds, or `None` until metadata is known.
    fn duration_secs(&self) -> Option<f64>;

    /// Advances surface-internal time. Called at UI tick frequency; surfaces
    /// driven by their own threads can ignore it.
    fn tick(&mut self, _now: Instant) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaSurface) {}

    #[derive(Debug, Default)]
    struct MockSurface {
        position: f64,
        paused: bool,
        duration: Option<f64>,
    }

    impl MediaSurface for MockSurface {
        fn load(&mut self, source: &MediaSource) -> Result<(), MediaError> {
            if source.locator.is_empty() {
                return Err(MediaError::InvalidSource);
            }
            self.position = 0.0;
            self.paused = true;
            self.duration = source.duration_hint_secs;
            Ok(())
        }

        fn play(&mut self) {
            self.paused = false;
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn position_secs(&self) -> f64 {
            self.position
        }

        fn set_position_secs(&mut self, secs: f64) {
            self.position = secs.max(0.0);
        }

        fn duration_secs(&self) -> Option<f64> {
            self.duration
        }
    }

    #[test]
    fn mock_surface_lifecycle() {
        let mut surface = MockSurface::default();

        let source = MediaSource::new("clip.mp4").with_duration_hint(12.0);
        surface.load(&source).unwrap();
        assert!(surface.is_paused());
        assert_eq!(surface.duration_secs(), Some(12.0));

        surface.play();
        assert!(!surface.is_paused());

        surface.set_position_secs(4.5);
        assert_eq!(surface.position_secs(), 4.5);

        surface.pause();
        assert!(surface.is_paused());
    }

    #[test]
    fn load_rejects_empty_locator() {
        let mut surface = MockSurface::default();
        let err = surface.load(&MediaSource::new("")).unwrap_err();
        assert_eq!(err, MediaError::InvalidSource);
    }

    #[test]
    fn media_source_builder_sets_hint() {
        let source = MediaSource::new("clip.mp4").with_duration_hint(60.0);
        assert_eq!(source.locator, "clip.mp4");
        assert_eq!(source.duration_hint_secs, Some(60.0));
    }
}
