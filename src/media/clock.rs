// SPDX-License-Identifier: MPL-2.0
//! Wall-clock playback surface.
//!
//! [`ClockSurface`] simulates a native media element without decoding
//! anything: while playing, the position advances with real time between
//! ticks. It reproduces the semantics the widget relies on:
//!
//! - metadata (duration) is delivered on the first tick after `load`, not
//!   synchronously, so the widget's metadata-loaded path stays exercised
//! - seek targets are clamped to `[0, duration]` once the duration is known
//! - reaching the end of media pauses the surface, which the widget picks
//!   up through reconciliation instead of leaving its playing flag stuck

use super::surface::{MediaSource, MediaSurface};
use crate::error::MediaError;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct ClockSurface {
    /// Known duration, populated when metadata is delivered.
    duration: Option<f64>,
    /// Duration staged by `load`, delivered on the next tick.
    pending_duration: Option<f64>,
    position: f64,
    playing: bool,
    /// Baseline for integrating elapsed time. Cleared on pause/seek so the
    /// next tick re-establishes it instead of counting paused time.
    last_tick: Option<Instant>,
}

impl ClockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn at_end(&self) -> bool {
        match self.duration {
            Some(d) => self.position >= d,
            None => false,
        }
    }
}

impl MediaSurface for ClockSurface {
    fn load(&mut self, source: &MediaSource) -> Result<(), MediaError> {
        if source.locator.trim().is_empty() {
            return Err(MediaError::InvalidSource);
        }

        self.position = 0.0;
        self.playing = false;
        self.duration = None;
        self.last_tick = None;
        self.pending_duration = source.duration_hint_secs.filter(|d| d.is_finite() && *d >= 0.0);
        Ok(())
    }

    fn play(&mut self) {
        // Starting over from the end mirrors how desktop players resume.
        if self.at_end() {
            self.position = 0.0;
        }
        self.playing = true;
        self.last_tick = None;
    }

    fn pause(&mut self) {
        self.playing = false;
        self.last_tick = None;
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }

    fn position_secs(&self) -> f64 {
        self.position
    }

    fn set_position_secs(&mut self, secs: f64) {
        if !secs.is_finite() {
            return;
        }
        let clamped = match self.duration {
            Some(d) => secs.clamp(0.0, d),
            None => secs.max(0.0),
        };
        self.position = clamped;
        self.last_tick = None;
    }

    fn duration_secs(&self) -> Option<f64> {
        self.duration
    }

    fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.pending_duration.take() {
            self.duration = Some(pending);
        }

        if !self.playing {
            return;
        }

        if let Some(last) = self.last_tick {
            let elapsed = now.saturating_duration_since(last).as_secs_f64();
            self.position += elapsed;
        }
        self.last_tick = Some(now);

        if let Some(d) = self.duration {
            if self.position >= d {
                self.position = d;
                self.playing = false;
                self.last_tick = None;
            }
        }
    }
}
