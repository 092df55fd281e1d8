// SPDX-License-Identifier: MPL-2.0
//! Player container: the only owner of mutable playback UI state.
//!
//! The container bridges the declarative control bar and the imperative
//! [`MediaSurface`]. Control-bar intents become surface calls; surface state
//! flows back through [`Player::handle_tick`], which resynchronizes the
//! local mirrors. The playing flag is flipped optimistically on toggle and
//! reconciled against the surface on every tick, so a refused play request
//! or an externally triggered pause (including end of media) corrects the
//! mirror instead of leaving it stuck.
//!
//! The fullscreen flag is never written by the toggle itself. Toggling only
//! emits an [`Effect`]; the flag follows the actual window mode reported by
//! the observer, so exits triggered outside the widget stay consistent.

pub mod time_format;

use crate::error::MediaError;
use crate::media::{MediaSource, MediaSurface};
use std::time::Instant;

/// Side effects the container asks its host to perform.
///
/// The container cannot change the window mode itself; the application layer
/// maps this to the windowing task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Request the host window to enter (`true`) or leave (`false`)
    /// fullscreen. The `is_fullscreen` mirror is not touched here.
    SetFullscreen(bool),
}

/// Snapshot of playback state handed to the control bar for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackView {
    pub is_playing: bool,
    pub position_secs: f64,
    /// 0.0 until metadata is known; the control bar guards the division.
    pub duration_secs: f64,
    pub is_fullscreen: bool,
}

/// Player container state.
#[derive(Debug)]
pub struct Player {
    surface: Option<Box<dyn MediaSurface>>,
    /// Best-effort mirror of the surface's paused flag.
    is_playing: bool,
    /// Mirror of the surface position, copied on every tick.
    position_secs: f64,
    /// Mirror of the surface duration; `None` until metadata arrives.
    duration_secs: Option<f64>,
    /// Mirror of the actual window mode, written only by
    /// [`Player::set_fullscreen_state`].
    is_fullscreen: bool,
    /// Skip increment in seconds, fixed at construction.
    skip_secs: f64,
}

impl Player {
    pub fn new(skip_secs: f64) -> Self {
        Self {
            surface: None,
            is_playing: false,
            position_secs: 0.0,
            duration_secs: None,
            is_fullscreen: false,
            skip_secs,
        }
    }

    /// Attaches a surface and loads a source into it.
    ///
    /// All mirrors reset; duration stays unknown until the surface reports
    /// metadata on a later tick.
    pub fn load(
        &mut self,
        mut surface: Box<dyn MediaSurface>,
        source: &MediaSource,
    ) -> Result<(), MediaError> {
        surface.load(source)?;
        self.surface = Some(surface);
        self.is_playing = false;
        self.position_secs = 0.0;
        self.duration_secs = None;
        Ok(())
    }

    /// True once a surface is attached; the tick subscription runs only then.
    pub fn is_loaded(&self) -> bool {
        self.surface.is_some()
    }

    pub fn skip_secs(&self) -> f64 {
        self.skip_secs
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Snapshot for the control bar.
    pub fn view_state(&self) -> PlaybackView {
        PlaybackView {
            is_playing: self.is_playing,
            position_secs: self.position_secs,
            duration_secs: self.duration_secs.unwrap_or(0.0),
            is_fullscreen: self.is_fullscreen,
        }
    }

    /// Toggles play/pause based on the surface's own paused flag, then flips
    /// the local mirror optimistically. Silent no-op without a surface.
    pub fn toggle_play(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        if surface.is_paused() {
            surface.play();
        } else {
            surface.pause();
        }

        self.is_playing = !self.is_playing;
    }

    /// Moves the playhead forward by the fixed skip increment. No clamping
    /// here; out-of-range targets are the surface's problem.
    pub fn skip_forward(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let target = surface.position_secs() + self.skip_secs;
        surface.set_position_secs(target);
        self.position_secs = surface.position_secs();
    }

    /// Moves the playhead backward by the fixed skip increment.
    pub fn skip_back(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let target = surface.position_secs() - self.skip_secs;
        surface.set_position_secs(target);
        self.position_secs = surface.position_secs();
    }

    /// Seeks to a fraction of the duration, as reported by the progress
    /// track. Guarded no-op while the duration is unknown, zero, or
    /// non-finite, so a click on an empty track cannot produce a NaN seek.
    ///
    /// The position mirror is updated immediately instead of waiting for the
    /// next tick, so the fill does not snap back for a frame.
    pub fn seek_to_ratio(&mut self, ratio: f32) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let Some(duration) = self.duration_secs else {
            return;
        };
        if !duration.is_finite() || duration <= 0.0 || !ratio.is_finite() {
            return;
        }

        let target = f64::from(ratio.clamp(0.0, 1.0)) * duration;
        surface.set_position_secs(target);
        self.position_secs = surface.position_secs();
    }

    /// Runs at tick frequency: drives the surface clock, picks up metadata,
    /// and resynchronizes the position and playing mirrors. Must stay cheap.
    pub fn handle_tick(&mut self, now: Instant) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        surface.tick(now);

        if self.duration_secs.is_none() {
            self.duration_secs = surface.duration_secs();
        }

        self.position_secs = surface.position_secs();
        self.is_playing = !surface.is_paused();
    }

    /// Requests the opposite of the current fullscreen mirror. Does not
    /// mutate the mirror; only the mode observer does that.
    pub fn toggle_fullscreen(&self) -> Effect {
        Effect::SetFullscreen(!self.is_fullscreen)
    }

    /// Sole writer of the fullscreen mirror, fed by the window-mode
    /// observer so the flag reflects actual state, not requested state.
    pub fn set_fullscreen_state(&mut self, fullscreen: bool) {
        self.is_fullscreen = fullscreen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ClockSurface;
    use std::time::Duration;

    fn loaded_player(duration: f64) -> (Player, Instant) {
        let mut player = Player::new(5.0);
        let source = MediaSource::new("clip.mp4").with_duration_hint(duration);
        player.load(Box::new(ClockSurface::new()), &source).unwrap();
        let t0 = Instant::now();
        player.handle_tick(t0); // metadata arrives
        (player, t0)
    }

    #[test]
    fn new_player_has_no_surface_and_defaults() {
        let player = Player::new(5.0);
        assert!(!player.is_loaded());
        assert!(!player.is_playing());
        assert_eq!(player.position_secs(), 0.0);
        assert_eq!(player.duration_secs(), None);
        assert!(!player.is_fullscreen());
    }

    #[test]
    fn handlers_are_silent_noops_without_surface() {
        let mut player = Player::new(5.0);

        player.toggle_play();
        player.skip_forward();
        player.skip_back();
        player.seek_to_ratio(0.5);
        player.handle_tick(Instant::now());

        assert!(!player.is_playing());
        assert_eq!(player.position_secs(), 0.0);
    }

    #[test]
    fn duration_mirror_fills_in_on_tick() {
        let mut player = Player::new(5.0);
        let source = MediaSource::new("clip.mp4").with_duration_hint(120.0);
        player.load(Box::new(ClockSurface::new()), &source).unwrap();

        assert_eq!(player.duration_secs(), None);
        player.handle_tick(Instant::now());
        assert_eq!(player.duration_secs(), Some(120.0));
    }

    #[test]
    fn toggle_play_flips_mirror_exactly_once_per_call() {
        let (mut player, _) = loaded_player(120.0);

        player.toggle_play();
        assert!(player.is_playing());

        player.toggle_play();
        assert!(!player.is_playing());
    }

    #[test]
    fn tick_copies_surface_position_into_mirror() {
        let (mut player, t0) = loaded_player(120.0);

        player.toggle_play();
        player.handle_tick(t0 + Duration::from_secs(1));
        player.handle_tick(t0 + Duration::from_secs(4));

        assert!((player.position_secs() - 3.0).abs() < 1e-9);
        assert!(player.is_playing());
    }

    #[test]
    fn skip_round_trip_returns_to_start() {
        let (mut player, _) = loaded_player(120.0);

        player.seek_to_ratio(0.25); // 30s
        let before = player.position_secs();

        player.skip_forward();
        player.skip_back();

        assert!((player.position_secs() - before).abs() < 1e-9);
    }

    #[test]
    fn skip_is_not_clamped_by_the_container() {
        let (mut player, _) = loaded_player(3.0);

        // The surface clamps, the container does not.
        player.skip_forward();
        assert_eq!(player.position_secs(), 3.0);

        player.skip_back();
        player.skip_back();
        assert_eq!(player.position_secs(), 0.0);
    }

    #[test]
    fn seek_to_ratio_maps_click_fraction_to_time() {
        let (mut player, _) = loaded_player(200.0);

        player.seek_to_ratio(0.4);
        assert!((player.position_secs() - 80.0).abs() < 1e-6);
    }

    #[test]
    fn seek_to_ratio_is_guarded_before_metadata() {
        let mut player = Player::new(5.0);
        let source = MediaSource::new("clip.mp4").with_duration_hint(0.0);
        player.load(Box::new(ClockSurface::new()), &source).unwrap();

        // No metadata yet.
        player.seek_to_ratio(0.5);
        assert_eq!(player.position_secs(), 0.0);

        // Metadata arrives with a zero duration: still a no-op, never NaN.
        player.handle_tick(Instant::now());
        player.seek_to_ratio(0.5);
        assert_eq!(player.position_secs(), 0.0);
        assert!(player.position_secs().is_finite());
    }

    #[test]
    fn seek_to_ratio_clamps_ratio_to_unit_interval() {
        let (mut player, _) = loaded_player(100.0);

        player.seek_to_ratio(2.0);
        assert_eq!(player.position_secs(), 100.0);

        player.seek_to_ratio(-1.0);
        assert_eq!(player.position_secs(), 0.0);
    }

    #[test]
    fn reconciliation_corrects_mirror_after_end_of_media() {
        let (mut player, t0) = loaded_player(3.0);

        player.toggle_play();
        player.handle_tick(t0 + Duration::from_secs(1));
        assert!(player.is_playing());

        // Clock runs past the end; surface pauses itself and the mirror
        // must follow instead of staying stuck on playing.
        player.handle_tick(t0 + Duration::from_secs(10));
        assert!(!player.is_playing());
        assert_eq!(player.position_secs(), 3.0);
    }

    #[test]
    fn toggle_fullscreen_emits_effect_without_mutating_state() {
        let (mut player, _) = loaded_player(120.0);

        assert_eq!(player.toggle_fullscreen(), Effect::SetFullscreen(true));
        // Mirror unchanged until the observer reports the actual mode.
        assert!(!player.is_fullscreen());

        player.set_fullscreen_state(true);
        assert!(player.is_fullscreen());
        assert_eq!(player.toggle_fullscreen(), Effect::SetFullscreen(false));
    }

    #[test]
    fn fullscreen_observer_tracks_external_exits() {
        let (mut player, _) = loaded_player(120.0);

        player.set_fullscreen_state(true);
        // Window manager kicked us out of fullscreen; no toggle involved.
        player.set_fullscreen_state(false);
        assert!(!player.is_fullscreen());
    }

    #[test]
    fn view_state_reports_zero_duration_until_metadata() {
        let mut player = Player::new(5.0);
        let source = MediaSource::new("clip.mp4").with_duration_hint(90.0);
        player.load(Box::new(ClockSurface::new()), &source).unwrap();

        assert_eq!(player.view_state().duration_secs, 0.0);
        player.handle_tick(Instant::now());
        assert_eq!(player.view_state().duration_secs, 90.0);
    }

    #[test]
    fn load_failure_leaves_player_unloaded() {
        let mut player = Player::new(5.0);
        let err = player
            .load(Box::new(ClockSurface::new()), &MediaSource::new(""))
            .unwrap_err();
        assert_eq!(err, MediaError::InvalidSource);
        assert!(!player.is_loaded());
    }

    #[test]
    fn skip_increment_is_fixed_at_construction() {
        let player = Player::new(7.5);
        assert_eq!(player.skip_secs(), 7.5);
    }
}
