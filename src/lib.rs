// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a minimal video player widget built with the Iced GUI framework.
//!
//! It renders a media surface with an overlay control bar (play/pause, skip,
//! click-to-seek progress track, elapsed/duration readout, fullscreen toggle)
//! on top of a narrow [`media::MediaSurface`] capability interface, so the
//! widget can be driven by any playback backend and tested against a fake one.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod player;
pub mod ui;
