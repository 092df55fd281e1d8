// SPDX-License-Identifier: MPL-2.0
//! Media surface abstraction and the built-in clock-driven backend.
//!
//! The player widget never talks to a concrete playback engine. It holds a
//! boxed [`MediaSurface`] and issues the same imperative calls a browser
//! component would issue against a native media element: play, pause, query
//! and set the position, query the duration. Backends with real decoding can
//! implement the trait; [`ClockSurface`] is the reference implementation used
//! by the demo binary and the tests.

pub mod clock;
pub mod surface;

pub use clock::ClockSurface;
pub use surface::{MediaSource, MediaSurface};
