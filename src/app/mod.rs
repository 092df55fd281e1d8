// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the player widget.
//!
//! The `App` struct wires together the player container, localization, and
//! configuration, and translates messages into side effects like window-mode
//! changes. Policy decisions (window size, tick cadence, fullscreen
//! orchestration) stay close to the main update loop so user-facing behavior
//! is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::error::MediaError;
use crate::i18n::fluent::I18n;
use crate::media::{ClockSurface, MediaSource};
use crate::player::Player;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging the player widget, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    player: Player,
    /// Host window, captured from window events; fullscreen requests are
    /// silent no-ops until it is known.
    window_id: Option<window::Id>,
    /// Display name of the loaded source.
    source_name: String,
    /// Load failure, shown in place of the media surface.
    load_error: Option<MediaError>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source_name", &self.source_name)
            .field("is_playing", &self.player.is_playing())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 320;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and CLI flags and loads the
    /// media source into the built-in clock surface.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let skip_secs =
            config::clamp_skip_secs(config.skip_secs.unwrap_or(config::DEFAULT_SKIP_SECS));
        let mut player = Player::new(skip_secs);

        let source_name = flags
            .source
            .or_else(|| config.source.clone())
            .unwrap_or_else(|| config::DEFAULT_SOURCE.to_string());
        let duration_hint = flags
            .duration_hint
            .unwrap_or(config::DEFAULT_DURATION_HINT_SECS);

        let source = MediaSource::new(source_name.clone()).with_duration_hint(duration_hint);
        let load_error = player
            .load(Box::new(ClockSurface::new()), &source)
            .err();

        if load_error.is_none() && config.autoplay.unwrap_or(false) {
            player.toggle_play();
        }

        let app = App {
            i18n,
            player,
            window_id: None,
            source_name,
            load_error,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}
