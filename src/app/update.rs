// SPDX-License-Identifier: MPL-2.0
//! Main update loop: routes control-bar intents into the player container
//! and maps its effects onto window tasks.

use super::{App, Message};
use crate::player::Effect;
use crate::ui::control_bar;
use iced::{window, Task};
use std::time::Instant;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ControlBar(msg) => handle_control_bar(app, msg),
        Message::Tick(now) => handle_tick(app, now),
        Message::WindowObserved(id) => {
            app.window_id = Some(id);
            fetch_window_mode(Some(id))
        }
        Message::FullscreenModeFetched(mode) => {
            app.player
                .set_fullscreen_state(matches!(mode, window::Mode::Fullscreen));
            Task::none()
        }
    }
}

fn handle_control_bar(app: &mut App, message: control_bar::Message) -> Task<Message> {
    match message {
        control_bar::Message::TogglePlayback => {
            app.player.toggle_play();
            Task::none()
        }
        control_bar::Message::SkipBack => {
            app.player.skip_back();
            Task::none()
        }
        control_bar::Message::SkipForward => {
            app.player.skip_forward();
            Task::none()
        }
        control_bar::Message::Seek(ratio) => {
            app.player.seek_to_ratio(ratio);
            Task::none()
        }
        control_bar::Message::ToggleFullscreen => match app.player.toggle_fullscreen() {
            Effect::SetFullscreen(desired) => set_fullscreen_mode(app.window_id, desired),
            Effect::None => Task::none(),
        },
    }
}

fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    app.player.handle_tick(now);
    Task::none()
}

/// Applies the desired fullscreen mode and re-queries the actual mode
/// afterwards, so the player's mirror is written from observed state rather
/// than from the request.
fn set_fullscreen_mode(window_id: Option<window::Id>, desired: bool) -> Task<Message> {
    let Some(id) = window_id else {
        return Task::none();
    };

    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };

    window::set_mode(id, mode).chain(fetch_window_mode(Some(id)))
}

/// Queries the current window mode; the result is the sole writer of the
/// fullscreen mirror.
fn fetch_window_mode(window_id: Option<window::Id>) -> Task<Message> {
    let Some(id) = window_id else {
        return Task::none();
    };

    window::mode(id).map(Message::FullscreenModeFetched)
}
