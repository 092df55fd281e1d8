// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions: the playback tick and the window observer.

use super::{App, Message};
use iced::event::{self, Event};
use iced::{time, window, Subscription};
use std::time::Duration;

/// Interval between playback ticks. Frequent enough for a smooth progress
/// fill without burning CPU on redraws.
const TICK_INTERVAL_MS: u64 = 100;

pub fn subscription(app: &App) -> Subscription<Message> {
    let window_events = event::listen_with(|event, _status, id| match event {
        Event::Window(window::Event::Opened { .. }) | Event::Window(window::Event::Resized(_)) => {
            Some(Message::WindowObserved(id))
        }
        _ => None,
    });

    // No surface, no clock to drive.
    if !app.player.is_loaded() {
        return window_events;
    }

    let tick = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick);

    Subscription::batch([window_events, tick])
}
