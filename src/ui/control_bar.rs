// SPDX-License-Identifier: MPL-2.0
//! Control bar UI.
//!
//! Stateless overlay toolbar: renders a snapshot of playback state and
//! forwards each interaction to exactly one message. No validation, no
//! debouncing, no geometry math beyond the progress track's own fraction.

use crate::i18n::fluent::I18n;
use crate::player::time_format::format_time;
use crate::player::PlaybackView;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::progress::ProgressTrack;
use crate::ui::{icons, styles};
use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, row, text, tooltip, Row, Space, Text};
use iced::{Element, Length};

/// Messages emitted by control bar widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Toggle play/pause state.
    TogglePlayback,

    /// Skip backward by the fixed increment.
    SkipBack,

    /// Skip forward by the fixed increment.
    SkipForward,

    /// Seek to a fraction of the duration (from the progress track).
    Seek(f32),

    /// Toggle fullscreen mode.
    ToggleFullscreen,
}

/// View context for rendering the control bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Fill fraction for the progress track.
///
/// Guarded against the zero/unknown-duration case: rather than let the
/// division produce a non-finite width, an empty track renders 0%.
pub fn progress_fraction(position_secs: f64, duration_secs: f64) -> f32 {
    if !duration_secs.is_finite() || duration_secs <= 0.0 || !position_secs.is_finite() {
        return 0.0;
    }
    ((position_secs / duration_secs) as f32).clamp(0.0, 1.0)
}

/// Renders the control bar.
///
/// Returns a column with:
/// - Clickable progress track
/// - Transport row: skip back, play/pause, skip forward, time readout
/// - Fullscreen toggle, aligned right
pub fn view<'a>(ctx: ViewContext<'a>, state: &PlaybackView) -> Element<'a, Message> {
    let icon_size = sizing::ICON_SM;
    let button_height = sizing::BUTTON_HEIGHT;

    let track = Canvas::new(ProgressTrack::new(
        progress_fraction(state.position_secs, state.duration_secs),
        Message::Seek,
    ))
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PROGRESS_TRACK_HEIGHT));

    let skip_back_button = tooltip(
        transport_button(icons::skip_back(), icon_size, button_height, Message::SkipBack),
        Text::new(ctx.i18n.tr("video-skip-back-tooltip")),
        tooltip::Position::Top,
    )
    .gap(4);

    let play_pause_svg = if state.is_playing {
        icons::sized(icons::pause(), icon_size)
    } else {
        icons::sized(icons::play(), icon_size)
    };

    let play_pause_tooltip = if state.is_playing {
        ctx.i18n.tr("video-pause-tooltip")
    } else {
        ctx.i18n.tr("video-play-tooltip")
    };

    let play_pause_button = tooltip(
        button(play_pause_svg)
            .on_press(Message::TogglePlayback)
            .padding(spacing::XXS)
            .width(Length::Shrink)
            .height(Length::Fixed(button_height))
            .style(styles::button::transport),
        Text::new(play_pause_tooltip),
        tooltip::Position::Top,
    )
    .gap(4);

    let skip_forward_button = tooltip(
        transport_button(
            icons::skip_forward(),
            icon_size,
            button_height,
            Message::SkipForward,
        ),
        Text::new(ctx.i18n.tr("video-skip-forward-tooltip")),
        tooltip::Position::Top,
    )
    .gap(4);

    let time_display = text(format!(
        "{} / {}",
        format_time(state.position_secs),
        format_time(state.duration_secs)
    ))
    .size(sizing::TEXT_SM);

    let fullscreen_svg = if state.is_fullscreen {
        icons::sized(icons::minimize(), icon_size)
    } else {
        icons::sized(icons::expand(), icon_size)
    };

    let fullscreen_tooltip = if state.is_fullscreen {
        ctx.i18n.tr("video-exit-fullscreen-tooltip")
    } else {
        ctx.i18n.tr("video-fullscreen-tooltip")
    };

    let fullscreen_button = tooltip(
        button(fullscreen_svg)
            .on_press(Message::ToggleFullscreen)
            .padding(spacing::XXS)
            .width(Length::Shrink)
            .height(Length::Fixed(button_height))
            .style(styles::button::transport),
        Text::new(fullscreen_tooltip),
        tooltip::Position::Top,
    )
    .gap(4);

    let transport: Row<'a, Message> = row![
        skip_back_button,
        play_pause_button,
        skip_forward_button,
        time_display,
        Space::new().width(Length::Fill),
        fullscreen_button,
    ]
    .spacing(spacing::XS)
    .align_y(iced::Alignment::Center);

    container(
        column![track, transport]
            .spacing(spacing::XXS)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::container::control_bar)
    .into()
}

fn transport_button<'a>(
    icon: iced::widget::svg::Svg<'static>,
    icon_size: f32,
    button_height: f32,
    message: Message,
) -> Element<'a, Message> {
    button(icons::sized(icon, icon_size))
        .on_press(message)
        .padding(spacing::XXS)
        .width(Length::Shrink)
        .height(Length::Fixed(button_height))
        .style(styles::button::transport)
        .into()
}
