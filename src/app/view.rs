// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: title, media area, and the control bar overlay.

use super::{App, Message};
use crate::ui::control_bar;
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::styles;
use iced::widget::{column, container, mouse_area, text, Space, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let fullscreen = app.player.is_fullscreen();

    let mut layout = column![].width(Length::Fill).height(Length::Fill);

    if !fullscreen {
        layout = layout.push(
            container(text(app.i18n.tr("app-title")).size(sizing::TEXT_XL))
                .padding(spacing::MD),
        );
    }

    layout.push(media_stack(app)).into()
}

/// The media surface with the control bar stacked over its bottom edge.
fn media_stack(app: &App) -> Element<'_, Message> {
    let bar = control_bar::view(
        control_bar::ViewContext { i18n: &app.i18n },
        &app.player.view_state(),
    )
    .map(Message::ControlBar);

    let overlay = column![
        Space::new().height(Length::Fill),
        container(bar).padding(spacing::SM),
    ]
    .width(Length::Fill);

    Stack::new()
        .push(media_area(app))
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The area standing in for the rendered frames. Clicking it toggles
/// playback, same as the transport button.
fn media_area(app: &App) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &app.load_error {
        Some(error) => text(app.i18n.tr(error.i18n_key()))
            .size(sizing::TEXT_SM)
            .color(palette::ERROR_500)
            .into(),
        None => text(&app.source_name).size(sizing::TEXT_SM).into(),
    };

    let surface = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::media_holder);

    mouse_area(surface)
        .on_press(Message::ControlBar(control_bar::Message::TogglePlayback))
        .into()
}
