// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::BLACK, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for transparent overlay buttons (transport controls, fullscreen).
///
/// Buttons rest invisible on the control bar and pick up a translucent
/// background on hover so the bar stays quiet while idle.
pub fn transport(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => opacity::OVERLAY_NORMAL,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}
