// SPDX-License-Identifier: MPL-2.0
//! Clickable progress track widget.
//!
//! A thin Canvas that draws the track and its fill, and converts a press at
//! horizontal offset `x` into the fractional position `x / width`. The
//! fraction is all it reports; mapping it to a playback time is the player
//! container's job.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::canvas::{self, Frame, Path};
use iced::{mouse, Point, Rectangle, Renderer, Theme};

pub struct ProgressTrack<Message> {
    /// Fill fraction in `[0, 1]`, pre-guarded by the caller.
    ratio: f32,
    /// Maps the clicked fraction to the host's message type.
    on_seek: fn(f32) -> Message,
}

impl<Message> ProgressTrack<Message> {
    pub fn new(ratio: f32, on_seek: fn(f32) -> Message) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            on_seek,
        }
    }
}

impl<Message> canvas::Program<Message> for ProgressTrack<Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position_in(bounds) {
                if bounds.width > 0.0 {
                    let ratio = (position.x / bounds.width).clamp(0.0, 1.0);
                    return Some(Action::publish((self.on_seek)(ratio)).and_capture());
                }
            }
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let track = Path::rounded_rectangle(Point::ORIGIN, frame.size(), radius::SM.into());
        frame.fill(&track, palette::GRAY_700);

        let fill_width = frame.width() * self.ratio;
        if fill_width > 0.0 {
            let fill = Path::rounded_rectangle(
                Point::ORIGIN,
                iced::Size::new(fill_width, frame.height()),
                radius::SM.into(),
            );
            frame.fill(&fill, palette::WHITE);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
