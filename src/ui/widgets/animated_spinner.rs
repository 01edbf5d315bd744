// SPDX-License-Identifier: MPL-2.0
//! Loading indicator drawn on a canvas.
//!
//! A rotating arc inside a filled disc. The arc length breathes between a
//! quarter and three quarters of a turn as the phase advances.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, path::Arc, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians advanced per animation tick.
pub const ROTATION_STEP: f32 = 0.12;

/// Spinner for one animation phase.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedSpinner {
    phase: f32,
    color: Color,
    background: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner at `phase` radians.
    #[must_use]
    pub fn new(color: Color, phase: f32) -> Self {
        Self {
            phase,
            color,
            background: palette::GRAY_700,
            size: sizing::SPINNER,
        }
    }

    #[must_use]
    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Start and end angle of the arc for the current phase.
    fn arc_angles(&self) -> (f32, f32) {
        let sweep = PI / 2.0 + PI * (0.5 + 0.5 * (self.phase * 0.5).sin());
        let start = self.phase.rem_euclid(TAU) - PI / 2.0;
        (start, start + sweep)
    }
}

/// Advances a spinner phase by one tick, wrapping at a full turn.
#[must_use]
pub fn next_phase(phase: f32) -> f32 {
    (phase + ROTATION_STEP).rem_euclid(TAU * 2.0)
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let outer = frame.width().min(frame.height()) / 2.0;

        frame.fill(&Path::circle(center, outer), self.background);

        let (start, end) = self.arc_angles();
        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius: outer - 7.0,
                start_angle: Radians(start),
                end_angle: Radians(end),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(4.0)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_sweep_stays_between_quarter_and_three_quarters() {
        for step in 0..200 {
            let spinner = AnimatedSpinner::new(palette::WHITE, step as f32 * ROTATION_STEP);
            let (start, end) = spinner.arc_angles();
            let sweep = end - start;
            assert!(sweep >= PI / 2.0 - 1e-4);
            assert!(sweep <= 3.0 * PI / 2.0 + 1e-4);
        }
    }

    #[test]
    fn phase_wraps() {
        let mut phase = 0.0;
        for _ in 0..1000 {
            phase = next_phase(phase);
            assert!((0.0..TAU * 2.0).contains(&phase));
        }
    }
}
