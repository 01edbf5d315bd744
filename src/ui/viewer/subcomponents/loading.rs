// SPDX-License-Identifier: MPL-2.0
//! Loading screen sub-component with animated spinner.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::animated_spinner::{self, AnimatedSpinner};
use iced::widget::{column, container, text};
use iced::{alignment, Element, Length};
use std::time::{Duration, Instant};

/// Loads taking longer than this are logged once.
const SLOW_LOAD_THRESHOLD: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default)]
pub struct State {
    started_at: Option<Instant>,
    slow_reported: bool,
    phase: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A decode started.
    Started,
    /// The decode finished, with or without success.
    Finished,
    /// Animation tick.
    SpinnerTick,
}

impl State {
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Started => {
                self.started_at = Some(Instant::now());
                self.slow_reported = false;
            }
            Message::Finished => {
                self.started_at = None;
            }
            Message::SpinnerTick => {
                self.phase = animated_spinner::next_phase(self.phase);
                if let Some(started) = self.started_at {
                    if !self.slow_reported && started.elapsed() > SLOW_LOAD_THRESHOLD {
                        self.slow_reported = true;
                        tracing::warn!(
                            elapsed_ms = started.elapsed().as_millis() as u64,
                            "image is taking long to load"
                        );
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Centered spinner with a caption.
    pub fn view<'a, M: 'a>(&self, caption: &'a str) -> Element<'a, M> {
        let spinner = AnimatedSpinner::new(palette::WHITE, self.phase)
            .background(palette::GRAY_700)
            .into_element();

        container(
            column![spinner, text(caption).size(typography::CAPTION)]
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center),
        )
        .center(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_phase() {
        let mut state = State::default();
        state.handle(Message::SpinnerTick);
        assert!(state.phase() > 0.0);
    }

    #[test]
    fn finished_clears_start_time() {
        let mut state = State::default();
        state.handle(Message::Started);
        assert!(state.started_at.is_some());
        state.handle(Message::Finished);
        assert!(state.started_at.is_none());
    }
}
