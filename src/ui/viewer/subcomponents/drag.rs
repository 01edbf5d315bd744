// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture sub-component: drag deltas and double-click detection.
//!
//! The sub-component only turns raw pointer input into gestures. Accumulating
//! the pan offset is the job of the domain [`DragHandler`](crate::domain::viewport::DragHandler).

use crate::app::config::DEFAULT_DOUBLE_CLICK_MS;
use crate::domain::viewport::DragOffset;
use iced::Point;
use std::time::{Duration, Instant};

/// Gesture sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    /// Current cursor position in window coordinates.
    cursor_position: Option<Point>,
    /// Position the last delta was measured from, while dragging.
    anchor: Option<Point>,
    is_dragging: bool,
    last_press: Option<Instant>,
    double_click_window: Duration,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DOUBLE_CLICK_MS))
    }
}

/// Messages for the gesture sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Left button pressed over the image.
    Pressed,
    /// Cursor moved anywhere in the window.
    Moved(Point),
    /// Left button released.
    Released,
    /// Cursor left the window.
    CursorLeft,
}

/// Effects produced by gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Incremental pointer movement while the button is held.
    Pan(DragOffset),
    /// Two presses within the double-click window.
    DoubleClick,
}

impl State {
    #[must_use]
    pub fn new(double_click_window: Duration) -> Self {
        Self {
            cursor_position: None,
            anchor: None,
            is_dragging: false,
            last_press: None,
            double_click_window,
        }
    }

    /// Handle a gesture message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed => self.press_at(Instant::now()),
            Message::Moved(position) => {
                self.cursor_position = Some(position);
                if !self.is_dragging {
                    return Effect::None;
                }
                let previous = self.anchor.replace(position);
                match previous {
                    Some(previous) if previous != position => Effect::Pan(DragOffset::new(
                        position.x - previous.x,
                        position.y - previous.y,
                    )),
                    _ => Effect::None,
                }
            }
            Message::Released => {
                self.stop();
                Effect::None
            }
            Message::CursorLeft => {
                self.cursor_position = None;
                self.stop();
                Effect::None
            }
        }
    }

    fn press_at(&mut self, now: Instant) -> Effect {
        let is_double_click = self
            .last_press
            .is_some_and(|t| now.duration_since(t) < self.double_click_window);

        if is_double_click {
            // A third press starts a new sequence.
            self.last_press = None;
            self.stop();
            return Effect::DoubleClick;
        }

        self.last_press = Some(now);
        self.is_dragging = true;
        self.anchor = self.cursor_position;
        Effect::None
    }

    fn stop(&mut self) {
        self.is_dragging = false;
        self.anchor = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }
}
