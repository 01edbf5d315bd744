// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, mouse, window)
//! to the appropriate screen components based on the current application state.

use super::{Message, Screen};
use crate::ui::gallery;
use crate::ui::viewer::{self, viewport};
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Spinner frame interval.
const SPINNER_TICK: Duration = Duration::from_millis(80);

fn to_viewport(event: iced::Event) -> Message {
    Message::Viewer(viewer::Message::Viewport(viewport::Message::RawEvent(event)))
}

/// Creates the appropriate event subscription based on the current screen.
///
/// Window size changes always reach the viewport so its area is correct when
/// the full-image screen opens. Keyboard events are only routed when no
/// widget captured them.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Main => event::listen_with(|event, status, _window_id| {
            if let event::Event::Window(window::Event::Resized(_) | window::Event::Opened { .. }) =
                &event
            {
                return Some(to_viewport(event));
            }

            match (&event, status) {
                (event::Event::Keyboard(..), event::Status::Ignored) => {
                    Some(Message::Gallery(gallery::Message::RawEvent(event)))
                }
                _ => None,
            }
        }),
        Screen::FullImage => event::listen_with(|event, status, _window_id| {
            // Drags continue outside the image area, so pointer motion and
            // release are routed even when captured.
            match &event {
                event::Event::Window(
                    window::Event::Resized(_) | window::Event::Opened { .. },
                )
                | event::Event::Mouse(
                    mouse::Event::CursorMoved { .. }
                    | mouse::Event::CursorLeft
                    | mouse::Event::ButtonReleased(mouse::Button::Left),
                ) => Some(to_viewport(event)),
                event::Event::Keyboard(..) if matches!(status, event::Status::Ignored) => {
                    Some(to_viewport(event))
                }
                _ => None,
            }
        }),
    }
}

/// Creates a periodic tick subscription that animates the loading spinner.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_TICK).map(Message::SpinnerTick)
    } else {
        Subscription::none()
    }
}
