// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::media::ImageLibrary;
use crate::ui::{gallery, viewer};
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub library: &'a ImageLibrary,
    pub gallery: &'a gallery::State,
    pub viewer: &'a viewer::State,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Main => ctx.gallery.view(ctx.library).map(Message::Gallery),
        Screen::FullImage => {
            // A new decode supersedes the previous failure.
            let error = ctx
                .library
                .last_error()
                .filter(|_| !ctx.library.is_loading());
            ctx.viewer.view(ctx.library, error).map(Message::Viewer)
        }
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
