// SPDX-License-Identifier: MPL-2.0
//! Full-image screen: toolbar on top, zoomable viewport below.
//!
//! The component owns no image data. It reads the session through
//! [`ContentState`], forwards filter and navigation commands to it, and asks
//! the application to decode whatever path navigation returns.

use super::subcomponents::loading;
use super::toolbar;
use super::viewport::{self, ViewportSettings};
use crate::application::port::ContentState;
use crate::error::Error;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{column, container, text};
use iced::{alignment, Element, Length};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct State {
    toolbar: toolbar::State,
    viewport: viewport::State,
    loading: loading::State,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    Viewport(viewport::Message),
    Loading(loading::Message),
}

/// Requests for the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Return to the gallery.
    ShowMain,
    /// Decode this file and hand the result back to the session.
    LoadImage(PathBuf),
}

impl State {
    #[must_use]
    pub fn new(settings: ViewportSettings) -> Self {
        Self {
            toolbar: toolbar::State::default(),
            viewport: viewport::State::new(settings),
            loading: loading::State::default(),
        }
    }

    pub fn handle<C: ContentState + ?Sized>(&mut self, msg: Message, content: &mut C) -> Effect {
        match msg {
            Message::Toolbar(msg) => match self.toolbar.handle(msg) {
                toolbar::Effect::None => Effect::None,
                toolbar::Effect::Back => self.back(content),
                toolbar::Effect::ToggleFilter(filter) => {
                    content.toggle_filter(filter);
                    self.viewport.refresh(content);
                    Effect::None
                }
            },
            Message::Viewport(msg) => match self.viewport.handle(msg, content) {
                viewport::Effect::None => Effect::None,
                viewport::Effect::Back => self.back(content),
                viewport::Effect::NavigateNext => self.navigated(content.swipe_next(), content),
                viewport::Effect::NavigatePrevious => {
                    self.navigated(content.swipe_previous(), content)
                }
            },
            Message::Loading(msg) => {
                self.loading.handle(msg);
                Effect::None
            }
        }
    }

    /// Enters the screen with a fresh view of the selected image.
    pub fn enter<C: ContentState + ?Sized>(&mut self, content: &C) {
        self.viewport.reset_view();
        self.viewport.refresh(content);
    }

    /// Called by the shell when a decode for this screen starts.
    pub fn load_started(&mut self) {
        self.loading.handle(loading::Message::Started);
    }

    /// Called by the shell when a decode finished, then re-crops.
    pub fn load_finished<C: ContentState + ?Sized>(&mut self, content: &C) {
        self.loading.handle(loading::Message::Finished);
        self.viewport.refresh(content);
    }

    #[must_use]
    pub fn viewport(&self) -> &viewport::State {
        &self.viewport
    }

    fn back<C: ContentState + ?Sized>(&mut self, content: &mut C) -> Effect {
        if content.is_content_ready() {
            content.restore_main_image();
        }
        self.viewport.reset_view();
        Effect::ShowMain
    }

    fn navigated<C: ContentState + ?Sized>(
        &mut self,
        next: Option<PathBuf>,
        content: &C,
    ) -> Effect {
        self.viewport.refresh(content);
        match next {
            Some(path) => Effect::LoadImage(path),
            None => Effect::None,
        }
    }

    /// Toolbar and viewport when content is ready, otherwise the loading
    /// screen or the last load error.
    pub fn view<'a, C: ContentState + ?Sized>(
        &'a self,
        content: &'a C,
        error: Option<&'a Error>,
    ) -> Element<'a, Message> {
        let toolbar = self.toolbar.view(content).map(Message::Toolbar);

        let body: Element<'a, Message> = if content.is_content_ready() {
            self.viewport.view().map(Message::Viewport)
        } else if let Some(error) = error {
            container(
                column![
                    text("Could not open image").size(typography::TITLE_MD),
                    text(error.to_string())
                        .size(typography::BODY)
                        .color(palette::ERROR_500),
                ]
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center),
            )
            .center(Length::Fill)
            .into()
        } else {
            self.loading.view("Loading…")
        };

        column![toolbar, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
