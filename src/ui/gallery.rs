// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: directory header, file list and a preview of the
//! selected image.
//!
//! Pressing the preview (or Enter) opens the full-image screen. Arrow keys
//! move through the list the same way they do on the full-image screen.

use crate::application::port::ContentState;
use crate::media::ImageLibrary;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::viewer::subcomponents::loading;
use iced::widget::{button, container, image, row, scrollable, text, Column, Space};
use iced::{alignment, event, keyboard, ContentFit, Element, Length, Padding};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct State {
    /// Pixel buffer the cached preview was built from.
    preview_source: Option<Arc<Vec<u8>>>,
    preview: Option<image::Handle>,
    notice: Option<String>,
    loading: loading::State,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Native event routed from the application subscription.
    RawEvent(iced::Event),
    Select(usize),
    Open,
    Refresh,
    Loading(loading::Message),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenFullImage,
    LoadImage(PathBuf),
}

impl State {
    pub fn handle(&mut self, msg: Message, library: &mut ImageLibrary) -> Effect {
        let effect = match msg {
            Message::RawEvent(event) => self.handle_event(event, library),
            Message::Select(index) => load(library.select(index)),
            Message::Open => {
                if library.current_path().is_some() {
                    Effect::OpenFullImage
                } else {
                    Effect::None
                }
            }
            Message::Refresh => match library.rescan() {
                Ok(next) => {
                    self.notice = None;
                    load(next)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to rescan directory");
                    self.notice = Some(err.to_string());
                    Effect::None
                }
            },
            Message::Loading(msg) => {
                self.loading.handle(msg);
                return Effect::None;
            }
        };

        self.refresh(library);
        effect
    }

    fn handle_event(&mut self, event: iced::Event, library: &mut ImageLibrary) -> Effect {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return Effect::None;
        };

        match key {
            keyboard::Key::Named(
                keyboard::key::Named::ArrowLeft | keyboard::key::Named::ArrowUp,
            ) => load(library.swipe_previous()),
            keyboard::Key::Named(
                keyboard::key::Named::ArrowRight | keyboard::key::Named::ArrowDown,
            ) => load(library.swipe_next()),
            keyboard::Key::Named(keyboard::key::Named::Enter) => {
                self.handle(Message::Open, library)
            }
            _ => Effect::None,
        }
    }

    /// Called by the shell when a decode starts.
    pub fn load_started(&mut self) {
        self.loading.handle(loading::Message::Started);
    }

    /// Called by the shell when a decode finished.
    pub fn load_finished(&mut self, library: &ImageLibrary) {
        self.loading.handle(loading::Message::Finished);
        self.refresh(library);
    }

    /// Shows a message above the file list until the next successful refresh.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Rebuilds the preview handle when the selected image changed.
    pub fn refresh(&mut self, library: &ImageLibrary) {
        let Some(selected) = library.selected_image().filter(|_| library.is_content_ready()) else {
            self.preview = None;
            self.preview_source = None;
            return;
        };

        let source = selected.rgba_bytes_arc();
        let unchanged = self
            .preview_source
            .as_ref()
            .is_some_and(|cached| Arc::ptr_eq(cached, &source));
        if unchanged && self.preview.is_some() {
            return;
        }

        self.preview = Some(image::Handle::from_rgba(
            selected.width(),
            selected.height(),
            selected.rgba_bytes().to_vec(),
        ));
        self.preview_source = Some(source);
    }

    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    pub fn view<'a>(&'a self, library: &'a ImageLibrary) -> Element<'a, Message> {
        let title = library
            .directory()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .unwrap_or("No directory");

        let refresh = button(icons::sized(icons::refresh(), sizing::ICON_MD))
            .padding(spacing::XXS)
            .style(styles::button::primary)
            .on_press_maybe(library.directory().map(|_| Message::Refresh));

        let header = row![
            text(title).size(typography::TITLE_MD),
            Space::new().width(Length::Fill),
            refresh,
        ]
        .align_y(alignment::Vertical::Center)
        .padding(Padding::from([spacing::XS, spacing::MD]));

        let body: Element<'a, Message> = if library.files().is_empty() {
            container(text("No images found").size(typography::BODY_LG))
                .center(Length::Fill)
                .into()
        } else {
            row![self.file_list(library), self.preview_area(library)]
                .spacing(spacing::MD)
                .padding(spacing::MD)
                .into()
        };

        let mut page = Column::new().push(header);
        if let Some(notice) = &self.notice {
            page = page.push(
                container(
                    text(notice.as_str())
                        .size(typography::CAPTION)
                        .color(palette::ERROR_500),
                )
                .padding(Padding::from([0.0, spacing::MD])),
            );
        }
        page.push(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn file_list<'a>(&'a self, library: &'a ImageLibrary) -> Element<'a, Message> {
        let current = library.current_index();
        let items = library
            .files()
            .iter()
            .enumerate()
            .map(|(index, path)| -> Element<'a, Message> {
                let name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or_default();
                button(text(name).size(typography::BODY))
                    .width(Length::Fill)
                    .padding(Padding::from([spacing::XXS, spacing::XS]))
                    .style(styles::button::list_item(current == Some(index)))
                    .on_press(Message::Select(index))
                    .into()
            });

        container(scrollable(
            Column::with_children(items)
                .spacing(spacing::XXS)
                .padding(spacing::XS),
        ))
        .width(Length::Fixed(sizing::FILE_LIST_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
    }

    fn preview_area<'a>(&'a self, library: &'a ImageLibrary) -> Element<'a, Message> {
        if let Some(handle) = &self.preview {
            return button(
                image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS)
            .style(styles::button::preview)
            .on_press(Message::Open)
            .into();
        }

        if library.is_loading() {
            return self.loading.view("Loading…");
        }

        let caption = match library.last_error() {
            Some(error) => text(error.to_string()).color(palette::ERROR_500),
            None => text("Select an image"),
        };
        container(caption.size(typography::BODY))
            .center(Length::Fill)
            .into()
    }
}

fn load(path: Option<PathBuf>) -> Effect {
    match path {
        Some(path) => Effect::LoadImage(path),
        None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{load_image, FilterSettings};
    use image_rs::{Rgba, RgbaImage};
    use tempfile::{tempdir, TempDir};

    fn gallery_with_images(names: &[&str]) -> (TempDir, ImageLibrary) {
        let dir = tempdir().expect("failed to create temp dir");
        for name in names {
            RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]))
                .save(dir.path().join(name))
                .expect("failed to write png");
        }
        let mut library = ImageLibrary::new(FilterSettings::default());
        if let Some(path) = library.open(dir.path()).expect("open failed") {
            assert!(library.on_image_loaded(&path, load_image(&path)));
        }
        (dir, library)
    }

    fn press(key: keyboard::key::Named) -> Message {
        Message::RawEvent(iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key),
            modified_key: keyboard::Key::Named(key),
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::empty(),
            text: None,
            repeat: false,
        }))
    }

    #[test]
    fn refresh_builds_preview_for_loaded_image() {
        let (_dir, library) = gallery_with_images(&["a.png"]);
        let mut state = State::default();
        state.refresh(&library);
        assert!(state.has_preview());
    }

    #[test]
    fn select_requests_decode() {
        let (dir, mut library) = gallery_with_images(&["a.png", "b.png"]);
        let mut state = State::default();

        let effect = state.handle(Message::Select(1), &mut library);

        assert_eq!(effect, Effect::LoadImage(dir.path().join("b.png")));
        assert!(!state.has_preview());
    }

    #[test]
    fn arrow_keys_navigate_with_wrap() {
        let (dir, mut library) = gallery_with_images(&["a.png", "b.png"]);
        let mut state = State::default();

        let effect = state.handle(press(keyboard::key::Named::ArrowLeft), &mut library);
        assert_eq!(effect, Effect::LoadImage(dir.path().join("b.png")));
    }

    #[test]
    fn open_requires_a_selection() {
        let (_dir, mut library) = gallery_with_images(&[]);
        let mut state = State::default();
        assert_eq!(state.handle(Message::Open, &mut library), Effect::None);

        let (_dir, mut library) = gallery_with_images(&["a.png"]);
        assert_eq!(
            state.handle(Message::Open, &mut library),
            Effect::OpenFullImage
        );
        assert_eq!(
            state.handle(press(keyboard::key::Named::Enter), &mut library),
            Effect::OpenFullImage
        );
    }

    #[test]
    fn refresh_picks_up_new_file_without_reload() {
        let (dir, mut library) = gallery_with_images(&["b.png"]);
        RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]))
            .save(dir.path().join("a.png"))
            .expect("failed to write png");
        let mut state = State::default();

        let effect = state.handle(Message::Refresh, &mut library);

        assert_eq!(effect, Effect::None);
        assert_eq!(library.files().len(), 2);
        assert_eq!(library.current_index(), Some(1));
        assert!(state.notice().is_none());
    }
}
