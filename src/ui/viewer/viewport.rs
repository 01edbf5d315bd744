// SPDX-License-Identifier: MPL-2.0
//! Zoomable and draggable image viewport.
//!
//! The viewport owns the zoom factor and the accumulated pan offset of one
//! viewing session. After every change it recomputes the visible crop of the
//! selected image and caches a display handle for it, so `view` stays a pure
//! read of the current state.
//!
//! Keyboard shortcuts:
//! - `I` / `O`: zoom in / out
//! - `R`: reset zoom and pan
//! - Left / Right: previous / next image
//! - Escape: back to the gallery

use super::subcomponents::{drag, zoom};
use crate::application::port::ContentState;
use crate::domain::viewport::{
    CropCalculator, CropGeometry, CropRectangle, DisplayBounds, DragHandler, DragOffset, ZoomSteps,
};
use crate::media::crop_image;
use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use iced::widget::{container, image, mouse_area, Space};
use iced::{event, keyboard, mouse, window, ContentFit, Element, Length, Size};
use std::sync::Arc;
use std::time::Duration;

/// Keyboard actions understood by the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ZoomIn,
    ZoomOut,
    Reset,
    Previous,
    Next,
    Back,
}

impl Shortcut {
    /// Maps a pressed key to a viewport shortcut.
    #[must_use]
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Self::Previous),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Self::Next),
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Self::Back),
            keyboard::Key::Character(c) => match c.as_str() {
                "i" | "I" => Some(Self::ZoomIn),
                "o" | "O" => Some(Self::ZoomOut),
                "r" | "R" => Some(Self::Reset),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Settings applied when the viewport is created.
#[derive(Debug, Clone, Copy)]
pub struct ViewportSettings {
    pub calculator: CropCalculator,
    pub zoom_steps: ZoomSteps,
    pub double_click_window: Duration,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            calculator: CropCalculator::default(),
            zoom_steps: ZoomSteps::default(),
            double_click_window: Duration::from_millis(crate::app::config::DEFAULT_DOUBLE_CLICK_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    zoom: zoom::State,
    gestures: drag::State,
    drag: DragHandler,
    calculator: CropCalculator,
    /// Area available to the image, in display pixels.
    area: Size,
    crop: Option<CropRectangle>,
    /// Pixel buffer the cached frame was cut from.
    source: Option<Arc<Vec<u8>>>,
    frame: Option<image::Handle>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ViewportSettings::default())
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Native event routed from the application subscription.
    RawEvent(iced::Event),
    /// Left button pressed over the image area.
    ImagePressed,
    Shortcut(Shortcut),
    Gesture(drag::Message),
    /// Window inner size changed.
    WindowResized(Size),
}

/// Requests for the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    NavigatePrevious,
    NavigateNext,
    Back,
}

impl State {
    #[must_use]
    pub fn new(settings: ViewportSettings) -> Self {
        Self {
            zoom: zoom::State::new(settings.zoom_steps),
            gestures: drag::State::new(settings.double_click_window),
            drag: DragHandler::new(),
            calculator: settings.calculator,
            area: Size::new(
                crate::app::WINDOW_DEFAULT_WIDTH as f32,
                crate::app::WINDOW_DEFAULT_HEIGHT as f32 - sizing::TOOLBAR_HEIGHT,
            ),
            crop: None,
            source: None,
            frame: None,
        }
    }

    /// Handle a viewport message, then refresh the cached frame.
    pub fn handle<C: ContentState + ?Sized>(&mut self, msg: Message, content: &C) -> Effect {
        let effect = match msg {
            Message::RawEvent(event) => match translate_event(event) {
                Some(msg) => return self.handle(msg, content),
                None => return Effect::None,
            },
            Message::ImagePressed => match self.gestures.handle(drag::Message::Pressed) {
                drag::Effect::DoubleClick => {
                    tracing::debug!("double click, resetting view");
                    self.reset_view();
                    Effect::None
                }
                _ => return Effect::None,
            },
            Message::Gesture(gesture) => match self.gestures.handle(gesture) {
                drag::Effect::Pan(delta) => {
                    self.drag.on_drag(delta);
                    Effect::None
                }
                drag::Effect::DoubleClick => {
                    self.reset_view();
                    Effect::None
                }
                drag::Effect::None => return Effect::None,
            },
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut),
            Message::WindowResized(size) => {
                self.area = Size::new(
                    size.width.max(0.0),
                    (size.height - sizing::TOOLBAR_HEIGHT).max(0.0),
                );
                Effect::None
            }
        };

        self.refresh(content);
        effect
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) -> Effect {
        match shortcut {
            Shortcut::ZoomIn => {
                let zoom::Effect::ScaleChanged(factor) = self.zoom.handle(zoom::Message::ZoomIn);
                tracing::debug!(factor, "zoom in");
                Effect::None
            }
            Shortcut::ZoomOut => {
                let zoom::Effect::ScaleChanged(factor) = self.zoom.handle(zoom::Message::ZoomOut);
                tracing::debug!(factor, "zoom out");
                Effect::None
            }
            Shortcut::Reset => {
                self.reset_view();
                Effect::None
            }
            Shortcut::Previous => {
                self.reset_view();
                Effect::NavigatePrevious
            }
            Shortcut::Next => {
                self.reset_view();
                Effect::NavigateNext
            }
            Shortcut::Back => Effect::Back,
        }
    }

    /// Restores the default zoom and clears the pan offset.
    pub fn reset_view(&mut self) {
        self.zoom.handle(zoom::Message::Reset);
        self.drag.reset();
    }

    /// Recomputes the crop for the selected image and updates the cached frame.
    ///
    /// Clears the frame while content is not ready.
    pub fn refresh<C: ContentState + ?Sized>(&mut self, content: &C) {
        let selected = match content.selected_image() {
            Some(selected) if content.is_content_ready() => selected,
            _ => {
                self.crop = None;
                self.source = None;
                self.frame = None;
                return;
            }
        };

        let size = selected.size();
        let geometry = CropGeometry {
            image: size,
            bounds: DisplayBounds::fitted(size, self.area.width, self.area.height),
            display_width: self.area.width,
        };

        let before = self.drag.amount();
        let rect = self
            .calculator
            .compute(geometry, self.zoom.factor(), &mut self.drag);
        let after = self.drag.amount();
        if before != after {
            tracing::trace!(
                from_x = before.x,
                from_y = before.y,
                to_x = after.x,
                to_y = after.y,
                "pan clamped at image edge"
            );
        }

        let source = selected.rgba_bytes_arc();
        let unchanged = self.crop == Some(rect)
            && self
                .source
                .as_ref()
                .is_some_and(|cached| Arc::ptr_eq(cached, &source));
        if unchanged && self.frame.is_some() {
            return;
        }

        let cropped = crop_image(selected, rect);
        let (width, height) = (cropped.width(), cropped.height());
        self.frame = Some(image::Handle::from_rgba(
            width,
            height,
            cropped.into_rgba_bytes(),
        ));
        self.crop = Some(rect);
        self.source = Some(source);
    }

    #[must_use]
    pub fn factor(&self) -> f32 {
        self.zoom.factor()
    }

    #[must_use]
    pub fn drag_amount(&self) -> DragOffset {
        self.drag.amount()
    }

    /// Visible region of the current image, once content is ready.
    #[must_use]
    pub fn crop(&self) -> Option<CropRectangle> {
        self.crop
    }

    #[must_use]
    pub fn area(&self) -> Size {
        self.area
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.frame {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Space::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        };

        let interaction = if self.gestures.is_dragging() {
            mouse::Interaction::Grabbing
        } else if self.zoom.is_zoomed_in() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        };

        mouse_area(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::image_surface),
        )
        .on_press(Message::ImagePressed)
        .interaction(interaction)
        .into()
    }
}

/// Converts a native event into a viewport message.
fn translate_event(event: iced::Event) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Shortcut::from_key(&key).map(Message::Shortcut)
        }
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::Gesture(drag::Message::Moved(position)))
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::Gesture(drag::Message::Released))
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => {
            Some(Message::Gesture(drag::Message::CursorLeft))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    }
}
