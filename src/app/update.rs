// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report intent through their `Effect`; this module turns those
//! effects into screen switches and decode tasks.

use super::{Message, Screen};
use crate::domain::media::RawImage;
use crate::error::Result;
use crate::media::{self, ImageLibrary};
use crate::ui::{gallery, viewer};
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable application state handed to the message handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub library: &'a mut ImageLibrary,
    pub gallery: &'a mut gallery::State,
    pub viewer: &'a mut viewer::State,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.handle(message, ctx.library) {
        gallery::Effect::None => Task::none(),
        gallery::Effect::LoadImage(path) => start_load(ctx, path),
        gallery::Effect::OpenFullImage => {
            tracing::debug!("opening full image screen");
            *ctx.screen = Screen::FullImage;
            ctx.viewer.enter(&*ctx.library);
            Task::none()
        }
    }
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    match ctx.viewer.handle(message, ctx.library) {
        viewer::Effect::None => Task::none(),
        viewer::Effect::LoadImage(path) => start_load(ctx, path),
        viewer::Effect::ShowMain => {
            tracing::debug!("returning to gallery");
            *ctx.screen = Screen::Main;
            ctx.gallery.refresh(&*ctx.library);
            Task::none()
        }
    }
}

/// Hands a finished decode to the library and refreshes both screens.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    path: &Path,
    result: Result<RawImage>,
) -> Task<Message> {
    if ctx.library.on_image_loaded(path, result) {
        ctx.viewer.load_finished(&*ctx.library);
        ctx.gallery.load_finished(&*ctx.library);
    }
    Task::none()
}

pub fn handle_spinner_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.screen {
        Screen::Main => {
            ctx.gallery.handle(
                gallery::Message::Loading(viewer::subcomponents::loading::Message::SpinnerTick),
                ctx.library,
            );
        }
        Screen::FullImage => {
            ctx.viewer.handle(
                viewer::Message::Loading(viewer::subcomponents::loading::Message::SpinnerTick),
                ctx.library,
            );
        }
    }
    Task::none()
}

/// Marks both screens as loading and decodes `path` off the UI thread.
pub fn start_load(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    tracing::debug!(path = %path.display(), "loading image");
    ctx.viewer.load_started();
    ctx.gallery.load_started();
    load_image_task(path)
}

pub fn load_image_task(path: PathBuf) -> Task<Message> {
    Task::perform(media::load_image_async(path.clone()), move |result| {
        Message::ImageLoaded {
            path: path.clone(),
            result,
        }
    })
}
