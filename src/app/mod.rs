// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! full-image viewer.
//!
//! The `App` struct owns the image library shared by both screens and
//! translates component effects into screen switches and decode tasks.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::media::ImageLibrary;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::{self, ViewportSettings};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    library: ImageLibrary,
    gallery: gallery::State,
    viewer: viewer::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("current", &self.library.current_path())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`, flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Main,
            library: ImageLibrary::default(),
            gallery: gallery::State::default(),
            viewer: viewer::State::default(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl App {
    /// Loads the configuration, then builds the initial state and starts
    /// decoding the first image when a start path is known.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, warning) = config::load();
        Self::with_config(flags, &config, warning)
    }

    fn with_config(
        flags: Flags,
        config: &config::Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let mut app = App {
            library: ImageLibrary::new(config.filters.settings()),
            viewer: viewer::State::new(ViewportSettings {
                calculator: config.viewport.crop_calculator(),
                zoom_steps: config.viewport.zoom_steps(),
                double_click_window: config.viewport.double_click_window(),
            }),
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default configuration");
            app.gallery.set_notice(warning);
        }

        let start = flags
            .path
            .map(PathBuf::from)
            .or_else(|| config.general.image_directory.clone());

        let task = match start {
            Some(path) => match app.library.open(&path) {
                Ok(Some(first)) => update::start_load(&mut app.update_context(), first),
                Ok(None) => Task::none(),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "cannot open start path");
                    app.gallery.set_notice(err.to_string());
                    Task::none()
                }
            },
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self
            .library
            .current_path()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
        {
            Some(name) => format!("{name} - {}", paths::APP_NAME),
            None => paths::APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(self.library.is_loading());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            library: &mut self.library,
            gallery: &mut self.gallery,
            viewer: &mut self.viewer,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::ImageLoaded { path, result } => {
                update::handle_image_loaded(&mut ctx, &path, result)
            }
            Message::SpinnerTick(_) => update::handle_spinner_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            library: &self.library,
            gallery: &self.gallery,
            viewer: &self.viewer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::ContentState;
    use crate::domain::media::FilterType;
    use crate::media::load_image;
    use crate::ui::viewer::{toolbar, viewport, Shortcut};
    use image_rs::{Rgba, RgbaImage};
    use tempfile::{tempdir, TempDir};

    fn write_images(names: &[&str]) -> TempDir {
        let dir = tempdir().expect("failed to create temp dir");
        for name in names {
            RgbaImage::from_pixel(40, 30, Rgba([90, 120, 200, 255]))
                .save(dir.path().join(name))
                .expect("failed to write png");
        }
        dir
    }

    fn app_for(dir: &TempDir) -> App {
        let flags = Flags {
            path: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(flags, &config::Config::default(), None);
        app
    }

    /// Runs the decode the shell would have scheduled for the pending file.
    fn finish_pending_load(app: &mut App) {
        let path = app
            .library
            .current_path()
            .map(std::path::Path::to_path_buf)
            .expect("no current image");
        let result = load_image(&path);
        let _ = app.update(Message::ImageLoaded { path, result });
    }

    fn shortcut(shortcut: Shortcut) -> Message {
        Message::Viewer(viewer::Message::Viewport(viewport::Message::Shortcut(
            shortcut,
        )))
    }

    #[test]
    fn start_path_begins_loading_first_image() {
        let dir = write_images(&["b.png", "a.png"]);
        let app = app_for(&dir);

        assert_eq!(app.screen, Screen::Main);
        assert!(app.library.is_loading());
        assert_eq!(app.library.current_path(), Some(dir.path().join("a.png").as_path()));
        assert_eq!(app.title(), format!("a.png - {}", paths::APP_NAME));
    }

    #[test]
    fn missing_start_path_shows_notice() {
        let flags = Flags {
            path: Some("/definitely/not/here.png".into()),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(flags, &config::Config::default(), None);
        assert!(app.gallery.notice().is_some());
        assert_eq!(app.title(), paths::APP_NAME);
    }

    #[test]
    fn config_warning_is_shown() {
        let (app, _task) = App::with_config(
            Flags::default(),
            &config::Config::default(),
            Some("broken settings".into()),
        );
        assert_eq!(app.gallery.notice(), Some("broken settings"));
    }

    #[test]
    fn theme_flag_overrides_config() {
        let flags = Flags {
            theme: Some(ThemeMode::Light),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(flags, &config::Config::default(), None);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn open_and_back_round_trip() {
        let dir = write_images(&["a.png", "b.png"]);
        let mut app = app_for(&dir);
        finish_pending_load(&mut app);
        assert!(app.library.is_content_ready());

        let _ = app.update(Message::Gallery(gallery::Message::Open));
        assert_eq!(app.screen, Screen::FullImage);
        assert!(app.viewer.viewport().has_frame());

        let _ = app.update(Message::Viewer(viewer::Message::Toolbar(
            toolbar::Message::FilterPressed(FilterType::GrayScale),
        )));
        assert!(app.library.is_filter_enabled(FilterType::GrayScale));

        let _ = app.update(shortcut(Shortcut::Back));
        assert_eq!(app.screen, Screen::Main);
        assert!(!app.library.is_filter_enabled(FilterType::GrayScale));
    }

    #[test]
    fn arrow_in_viewer_loads_next_image() {
        let dir = write_images(&["a.png", "b.png"]);
        let mut app = app_for(&dir);
        finish_pending_load(&mut app);
        let _ = app.update(Message::Gallery(gallery::Message::Open));

        let _ = app.update(shortcut(Shortcut::Next));
        assert!(app.library.is_loading());
        assert!(!app.viewer.viewport().has_frame());

        finish_pending_load(&mut app);
        assert_eq!(app.library.selected_image_name(), "b.png");
        assert!(app.viewer.viewport().has_frame());
    }

    #[test]
    fn stale_decode_is_ignored() {
        let dir = write_images(&["a.png", "b.png"]);
        let mut app = app_for(&dir);
        let stale = dir.path().join("b.png");
        let result = load_image(&stale);

        let _ = app.update(Message::ImageLoaded {
            path: stale,
            result,
        });

        assert!(app.library.is_loading());
        assert!(!app.library.is_content_ready());
    }
}
