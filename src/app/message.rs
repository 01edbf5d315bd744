// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::media::RawImage;
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Viewer(viewer::Message),
    /// Result of decoding `path` on the blocking pool.
    ImageLoaded {
        path: PathBuf,
        result: Result<RawImage, Error>,
    },
    /// Spinner animation tick while a decode is in flight.
    SpinnerTick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional image or directory to open on startup.
    pub path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PHOTO_VIEWER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Theme override; the configured theme is used otherwise.
    pub theme: Option<ThemeMode>,
}
