// SPDX-License-Identifier: MPL-2.0
//! Directory-backed image session.
//!
//! [`ImageLibrary`] owns the ordered file list of one directory, the decoded
//! image for the current file, and the active filter selection. Decoding is
//! asynchronous: every navigation returns the path that must be loaded next
//! and the result is handed back through [`ImageLibrary::on_image_loaded`].
//! Results for a path that is no longer pending are dropped.

use super::filter::{apply_filters, FilterSettings};
use crate::application::port::ContentState;
use crate::directory_scanner::ImageList;
use crate::domain::media::{FilterSelection, FilterType, RawImage};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct ImageLibrary {
    directory: Option<PathBuf>,
    images: ImageList,
    pending: Option<PathBuf>,
    original: Option<RawImage>,
    displayed: Option<RawImage>,
    filters: FilterSelection,
    settings: FilterSettings,
    last_error: Option<Error>,
}

impl ImageLibrary {
    #[must_use]
    pub fn new(settings: FilterSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Opens a directory, or the directory containing a file.
    ///
    /// When `path` is a file the cursor starts on it, otherwise on the first
    /// image. Returns the path that must be decoded next, if any.
    pub fn open(&mut self, path: &Path) -> Result<Option<PathBuf>> {
        let (directory, images) = if path.is_dir() {
            (path.to_path_buf(), ImageList::scan_directory_direct(path)?)
        } else {
            let mut images = ImageList::scan_directory(path)?;
            if images.current().is_none() {
                images.set_current_index(0);
            }
            let directory = path
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| Error::Io("No parent directory".into()))?;
            (directory, images)
        };

        tracing::info!(
            directory = %directory.display(),
            count = images.len(),
            "opened image directory"
        );

        self.directory = Some(directory);
        self.images = images;
        self.last_error = None;
        Ok(self.begin_load())
    }

    /// Rescans the open directory, keeping the current file selected when it
    /// still exists.
    pub fn rescan(&mut self) -> Result<Option<PathBuf>> {
        let Some(directory) = self.directory.clone() else {
            return Ok(None);
        };
        let previous = self.images.current().map(Path::to_path_buf);

        let mut images = ImageList::scan_directory_direct(&directory)?;
        if let Some(index) = previous
            .as_ref()
            .and_then(|prev| images.files().iter().position(|p| p == prev))
        {
            images.set_current_index(index);
        }
        self.images = images;

        let unchanged = previous.as_deref() == self.images.current() && self.original.is_some();
        if unchanged {
            return Ok(None);
        }
        Ok(self.begin_load())
    }

    /// Selects the image at `index` in the file list.
    pub fn select(&mut self, index: usize) -> Option<PathBuf> {
        if index >= self.images.len() || self.images.current_index() == Some(index) {
            return None;
        }
        self.images.set_current_index(index);
        self.begin_load()
    }

    /// Stores the result of decoding `path`.
    ///
    /// Returns `false` when the result is stale and was discarded.
    pub fn on_image_loaded(&mut self, path: &Path, result: Result<RawImage>) -> bool {
        if self.pending.as_deref() != Some(path) {
            tracing::debug!(path = %path.display(), "discarding stale decode result");
            return false;
        }
        self.pending = None;

        match result {
            Ok(image) => {
                tracing::debug!(
                    path = %path.display(),
                    width = image.width(),
                    height = image.height(),
                    "image decoded"
                );
                self.displayed = Some(apply_filters(&image, self.filters, self.settings));
                self.original = Some(image);
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to decode image");
                self.last_error = Some(err);
            }
        }
        true
    }

    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        self.images.files()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.images.current_index()
    }

    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.images.current()
    }

    /// Returns whether a decode is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn filters(&self) -> FilterSelection {
        self.filters
    }

    /// Marks the current file as pending and drops the previous image.
    fn begin_load(&mut self) -> Option<PathBuf> {
        self.original = None;
        self.displayed = None;
        let path = self.images.current().map(Path::to_path_buf);
        self.pending.clone_from(&path);
        path
    }

    fn refresh_displayed(&mut self) {
        self.displayed = self
            .original
            .as_ref()
            .map(|original| apply_filters(original, self.filters, self.settings));
    }
}

impl ContentState for ImageLibrary {
    fn is_content_ready(&self) -> bool {
        self.pending.is_none() && self.displayed.is_some()
    }

    fn selected_image(&self) -> Option<&RawImage> {
        self.displayed.as_ref()
    }

    fn selected_image_name(&self) -> &str {
        self.images
            .current()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    fn restore_main_image(&mut self) {
        self.filters.clear();
        self.displayed.clone_from(&self.original);
    }

    fn swipe_next(&mut self) -> Option<PathBuf> {
        if self.images.len() < 2 {
            return None;
        }
        self.images.advance();
        self.begin_load()
    }

    fn swipe_previous(&mut self) -> Option<PathBuf> {
        if self.images.len() < 2 {
            return None;
        }
        self.images.retreat();
        self.begin_load()
    }

    fn toggle_filter(&mut self, filter: FilterType) {
        let enabled = self.filters.toggle(filter);
        tracing::debug!(filter = filter.label(), enabled, "filter toggled");
        self.refresh_displayed();
    }

    fn is_filter_enabled(&self, filter: FilterType) -> bool {
        self.filters.contains(filter)
    }
}
