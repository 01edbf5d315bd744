// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for finding and ordering image files.
//!
//! This module scans a directory for supported image formats and keeps them in
//! case-insensitive alphabetical order with a movable cursor.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File extensions the viewer can decode.
pub const SUPPORTED_EXTENSIONS: [&str; 9] =
    ["png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "webp", "ico"];

/// Ordered list of image files in a directory with a current position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl ImageList {
    /// Creates a new empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the directory containing `current_file` and positions the cursor
    /// on it. If the file is not in the list, the cursor is unset.
    pub fn scan_directory(current_file: &Path) -> Result<Self> {
        let parent = current_file
            .parent()
            .ok_or_else(|| Error::Io("No parent directory".into()))?;

        let mut list = Self::scan_directory_direct(parent)?;
        list.current_index = list.image_files.iter().position(|p| p == current_file);
        Ok(list)
    }

    /// Scans `directory` and positions the cursor on the first image, if any.
    pub fn scan_directory_direct(directory: &Path) -> Result<Self> {
        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                image_files.push(path);
            }
        }

        sort_image_files(&mut image_files);

        let current_index = if image_files.is_empty() { None } else { Some(0) };

        Ok(Self {
            image_files,
            current_index,
        })
    }

    /// Returns the current image path.
    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.image_files.get(idx))
            .map(PathBuf::as_path)
    }

    /// Moves the cursor forward, wrapping around to the start.
    pub fn advance(&mut self) -> Option<&Path> {
        if self.image_files.is_empty() {
            return None;
        }
        let len = self.image_files.len();
        let next = match self.current_index {
            Some(idx) => (idx + 1) % len,
            None => 0,
        };
        self.current_index = Some(next);
        self.current()
    }

    /// Moves the cursor backward, wrapping around to the end.
    pub fn retreat(&mut self) -> Option<&Path> {
        if self.image_files.is_empty() {
            return None;
        }
        let len = self.image_files.len();
        let previous = match self.current_index {
            Some(idx) => (idx + len - 1) % len,
            None => len - 1,
        };
        self.current_index = Some(previous);
        self.current()
    }

    /// Positions the cursor on `index`. Out-of-range indices are ignored.
    pub fn set_current_index(&mut self, index: usize) -> Option<&Path> {
        if index < self.image_files.len() {
            self.current_index = Some(index);
        }
        self.current()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.image_files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }
}

/// Checks if a file has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn sort_image_files(image_files: &mut [PathBuf]) {
    image_files.sort_by_cached_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
}
