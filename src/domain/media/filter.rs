// SPDX-License-Identifier: MPL-2.0
//! Image filter identifiers and the set of active filters.
//!
//! Only the identity and ordering of filters lives here. Pixel processing
//! is done by the media layer.

/// Filters that can be toggled on the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterType {
    GrayScale,
    Pixel,
    Blur,
}

impl FilterType {
    /// All filters, in the order they are applied and displayed.
    pub const ALL: [FilterType; 3] = [FilterType::GrayScale, FilterType::Pixel, FilterType::Blur];

    /// Human-readable label used for tooltips and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FilterType::GrayScale => "Grayscale",
            FilterType::Pixel => "Pixelate",
            FilterType::Blur => "Blur",
        }
    }

    fn bit(self) -> u8 {
        match self {
            FilterType::GrayScale => 0b001,
            FilterType::Pixel => 0b010,
            FilterType::Blur => 0b100,
        }
    }
}

/// Set of active filters.
///
/// Iteration always follows [`FilterType::ALL`] order, independent of the
/// order in which filters were enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    bits: u8,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `filter` is active.
    #[must_use]
    pub fn contains(self, filter: FilterType) -> bool {
        self.bits & filter.bit() != 0
    }

    /// Flips membership of `filter`. Returns the new state.
    pub fn toggle(&mut self, filter: FilterType) -> bool {
        self.bits ^= filter.bit();
        self.contains(filter)
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Active filters in application order.
    pub fn iter(self) -> impl Iterator<Item = FilterType> {
        FilterType::ALL
            .into_iter()
            .filter(move |filter| self.contains(*filter))
    }
}
