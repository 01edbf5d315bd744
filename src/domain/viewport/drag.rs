// SPDX-License-Identifier: MPL-2.0
//! Accumulated pan offset for the image viewport.

use std::ops::{Add, AddAssign};

/// A 2D displacement in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragOffset {
    pub x: f32,
    pub y: f32,
}

impl DragOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for DragOffset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for DragOffset {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Sums the pointer deltas of drag gestures since the last reset.
///
/// The stored amount is also rewritten by
/// [`CropCalculator::compute`](super::CropCalculator::compute) when a pan would leave the
/// image, so later deltas accumulate from the clamped position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragHandler {
    amount: DragOffset,
}

impl DragHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one incremental pointer-move delta.
    pub fn on_drag(&mut self, delta: DragOffset) {
        self.amount += delta;
    }

    /// Returns the accumulated offset.
    #[must_use]
    pub fn amount(&self) -> DragOffset {
        self.amount
    }

    /// Mutable access for boundary correction.
    pub fn amount_mut(&mut self) -> &mut DragOffset {
        &mut self.amount
    }

    /// Clears the accumulated offset.
    pub fn reset(&mut self) {
        self.amount = DragOffset::ZERO;
    }
}
