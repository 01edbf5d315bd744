// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component driven by keyboard shortcuts.

use crate::domain::viewport::{ScaleHandler, ZoomSteps};

/// Zoom sub-component state.
/// Wraps the [`ScaleHandler`] together with the configured shortcut steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    scale: ScaleHandler,
    steps: ZoomSteps,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Multiply the factor by the zoom-in step.
    ZoomIn,
    /// Multiply the factor by the zoom-out step.
    ZoomOut,
    /// Return to the default factor.
    Reset,
}

/// Effects produced by zoom operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// The factor changed to the given value.
    ScaleChanged(f32),
}

impl State {
    #[must_use]
    pub fn new(steps: ZoomSteps) -> Self {
        Self {
            scale: ScaleHandler::new(),
            steps,
        }
    }

    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ZoomIn => self.scale.on_scale(self.steps.zoom_in()),
            Message::ZoomOut => self.scale.on_scale(self.steps.zoom_out()),
            Message::Reset => self.scale.reset_factor(),
        }
        Effect::ScaleChanged(self.scale.factor())
    }

    #[must_use]
    pub fn factor(&self) -> f32 {
        self.scale.factor()
    }

    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.scale.is_zoomed_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn zoom_in_uses_configured_step() {
        let mut state = State::new(ZoomSteps::new(2.0, 0.5));
        let effect = state.handle(Message::ZoomIn);
        assert_eq!(effect, Effect::ScaleChanged(2.0));
        assert!(state.is_zoomed_in());
    }

    #[test]
    fn zoom_in_then_out_with_defaults() {
        let mut state = State::default();
        state.handle(Message::ZoomIn);
        state.handle(Message::ZoomOut);
        assert_abs_diff_eq!(state.factor(), 0.96, epsilon = F32_EPSILON);
    }

    #[test]
    fn reset_returns_to_one() {
        let mut state = State::default();
        state.handle(Message::ZoomIn);
        state.handle(Message::ZoomIn);
        let effect = state.handle(Message::Reset);
        assert_eq!(effect, Effect::ScaleChanged(1.0));
        assert!(!state.is_zoomed_in());
    }
}
