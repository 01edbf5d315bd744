// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toolbar strip above the full image.
pub fn toolbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::TOOLBAR)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Translucent plate behind the image name.
pub fn name_plate(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAME_PLATE)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Surface behind the displayed image.
pub fn image_surface(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(base)),
        ..Default::default()
    }
}

/// Generic panel surface for the gallery sidebar.
///
/// Derived from the active theme background so it reads well in both modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let weak = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color { a: 0.95, ..weak })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
