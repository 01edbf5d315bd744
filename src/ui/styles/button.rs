// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for round toolbar icons.
///
/// Hover is tracked by the owning widget rather than taken from the button
/// status, so the highlight follows the pointer over the whole hit area.
pub fn toolbar_icon(hovered: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match (hovered, status) {
            (_, button::Status::Pressed) => opacity::OVERLAY_MEDIUM,
            (true, _) => opacity::OVERLAY_SUBTLE,
            (false, _) => opacity::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for a row of the gallery file list.
pub fn list_item(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);
        let text_color = if selected {
            WHITE
        } else if is_light {
            palette::GRAY_900
        } else {
            WHITE
        };

        let background = match (selected, status) {
            (true, button::Status::Hovered) => Some(palette::PRIMARY_400),
            (true, _) => Some(palette::PRIMARY_500),
            (false, button::Status::Hovered | button::Status::Pressed) => Some(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            }),
            (false, _) => None,
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for the gallery preview, which is clickable but should not look
/// like a button.
pub fn preview(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for primary actions.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, shadow::SM),
        button::Status::Disabled => (palette::GRAY_400, shadow::NONE),
        _ => (palette::PRIMARY_500, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}
