// SPDX-License-Identifier: MPL-2.0
//! Toolbar above the full image: back button, image name, filter toggles.
//!
//! Hover highlight is tracked here with one flag per button and nothing else
//! is stored. Whether a filter is on is always read from the content.

use crate::application::port::ContentState;
use crate::domain::media::FilterType;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, row, text, tooltip, Space};
use iced::{alignment, Element, Length, Padding};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    back_hovered: bool,
    filter_hovered: [bool; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    BackHovered(bool),
    FilterHovered(FilterType, bool),
    BackPressed,
    FilterPressed(FilterType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Back,
    ToggleFilter(FilterType),
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::BackHovered(hovered) => {
                self.back_hovered = hovered;
                Effect::None
            }
            Message::FilterHovered(filter, hovered) => {
                self.filter_hovered[filter_index(filter)] = hovered;
                Effect::None
            }
            Message::BackPressed => Effect::Back,
            Message::FilterPressed(filter) => Effect::ToggleFilter(filter),
        }
    }

    #[must_use]
    pub fn is_back_hovered(&self) -> bool {
        self.back_hovered
    }

    #[must_use]
    pub fn is_filter_hovered(&self, filter: FilterType) -> bool {
        self.filter_hovered[filter_index(filter)]
    }

    pub fn view<'a, C: ContentState + ?Sized>(&'a self, content: &'a C) -> Element<'a, Message> {
        let back = hover_button(
            icons::sized(icons::arrow_left(), sizing::ICON_LG),
            self.back_hovered,
            Message::BackPressed,
            Message::BackHovered,
        );

        let name = container(
            text(content.selected_image_name())
                .size(typography::BODY)
                .wrapping(text::Wrapping::None),
        )
        .width(Length::Fixed(sizing::NAME_PLATE_WIDTH))
        .height(Length::Fixed(sizing::ICON_LG))
        .padding(Padding::from([0.0, spacing::XS]))
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(styles::container::name_plate);

        let mut bar = row![
            back,
            Space::new().width(Length::Fixed(spacing::LG)),
            name,
            Space::new().width(Length::Fill),
        ]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

        for filter in FilterType::ALL {
            let enabled = content.is_filter_enabled(filter);
            let icon = icons::sized(icons::filter(filter, enabled), sizing::ICON_LG);
            let toggle = hover_button(
                icon,
                self.is_filter_hovered(filter),
                Message::FilterPressed(filter),
                move |hovered| Message::FilterHovered(filter, hovered),
            );
            bar = bar.push(tooltip(
                toggle,
                text(filter.label()).size(typography::CAPTION),
                tooltip::Position::Bottom,
            ));
        }

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
            .padding(Padding::from([0.0, spacing::LG]))
            .align_y(alignment::Vertical::Center)
            .style(styles::container::toolbar)
            .into()
    }
}

/// Round icon button whose highlight follows `hovered`.
fn hover_button<'a>(
    icon: iced::widget::Svg<'static>,
    hovered: bool,
    on_press: Message,
    on_hover: impl Fn(bool) -> Message,
) -> Element<'a, Message> {
    let button = button(icon)
        .padding(0.0)
        .on_press(on_press)
        .style(styles::button::toolbar_icon(hovered));

    mouse_area(button)
        .on_enter(on_hover(true))
        .on_exit(on_hover(false))
        .into()
}

fn filter_index(filter: FilterType) -> usize {
    match filter {
        FilterType::GrayScale => 0,
        FilterType::Pixel => 1,
        FilterType::Blur => 2,
    }
}
