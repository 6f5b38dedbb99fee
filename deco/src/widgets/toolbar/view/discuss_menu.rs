use iced::widget::{Column, Space, container, mouse_area};
use iced::{Element, Length, alignment};

use crate::components::primitive::menu_item::{self, MenuItemProps};
use crate::shared::ui::menu_style::menu_panel_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::toolbar::event::ToolbarIntent;
use crate::widgets::toolbar::model::MenuOption;

const MENU_WIDTH: f32 = 220.0;
const MENU_CONTAINER_PADDING: f32 = 8.0;
const MENU_RIGHT_MARGIN: f32 = 12.0;

/// Props for the discuss dropdown overlay.
pub(crate) struct DiscussMenuProps<'a> {
    pub(crate) options: Vec<MenuOption>,
    pub(crate) top_offset: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the discuss dropdown anchored to the right edge of the toolbar.
pub(crate) fn view(props: DiscussMenuProps<'_>) -> Element<'_, ToolbarIntent> {
    let theme = props.theme;

    let items = props
        .options
        .into_iter()
        .fold(Column::new(), |col, option| {
            let action = option.action;
            col.push(
                menu_item::view(MenuItemProps {
                    label: option.text,
                    theme,
                })
                .map(move |_| action.clone()),
            )
        })
        .spacing(0)
        .width(Length::Fill);

    let panel = container(items)
        .width(Length::Fixed(MENU_WIDTH))
        .padding([MENU_CONTAINER_PADDING, 0.0])
        .style(menu_panel_style(theme));

    let positioned = container(panel)
        .padding(iced::Padding {
            top: props.top_offset,
            right: MENU_RIGHT_MARGIN,
            ..iced::Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    let dismiss_layer = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(ToolbarIntent::DiscussMenuVisibilityChanged(false))
    .on_right_press(ToolbarIntent::DiscussMenuVisibilityChanged(false));

    iced::widget::Stack::with_children(vec![
        dismiss_layer.into(),
        positioned.into(),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
