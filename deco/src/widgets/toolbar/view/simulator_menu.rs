use iced::widget::{Column, Space, column, container, mouse_area, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::menu_item::{self, MenuItemProps};
use crate::shared::ui::menu_style::menu_panel_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::toolbar::event::ToolbarIntent;
use crate::widgets::toolbar::model::{MenuOption, SimulatorMenu};

const MENU_COLUMN_WIDTH: f32 = 180.0;
const MENU_CONTAINER_PADDING: f32 = 8.0;
const MENU_COLUMN_SPACING: f32 = 8.0;
const MENU_HEADER_SIZE: f32 = 11.0;
const EMPTY_PANEL_WIDTH: f32 = 260.0;
const EMPTY_TITLE: &str = "No simulators available";
const EMPTY_HINT: &str =
    "Install iOS simulators from Xcode to preview your project.";

/// Props for the simulator dropdown overlay.
pub(crate) struct SimulatorMenuProps<'a> {
    pub(crate) menu: SimulatorMenu,
    pub(crate) top_offset: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the simulator dropdown below the toolbar with a dismiss layer.
pub(crate) fn view(props: SimulatorMenuProps<'_>) -> Element<'_, ToolbarIntent> {
    let theme = props.theme;
    let palette = theme.theme.iced_palette();

    let content: Element<'_, ToolbarIntent> = match props.menu {
        SimulatorMenu::Empty => column![
            text(EMPTY_TITLE).size(13.0).color(palette.foreground),
            text(EMPTY_HINT).size(MENU_HEADER_SIZE).color(palette.dim_white),
        ]
        .spacing(4.0)
        .width(Length::Fixed(EMPTY_PANEL_WIDTH))
        .into(),
        SimulatorMenu::Columns { phones, tablets } => row![
            option_column("iPhone", phones, theme),
            option_column("iPad", tablets, theme),
        ]
        .spacing(MENU_COLUMN_SPACING)
        .into(),
    };

    let panel = container(content)
        .padding(MENU_CONTAINER_PADDING)
        .style(menu_panel_style(theme));

    let positioned = container(panel)
        .padding(iced::Padding {
            top: props.top_offset,
            ..iced::Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top);

    let dismiss_layer = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(ToolbarIntent::SimulatorMenuVisibilityChanged(false))
    .on_right_press(ToolbarIntent::SimulatorMenuVisibilityChanged(false));

    iced::widget::Stack::with_children(vec![
        dismiss_layer.into(),
        positioned.into(),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn option_column<'a>(
    header: &'a str,
    options: Vec<MenuOption>,
    theme: ThemeProps<'a>,
) -> Element<'a, ToolbarIntent> {
    let palette = theme.theme.iced_palette();
    let header = text(header).size(MENU_HEADER_SIZE).color(palette.dim_white);

    options
        .into_iter()
        .fold(Column::new().push(header), |col, option| {
            let action = option.action;
            col.push(
                menu_item::view(MenuItemProps {
                    label: option.text,
                    theme,
                })
                .map(move |_| action.clone()),
            )
        })
        .spacing(2.0)
        .width(Length::Fixed(MENU_COLUMN_WIDTH))
        .into()
}
