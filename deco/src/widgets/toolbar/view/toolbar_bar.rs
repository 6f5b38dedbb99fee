use iced::widget::{Space, container, row};
use iced::{Element, Length, alignment};

use super::center_section::{self, CenterSectionProps};
use super::left_section::{self, LeftSectionProps};
use super::right_section::{self, RightSectionProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::toolbar::event::ToolbarIntent;
use crate::widgets::toolbar::model::ToolbarViewModel;

const TOOLBAR_HORIZONTAL_PADDING: f32 = 12.0;

/// Props for rendering the toolbar bar.
pub(crate) struct ToolbarBarProps<'a> {
    pub(crate) vm: ToolbarViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the toolbar: left, center and right sections across the window.
pub(crate) fn view(props: ToolbarBarProps<'_>) -> Element<'_, ToolbarIntent> {
    let vm = props.vm;
    let palette = props.theme.theme.iced_palette();
    let background = palette.dim_black;

    let left = left_section::view(LeftSectionProps {
        navigator: vm.navigator_button,
        theme: props.theme,
    });

    let center = center_section::view(CenterSectionProps {
        title: vm.title,
        simulator: vm.simulator_button,
        simulator_menu_open: vm.simulator_menu_open,
        packager: vm.packager_button,
        can_rerun: vm.rerun_target.is_some(),
        theme: props.theme,
        fonts: props.fonts,
    });

    let right = right_section::view(RightSectionProps {
        console: vm.console_button,
        properties: vm.properties_button,
        publishing: vm.publishing_button,
        discuss: vm.discuss_button,
        discuss_menu_open: vm.discuss_menu_open,
        theme: props.theme,
    });

    let content = row![
        left,
        Space::new().width(Length::Fill),
        center,
        Space::new().width(Length::Fill),
        right,
    ]
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(vm.height))
        .padding([0.0, TOOLBAR_HORIZONTAL_PADDING])
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}
