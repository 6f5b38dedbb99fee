use iced::widget::{column, row, text};
use iced::{Element, alignment};

use super::{SECTION_SPACING, intent_button};
use crate::components::primitive::toolbar_button::ButtonState;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::toolbar::event::ToolbarIntent;

const TITLE_SCALE: f32 = 0.9;
const TITLE_SPACING: f32 = 4.0;

pub(super) struct CenterSectionProps<'a> {
    pub(super) title: String,
    pub(super) simulator: ButtonState,
    pub(super) simulator_menu_open: bool,
    pub(super) packager: ButtonState,
    pub(super) can_rerun: bool,
    pub(super) theme: ThemeProps<'a>,
    pub(super) fonts: &'a FontsConfig,
}

/// Project title above the simulator and packager controls.
pub(super) fn view(props: CenterSectionProps<'_>) -> Element<'_, ToolbarIntent> {
    let palette = props.theme.theme.iced_palette();

    let title = text(props.title)
        .size(props.fonts.ui.size * TITLE_SCALE)
        .font(props.fonts.ui.font_type)
        .color(palette.foreground);

    let controls = row![
        intent_button(
            "Simulator",
            props.simulator,
            true,
            props.theme,
            ToolbarIntent::SimulatorMenuVisibilityChanged(
                !props.simulator_menu_open,
            ),
        ),
        intent_button(
            "Re-run",
            ButtonState::Default,
            props.can_rerun,
            props.theme,
            ToolbarIntent::RerunLastSimulator,
        ),
        intent_button(
            "Packager",
            props.packager,
            true,
            props.theme,
            ToolbarIntent::RunPackager,
        ),
    ]
    .spacing(SECTION_SPACING)
    .align_y(alignment::Vertical::Center);

    column![title, controls]
        .spacing(TITLE_SPACING)
        .align_x(alignment::Horizontal::Center)
        .into()
}
