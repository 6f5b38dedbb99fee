use iced::widget::row;
use iced::{Element, alignment};

use super::{SECTION_SPACING, intent_button};
use crate::components::primitive::toolbar_button::ButtonState;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::toolbar::event::ToolbarIntent;

pub(super) struct LeftSectionProps<'a> {
    pub(super) navigator: ButtonState,
    pub(super) theme: ThemeProps<'a>,
}

/// Project navigator toggle and save.
pub(super) fn view(props: LeftSectionProps<'_>) -> Element<'_, ToolbarIntent> {
    row![
        intent_button(
            "Project",
            props.navigator,
            true,
            props.theme,
            ToolbarIntent::ToggleProjectNavigator,
        ),
        intent_button(
            "Save",
            ButtonState::Default,
            true,
            props.theme,
            ToolbarIntent::Save,
        ),
    ]
    .spacing(SECTION_SPACING)
    .align_y(alignment::Vertical::Center)
    .into()
}
