use iced::widget::row;
use iced::{Element, alignment};

use super::{SECTION_SPACING, intent_button};
use crate::components::primitive::toolbar_button::ButtonState;
use crate::shared::ui::theme::ThemeProps;
use crate::store::model::RightSidebarContent;
use crate::widgets::toolbar::event::{ExternalLink, ToolbarIntent};

pub(super) struct RightSectionProps<'a> {
    pub(super) console: ButtonState,
    pub(super) properties: ButtonState,
    pub(super) publishing: ButtonState,
    pub(super) discuss: ButtonState,
    pub(super) discuss_menu_open: bool,
    pub(super) theme: ThemeProps<'a>,
}

/// Console and right panel toggles, docs, then the discuss dropdown.
pub(super) fn view(props: RightSectionProps<'_>) -> Element<'_, ToolbarIntent> {
    row![
        intent_button(
            "Console",
            props.console,
            true,
            props.theme,
            ToolbarIntent::ToggleConsole,
        ),
        intent_button(
            "Properties",
            props.properties,
            true,
            props.theme,
            ToolbarIntent::SelectRightSidebar(RightSidebarContent::Properties),
        ),
        intent_button(
            "Publishing",
            props.publishing,
            true,
            props.theme,
            ToolbarIntent::SelectRightSidebar(RightSidebarContent::Publishing),
        ),
        intent_button(
            "Docs",
            ButtonState::Default,
            true,
            props.theme,
            ToolbarIntent::OpenLink(ExternalLink::Docs),
        ),
        intent_button(
            "Discuss",
            props.discuss,
            true,
            props.theme,
            ToolbarIntent::DiscussMenuVisibilityChanged(
                !props.discuss_menu_open,
            ),
        ),
    ]
    .spacing(SECTION_SPACING)
    .align_y(alignment::Vertical::Center)
    .into()
}
