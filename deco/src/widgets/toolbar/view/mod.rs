mod center_section;
pub(crate) mod discuss_menu;
mod left_section;
mod right_section;
pub(crate) mod simulator_menu;
pub(crate) mod toolbar_bar;

use iced::Element;

use super::event::ToolbarIntent;
use crate::components::primitive::toolbar_button::{
    self, ButtonState, ToolbarButtonProps,
};
use crate::shared::ui::theme::ThemeProps;

pub(crate) const SECTION_SPACING: f32 = 6.0;

/// Render a toolbar button that emits `on_press` when clicked.
fn intent_button<'a>(
    label: &'a str,
    state: ButtonState,
    enabled: bool,
    theme: ThemeProps<'a>,
    on_press: ToolbarIntent,
) -> Element<'a, ToolbarIntent> {
    toolbar_button::view(ToolbarButtonProps {
        label,
        state,
        enabled,
        theme,
    })
    .map(move |_| on_press.clone())
}
