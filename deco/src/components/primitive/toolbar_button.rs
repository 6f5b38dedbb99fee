use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, text};
use iced::{Border, Element, Length, alignment};

use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const TOOLBAR_BUTTON_HEIGHT: f32 = 32.0;
const TOOLBAR_BUTTON_FONT_SIZE: f32 = 12.0;
const TOOLBAR_BUTTON_HORIZONTAL_PADDING: f32 = 10.0;
const TOOLBAR_BUTTON_RADIUS: f32 = 4.0;

/// Visual state of a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonState {
    Default,
    Active,
}

impl From<bool> for ButtonState {
    fn from(active: bool) -> Self {
        if active {
            ButtonState::Active
        } else {
            ButtonState::Default
        }
    }
}

/// UI events emitted by a toolbar button.
#[derive(Debug, Clone)]
pub(crate) enum ToolbarButtonEvent {
    Pressed,
}

/// Props for rendering a toolbar button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToolbarButtonProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) state: ButtonState,
    pub(crate) enabled: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a labelled toolbar button.
pub(crate) fn view<'a>(
    props: ToolbarButtonProps<'a>,
) -> Element<'a, ToolbarButtonEvent> {
    let palette = props.theme.theme.iced_palette().clone();
    let state = props.state;

    let label = container(text(props.label).size(TOOLBAR_BUTTON_FONT_SIZE))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(label)
        .on_press_maybe(props.enabled.then_some(ToolbarButtonEvent::Pressed))
        .padding([0.0, TOOLBAR_BUTTON_HORIZONTAL_PADDING])
        .height(Length::Fixed(TOOLBAR_BUTTON_HEIGHT))
        .style(move |_, status| toolbar_button_style(&palette, state, status))
        .into()
}

fn toolbar_button_style(
    palette: &IcedColorPalette,
    state: ButtonState,
    status: ButtonStatus,
) -> button::Style {
    let (background, text_color) = match (state, status) {
        (_, ButtonStatus::Disabled) => (None, palette.dim_white),
        (ButtonState::Active, _) => {
            (Some(palette.dim_blue.into()), palette.foreground)
        },
        (ButtonState::Default, ButtonStatus::Hovered | ButtonStatus::Pressed) => {
            (Some(palette.overlay.into()), palette.blue)
        },
        (ButtonState::Default, _) => (None, palette.dim_foreground),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: TOOLBAR_BUTTON_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}
