use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, text};
use iced::{Border, Element, Length, alignment};

use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const ROW_HEIGHT: f32 = 26.0;
const LABEL_SIZE: f32 = 13.0;
const ROW_PADDING: f32 = 10.0;
const ROW_RADIUS: f32 = 3.0;

/// Emitted when a dropdown row is picked.
#[derive(Debug, Clone)]
pub(crate) enum MenuItemEvent {
    Pressed,
}

/// Props for a dropdown row.
#[derive(Debug, Clone)]
pub(crate) struct MenuItemProps<'a> {
    pub(crate) label: String,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one selectable dropdown row, highlighted under the pointer.
pub(crate) fn view<'a>(props: MenuItemProps<'a>) -> Element<'a, MenuItemEvent> {
    let palette = props.theme.theme.iced_palette();

    let label = container(text(props.label).size(LABEL_SIZE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);

    button(label)
        .on_press(MenuItemEvent::Pressed)
        .padding([0.0, ROW_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .style(move |_, status| row_style(palette, status))
        .into()
}

fn row_style(palette: &IcedColorPalette, status: ButtonStatus) -> button::Style {
    let highlighted =
        matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);
    let (background, text_color) = if highlighted {
        (Some(palette.dim_blue.into()), palette.foreground)
    } else {
        (None, palette.dim_foreground)
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: ROW_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;
    use iced::widget::button::Status as ButtonStatus;

    use super::row_style;
    use crate::shared::ui::theme::AppTheme;

    #[test]
    fn given_pointer_over_row_when_styled_then_row_is_highlighted() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        for status in [ButtonStatus::Hovered, ButtonStatus::Pressed] {
            let style = row_style(palette, status);
            assert_eq!(
                style.background,
                Some(Background::Color(palette.dim_blue))
            );
            assert_eq!(style.text_color, palette.foreground);
        }
    }

    #[test]
    fn given_idle_row_when_styled_then_panel_shows_through() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = row_style(palette, ButtonStatus::Active);

        assert_eq!(style.background, None);
        assert_eq!(style.text_color, palette.dim_foreground);
    }
}
