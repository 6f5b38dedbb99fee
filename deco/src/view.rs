use iced::widget::{Row, Space, column, container, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::shared::ui::theme::ThemeProps;
use crate::store::model::{ProcessStatus, RightSidebarContent};
use crate::widgets::toolbar::ToolbarEvent;
use crate::widgets::toolbar::model::ToolbarProps;
use crate::widgets::toolbar::view::discuss_menu::{self, DiscussMenuProps};
use crate::widgets::toolbar::view::simulator_menu::{
    self, SimulatorMenuProps,
};
use crate::widgets::toolbar::view::toolbar_bar::{self, ToolbarBarProps};

const HEADER_SEPARATOR_HEIGHT: f32 = 1.0;
const SEPARATOR_ALPHA: f32 = 0.3;
const NAVIGATOR_WIDTH: f32 = 240.0;
const RIGHT_PANEL_WIDTH: f32 = 280.0;
const CONSOLE_HEIGHT: f32 = 160.0;
const PANEL_PADDING: f32 = 10.0;
const PANEL_TITLE_SIZE: f32 = 12.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);
    let vm = app.widgets.toolbar.vm(toolbar_props(app));
    let header_height = vm.height + HEADER_SEPARATOR_HEIGHT;

    let mut overlays: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        Vec::new();
    if vm.simulator_menu_open {
        overlays.push(
            simulator_menu::view(SimulatorMenuProps {
                menu: vm.simulator_menu.clone(),
                top_offset: header_height,
                theme: theme_props,
            })
            .map(toolbar_intent),
        );
    }
    if vm.discuss_menu_open {
        overlays.push(
            discuss_menu::view(DiscussMenuProps {
                options: vm.discuss_options.clone(),
                top_offset: header_height,
                theme: theme_props,
            })
            .map(toolbar_intent),
        );
    }

    let toolbar = toolbar_bar::view(ToolbarBarProps {
        vm,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(toolbar_intent);

    let root = column![toolbar, separator(theme_props), view_body(app, theme_props)]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![root.into()];
    layers.extend(overlays);

    iced::widget::Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Derive the toolbar props from the store and launch history.
fn toolbar_props(app: &App) -> ToolbarProps<'_> {
    let ui = app.store.ui();
    let application = app.store.application();

    ToolbarProps {
        title: &application.project_title,
        height: app.settings.toolbar_height(),
        is_temp_project: application.is_temp_project,
        console_visible: ui.console_visible,
        project_navigator_visible: ui.project_navigator_visible,
        right_sidebar_content: ui.right_sidebar_content,
        simulator_project_active: application.simulator_project_active,
        available_simulators: &application.available_simulators,
        packager_status: application.packager_status,
        last_launched_simulator: app
            .services
            .launch_history
            .simulator_launched_last(),
    }
}

fn toolbar_intent(
    intent: crate::widgets::toolbar::ToolbarIntent,
) -> AppEvent {
    AppEvent::Toolbar(ToolbarEvent::Intent(intent))
}

/// Render the workspace panels according to the store layout state.
fn view_body<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let ui = app.store.ui();
    let application = app.store.application();

    let mut editor_column = column![panel(
        "Editor",
        String::from("Open a file from the project navigator."),
        Length::Fill,
        Length::Fill,
        theme_props,
    )];
    if ui.console_visible {
        editor_column = editor_column.push(panel(
            "Console",
            console_text(
                application.packager_status,
                application.active_simulator.as_deref(),
            ),
            Length::Fill,
            Length::Fixed(CONSOLE_HEIGHT),
            theme_props,
        ));
    }

    let mut body = Row::new();
    if ui.project_navigator_visible {
        body = body.push(panel(
            "Project",
            application.project_title.clone(),
            Length::Fixed(NAVIGATOR_WIDTH),
            Length::Fill,
            theme_props,
        ));
    }
    body = body.push(editor_column.width(Length::Fill).height(Length::Fill));

    let right_panel = match ui.right_sidebar_content {
        RightSidebarContent::None => None,
        RightSidebarContent::Properties => {
            Some(("Properties", "Select a component to edit its props."))
        },
        RightSidebarContent::Publishing => {
            Some(("Publishing", "Share components with your team."))
        },
    };
    if let Some((title, body_text)) = right_panel {
        body = body.push(panel(
            title,
            String::from(body_text),
            Length::Fixed(RIGHT_PANEL_WIDTH),
            Length::Fill,
            theme_props,
        ));
    }

    body.width(Length::Fill).height(Length::Fill).into()
}

fn console_text(packager: ProcessStatus, simulator: Option<&str>) -> String {
    let packager = match packager {
        ProcessStatus::Off => "stopped",
        ProcessStatus::Pending => "starting",
        ProcessStatus::On => "running",
    };
    let simulator = simulator.unwrap_or("none");

    format!("packager: {packager}\nsimulator: {simulator}")
}

fn panel<'a>(
    title: &'a str,
    body: String,
    width: Length,
    height: Length,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();
    let border_color = {
        let mut color = palette.dim_white;
        color.a = SEPARATOR_ALPHA;
        color
    };

    let content = column![
        text(title).size(PANEL_TITLE_SIZE).color(palette.dim_white),
        text(body).color(palette.foreground),
    ]
    .spacing(6.0);

    container(content)
        .padding(PANEL_PADDING)
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.background.into()),
            border: iced::Border {
                width: 1.0,
                color: border_color,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn separator<'a>(
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();

    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_SEPARATOR_HEIGHT))
        .style(move |_| {
            let mut background = palette.dim_white;
            background.a = SEPARATOR_ALPHA;
            iced::widget::container::Style {
                background: Some(background.into()),
                ..Default::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::{console_text, toolbar_props};
    use crate::app::App;
    use crate::settings::DecoSettings;
    use crate::store::StoreAction;
    use crate::store::model::ProcessStatus;

    #[test]
    fn given_fresh_app_when_props_derived_then_project_is_temporary() {
        let app = App::with_settings(DecoSettings::default());

        let props = toolbar_props(&app);

        assert!(props.is_temp_project);
        assert_eq!(props.title, DecoSettings::default().project_title);
        assert_eq!(props.available_simulators.len(), 5);
    }

    #[test]
    fn given_saved_project_when_props_derived_then_flag_is_cleared() {
        let mut app = App::with_settings(DecoSettings::default());
        app.store.dispatch(StoreAction::Save);

        assert!(!toolbar_props(&app).is_temp_project);
    }

    #[test]
    fn given_running_pipeline_when_console_rendered_then_status_is_listed() {
        assert_eq!(
            console_text(ProcessStatus::On, Some("iPad Pro")),
            "packager: running\nsimulator: iPad Pro"
        );
    }
}
