#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};

use crate::services::Services;
use crate::settings::{self, DecoSettings};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::AppTheme;
use crate::store::Store;
use crate::store::model::ApplicationState;
use crate::widgets::toolbar::{ToolbarEvent, ToolbarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 960.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Toolbar widget
    Toolbar(ToolbarEvent),
    // Direct operations
    Keyboard(iced::keyboard::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) toolbar: ToolbarWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) settings: DecoSettings,
    pub(crate) theme: AppTheme,
    pub(crate) fonts: FontsConfig,
    pub(crate) store: Store,
    pub(crate) services: Services,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        (Self::with_settings(settings::load()), Task::none())
    }

    /// Build the application around already resolved settings.
    pub(crate) fn with_settings(settings: DecoSettings) -> Self {
        let application = ApplicationState::new(
            settings.project_title.clone(),
            settings.available_simulators(),
        );

        Self {
            settings,
            theme: AppTheme::default(),
            fonts: FontsConfig::default(),
            store: Store::new(application),
            services: Services::default(),
            widgets: Widgets {
                toolbar: ToolbarWidget::new(),
            },
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        format!("Deco - {}", self.store.application().project_title)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
