mod action;
pub(crate) mod model;

pub(crate) use action::StoreAction;
use model::{ApplicationState, ProcessStatus, UiState};

/// Application store: the single source of workspace and pipeline state.
#[derive(Debug, Clone)]
pub(crate) struct Store {
    ui: UiState,
    application: ApplicationState,
}

impl Store {
    pub(crate) fn new(application: ApplicationState) -> Self {
        Self {
            ui: UiState::default(),
            application,
        }
    }

    pub(crate) fn ui(&self) -> &UiState {
        &self.ui
    }

    pub(crate) fn application(&self) -> &ApplicationState {
        &self.application
    }

    /// Apply an action to the store.
    pub(crate) fn dispatch(&mut self, action: StoreAction) {
        log::debug!("store dispatch: {action:?}");

        match action {
            StoreAction::Save => {
                self.application.is_temp_project = false;
                log::info!(
                    "project saved: {}",
                    self.application.project_title
                );
            },
            StoreAction::RunPackager => {
                self.application.packager_status = ProcessStatus::On;
            },
            StoreAction::RunSimulator { name } => {
                log::info!("simulator requested: {name}");
                self.application.simulator_project_active = true;
                self.application.active_simulator = Some(name);
            },
            StoreAction::SetConsoleVisibility(visible) => {
                self.ui.console_visible = visible;
            },
            StoreAction::SetLeftSidebarVisibility(visible) => {
                self.ui.project_navigator_visible = visible;
            },
            StoreAction::SetRightSidebarContent(content) => {
                self.ui.right_sidebar_content = content;
            },
        }
    }
}
