/// Content shown in the right sidebar. At most one panel is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum RightSidebarContent {
    #[default]
    None,
    Properties,
    Publishing,
}

/// Lifecycle of a background process driven by the build pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ProcessStatus {
    #[default]
    Off,
    Pending,
    On,
}

/// A simulator device reported by the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Simulator {
    name: String,
}

impl Simulator {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

/// Panel visibility owned by the workspace layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UiState {
    pub(crate) console_visible: bool,
    pub(crate) project_navigator_visible: bool,
    pub(crate) right_sidebar_content: RightSidebarContent,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            console_visible: false,
            project_navigator_visible: true,
            right_sidebar_content: RightSidebarContent::None,
        }
    }
}

/// Project and build pipeline state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApplicationState {
    pub(crate) project_title: String,
    pub(crate) is_temp_project: bool,
    pub(crate) packager_status: ProcessStatus,
    pub(crate) simulator_project_active: bool,
    pub(crate) active_simulator: Option<String>,
    pub(crate) available_simulators: Vec<Simulator>,
}

impl ApplicationState {
    pub(crate) fn new(
        project_title: String,
        available_simulators: Vec<Simulator>,
    ) -> Self {
        Self {
            project_title,
            is_temp_project: true,
            packager_status: ProcessStatus::Off,
            simulator_project_active: false,
            active_simulator: None,
            available_simulators,
        }
    }
}
