use crate::store::StoreAction;
use crate::store::model::RightSidebarContent;

/// Destinations reachable from the discuss menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExternalLink {
    Chat,
    Docs,
    Signup,
}

/// Intent events handled by the toolbar views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ToolbarIntent {
    ToggleProjectNavigator,
    Save,
    ToggleConsole,
    SelectRightSidebar(RightSidebarContent),
    RunPackager,
    LaunchSimulator { name: String },
    RerunLastSimulator,
    SimulatorMenuVisibilityChanged(bool),
    DiscussMenuVisibilityChanged(bool),
    DismissMenus,
    OpenLink(ExternalLink),
}

/// Effect events produced by the toolbar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ToolbarEffect {
    /// Forward an action to the application store.
    Dispatch(StoreAction),
    /// Open a link with the desktop's default handler.
    OpenExternal(ExternalLink),
    /// Remember the simulator for the re-run button.
    RecordSimulatorLaunch { name: String },
    /// Consume the one-time console reveal.
    ConsoleOpenedForFirstTime,
}

/// Toolbar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ToolbarEvent {
    /// Intent event reduced by the toolbar widget.
    Intent(ToolbarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ToolbarEffect),
}
