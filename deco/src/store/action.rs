use super::model::RightSidebarContent;

/// Actions accepted by the application store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreAction {
    Save,
    RunSimulator { name: String },
    RunPackager,
    SetConsoleVisibility(bool),
    SetLeftSidebarVisibility(bool),
    SetRightSidebarContent(RightSidebarContent),
}
