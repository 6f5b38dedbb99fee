mod launch_history;
mod onboarding;
pub(crate) mod shell;

pub(crate) use launch_history::LaunchHistory;
pub(crate) use onboarding::Onboarding;

/// Host collaborators consulted by the toolbar flows.
#[derive(Debug, Default)]
pub(crate) struct Services {
    pub(crate) onboarding: Onboarding,
    pub(crate) launch_history: LaunchHistory,
}
