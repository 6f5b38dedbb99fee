use super::event::{ToolbarEffect, ToolbarIntent};
use super::state::ToolbarState;
use crate::store::StoreAction;
use crate::store::model::RightSidebarContent;

/// Read-only context for toolbar reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToolbarCtx<'a> {
    pub(crate) console_visible: bool,
    pub(crate) project_navigator_visible: bool,
    pub(crate) right_sidebar_content: RightSidebarContent,
    pub(crate) should_open_console_for_first_time: bool,
    pub(crate) last_launched_simulator: Option<&'a str>,
}

/// Reduce a toolbar intent into local state updates and ordered effects.
pub(crate) fn reduce(
    state: &mut ToolbarState,
    intent: ToolbarIntent,
    ctx: &ToolbarCtx<'_>,
) -> Vec<ToolbarEffect> {
    match intent {
        ToolbarIntent::ToggleProjectNavigator => {
            vec![ToolbarEffect::Dispatch(StoreAction::SetLeftSidebarVisibility(
                !ctx.project_navigator_visible,
            ))]
        },
        ToolbarIntent::Save => vec![ToolbarEffect::Dispatch(StoreAction::Save)],
        ToolbarIntent::ToggleConsole => {
            vec![ToolbarEffect::Dispatch(StoreAction::SetConsoleVisibility(
                !ctx.console_visible,
            ))]
        },
        ToolbarIntent::SelectRightSidebar(content) => {
            let next = if ctx.right_sidebar_content == content {
                RightSidebarContent::None
            } else {
                content
            };
            vec![ToolbarEffect::Dispatch(
                StoreAction::SetRightSidebarContent(next),
            )]
        },
        ToolbarIntent::RunPackager => {
            vec![ToolbarEffect::Dispatch(StoreAction::RunPackager)]
        },
        ToolbarIntent::LaunchSimulator { name } => {
            state.set_simulator_menu_visibility(false);
            launch_simulator(name, ctx)
        },
        ToolbarIntent::RerunLastSimulator => ctx
            .last_launched_simulator
            .map(|name| {
                vec![ToolbarEffect::Dispatch(StoreAction::RunSimulator {
                    name: name.to_owned(),
                })]
            })
            .unwrap_or_default(),
        ToolbarIntent::SimulatorMenuVisibilityChanged(open) => {
            state.set_simulator_menu_visibility(open);
            Vec::new()
        },
        ToolbarIntent::DiscussMenuVisibilityChanged(open) => {
            state.set_discuss_menu_visibility(open);
            Vec::new()
        },
        ToolbarIntent::DismissMenus => {
            state.close_menus();
            Vec::new()
        },
        ToolbarIntent::OpenLink(link) => {
            state.set_discuss_menu_visibility(false);
            vec![ToolbarEffect::OpenExternal(link)]
        },
    }
}

/// Build, then run, then record; reveal the console on the first launch only.
fn launch_simulator(name: String, ctx: &ToolbarCtx<'_>) -> Vec<ToolbarEffect> {
    let mut effects = vec![
        ToolbarEffect::Dispatch(StoreAction::RunPackager),
        ToolbarEffect::Dispatch(StoreAction::RunSimulator {
            name: name.clone(),
        }),
        ToolbarEffect::RecordSimulatorLaunch { name },
    ];

    if ctx.should_open_console_for_first_time {
        effects.push(ToolbarEffect::Dispatch(
            StoreAction::SetConsoleVisibility(true),
        ));
        effects.push(ToolbarEffect::ConsoleOpenedForFirstTime);
    }

    effects
}
