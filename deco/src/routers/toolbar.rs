use iced::Task;

use crate::app::{App, AppEvent};
use crate::services::{Services, shell};
use crate::settings::model::ExternalLinks;
use crate::store::Store;
use crate::widgets::toolbar::{
    ExternalLink, ToolbarCtx, ToolbarEffect, ToolbarIntent,
};

/// Snapshot the store and collaborators the toolbar reducer reads.
pub(crate) fn ctx<'a>(store: &'a Store, services: &'a Services) -> ToolbarCtx<'a> {
    let ui = store.ui();
    ToolbarCtx {
        console_visible: ui.console_visible,
        project_navigator_visible: ui.project_navigator_visible,
        right_sidebar_content: ui.right_sidebar_content,
        should_open_console_for_first_time: services
            .onboarding
            .should_open_console_for_first_time(),
        last_launched_simulator: services.launch_history.simulator_launched_last(),
    }
}

/// Route a toolbar intent through the widget reducer.
pub(crate) fn route_intent(
    app: &mut App,
    intent: ToolbarIntent,
) -> Task<AppEvent> {
    let ctx = ctx(&app.store, &app.services);
    app.widgets
        .toolbar
        .reduce(intent, &ctx)
        .map(AppEvent::Toolbar)
}

/// Carry out a toolbar effect against the store and host services.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ToolbarEffect,
) -> Task<AppEvent> {
    match effect {
        ToolbarEffect::Dispatch(action) => app.store.dispatch(action),
        ToolbarEffect::OpenExternal(link) => {
            shell::open_external(link_url(&app.settings.links, link))
        },
        ToolbarEffect::RecordSimulatorLaunch { name } => {
            app.services.launch_history.did_launch_simulator(name)
        },
        ToolbarEffect::ConsoleOpenedForFirstTime => {
            app.services.onboarding.did_open_console_for_first_time()
        },
    }

    Task::none()
}

fn link_url(links: &ExternalLinks, link: ExternalLink) -> &str {
    match link {
        ExternalLink::Chat => &links.chat,
        ExternalLink::Docs => &links.docs,
        ExternalLink::Signup => &links.signup,
    }
}

#[cfg(test)]
mod tests {
    use super::{link_url, route_effect};
    use crate::app::App;
    use crate::settings::DecoSettings;
    use crate::settings::model::ExternalLinks;
    use crate::store::StoreAction;
    use crate::widgets::toolbar::{ExternalLink, ToolbarEffect};

    #[test]
    fn given_each_link_when_resolved_then_configured_url_is_used() {
        let links = ExternalLinks {
            chat: String::from("https://chat.example"),
            docs: String::from("https://docs.example"),
            signup: String::from("https://signup.example"),
        };

        assert_eq!(link_url(&links, ExternalLink::Chat), "https://chat.example");
        assert_eq!(link_url(&links, ExternalLink::Docs), "https://docs.example");
        assert_eq!(
            link_url(&links, ExternalLink::Signup),
            "https://signup.example"
        );
    }

    #[test]
    fn given_launch_effects_when_routed_then_store_and_services_are_updated() {
        let mut app = App::with_settings(DecoSettings::default());
        let name = String::from("iPhone 6");

        for effect in [
            ToolbarEffect::Dispatch(StoreAction::RunPackager),
            ToolbarEffect::Dispatch(StoreAction::RunSimulator {
                name: name.clone(),
            }),
            ToolbarEffect::RecordSimulatorLaunch { name: name.clone() },
            ToolbarEffect::Dispatch(StoreAction::SetConsoleVisibility(true)),
            ToolbarEffect::ConsoleOpenedForFirstTime,
        ] {
            let _task = route_effect(&mut app, effect);
        }

        assert!(app.store.application().simulator_project_active);
        assert!(app.store.ui().console_visible);
        assert_eq!(
            app.services.launch_history.simulator_launched_last(),
            Some("iPhone 6")
        );
        assert!(
            !app.services
                .onboarding
                .should_open_console_for_first_time()
        );
    }

    #[test]
    fn given_store_state_when_ctx_built_then_flags_are_copied() {
        let mut app = App::with_settings(DecoSettings::default());
        app.store.dispatch(StoreAction::SetConsoleVisibility(true));

        let ctx = super::ctx(&app.store, &app.services);

        assert!(ctx.console_visible);
        assert!(ctx.project_navigator_visible);
        assert!(ctx.should_open_console_for_first_time);
        assert!(ctx.last_launched_simulator.is_none());
    }
}
