use iced::Task;

use super::{App, AppEvent};
use crate::guards::{MenuGuard, menu_guard};
use crate::routers;
use crate::widgets::toolbar::ToolbarIntent;

/// Apply the dropdown guard, then route the event to its owner.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    if !app.widgets.toolbar.has_open_menu() {
        return routers::route(app, event);
    }

    match menu_guard(&event) {
        MenuGuard::Allow => routers::route(app, event),
        MenuGuard::Ignore => Task::none(),
        MenuGuard::Dismiss => {
            let dismiss = close_menus(app);
            Task::batch([dismiss, routers::route(app, event)])
        },
    }
}

fn close_menus(app: &mut App) -> Task<AppEvent> {
    let ctx = routers::toolbar::ctx(&app.store, &app.services);
    app.widgets
        .toolbar
        .reduce(ToolbarIntent::DismissMenus, &ctx)
        .map(AppEvent::Toolbar)
}
