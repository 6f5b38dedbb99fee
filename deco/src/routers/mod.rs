use iced::Task;
use iced::keyboard::{self, Key, Modifiers};

use crate::app::{App, AppEvent};
use crate::widgets::toolbar::{ToolbarEvent, ToolbarIntent};

pub(crate) mod toolbar;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Toolbar widget
        AppEvent::Toolbar(ToolbarEvent::Intent(intent)) => {
            toolbar::route_intent(app, intent)
        },
        AppEvent::Toolbar(ToolbarEvent::Effect(effect)) => {
            toolbar::route_effect(app, effect)
        },
        // Direct operations
        AppEvent::Keyboard(event) => route_keyboard(event),
    }
}

fn route_keyboard(event: keyboard::Event) -> Task<AppEvent> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Task::none();
    };

    match keyboard_shortcut(&key, modifiers) {
        Some(intent) => {
            Task::done(AppEvent::Toolbar(ToolbarEvent::Intent(intent)))
        },
        None => Task::none(),
    }
}

/// Map a key chord to the toolbar intent it triggers, if any.
pub(crate) fn keyboard_shortcut(
    key: &Key,
    modifiers: Modifiers,
) -> Option<ToolbarIntent> {
    match key {
        Key::Character(c)
            if modifiers.command() && c.eq_ignore_ascii_case("s") =>
        {
            Some(ToolbarIntent::Save)
        },
        _ => None,
    }
}
