use iced::keyboard::{self, Key, Modifiers, key};

use crate::app::AppEvent;
use crate::routers::keyboard_shortcut;
use crate::widgets::toolbar::{ExternalLink, ToolbarEvent, ToolbarIntent};

/// Determines how the event loop should treat an incoming event when a
/// toolbar dropdown is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event without closing the menu.
    Ignore,
    /// Close all dropdowns before dispatching.
    Dismiss,
}

/// Classify an incoming event while at least one dropdown is open.
pub(crate) fn menu_guard(event: &AppEvent) -> MenuGuard {
    use MenuGuard::*;

    match event {
        AppEvent::Toolbar(ToolbarEvent::Intent(intent)) => match intent {
            ToolbarIntent::SimulatorMenuVisibilityChanged(_)
            | ToolbarIntent::DiscussMenuVisibilityChanged(_)
            | ToolbarIntent::DismissMenus
            | ToolbarIntent::LaunchSimulator { .. }
            | ToolbarIntent::OpenLink(ExternalLink::Chat | ExternalLink::Signup) => {
                Allow
            },
            _ => Dismiss,
        },
        AppEvent::Toolbar(ToolbarEvent::Effect(_)) => Allow,
        AppEvent::Keyboard(keyboard::Event::KeyPressed {
            key, modifiers, ..
        }) => key_guard(key, *modifiers),
        AppEvent::Keyboard(_) => Ignore,
    }
}

/// Escape and toolbar shortcuts close open dropdowns; other keys are dropped.
fn key_guard(key: &Key, modifiers: Modifiers) -> MenuGuard {
    if matches!(key, Key::Named(key::Named::Escape))
        || keyboard_shortcut(key, modifiers).is_some()
    {
        MenuGuard::Dismiss
    } else {
        MenuGuard::Ignore
    }
}
