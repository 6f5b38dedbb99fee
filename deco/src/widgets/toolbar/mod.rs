pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{
    ExternalLink, ToolbarEffect, ToolbarEvent, ToolbarIntent,
};
use self::model::{ToolbarProps, ToolbarViewModel};
pub(crate) use self::reducer::ToolbarCtx;
use self::state::ToolbarState;

/// Workspace toolbar owning only its dropdown state.
pub(crate) struct ToolbarWidget {
    state: ToolbarState,
}

impl ToolbarWidget {
    /// Create the toolbar with both dropdowns closed.
    pub(crate) fn new() -> Self {
        Self {
            state: ToolbarState::default(),
        }
    }

    /// Reduce an intent and emit its effects as one ordered task chain.
    pub(crate) fn reduce(
        &mut self,
        intent: ToolbarIntent,
        ctx: &ToolbarCtx<'_>,
    ) -> Task<ToolbarEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
            .into_iter()
            .map(|effect| Task::done(ToolbarEvent::Effect(effect)))
            .fold(Task::none(), Task::chain)
    }

    /// Produce the toolbar view model for the given props.
    pub(crate) fn vm(&self, props: ToolbarProps<'_>) -> ToolbarViewModel {
        ToolbarViewModel::new(
            props,
            self.state.is_simulator_menu_open(),
            self.state.is_discuss_menu_open(),
        )
    }

    /// Return whether any dropdown is currently open.
    pub(crate) fn has_open_menu(&self) -> bool {
        self.state.is_simulator_menu_open() || self.state.is_discuss_menu_open()
    }
}
