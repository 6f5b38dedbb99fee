/// Dropdown visibility owned by the toolbar instance.
#[derive(Debug, Default)]
pub(super) struct ToolbarState {
    discuss_menu_open: bool,
    simulator_menu_open: bool,
}

impl ToolbarState {
    pub(super) fn is_discuss_menu_open(&self) -> bool {
        self.discuss_menu_open
    }

    pub(super) fn is_simulator_menu_open(&self) -> bool {
        self.simulator_menu_open
    }

    pub(super) fn set_discuss_menu_visibility(&mut self, open: bool) {
        self.discuss_menu_open = open;
        if open {
            self.simulator_menu_open = false;
        }
    }

    pub(super) fn set_simulator_menu_visibility(&mut self, open: bool) {
        self.simulator_menu_open = open;
        if open {
            self.discuss_menu_open = false;
        }
    }

    pub(super) fn close_menus(&mut self) {
        self.discuss_menu_open = false;
        self.simulator_menu_open = false;
    }
}
