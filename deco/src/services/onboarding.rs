/// One-time onboarding milestones for the current session.
#[derive(Debug, Default)]
pub(crate) struct Onboarding {
    console_opened: bool,
}

impl Onboarding {
    /// Return `true` until the console has been revealed once.
    pub(crate) fn should_open_console_for_first_time(&self) -> bool {
        !self.console_opened
    }

    /// Mark the first console reveal as consumed.
    pub(crate) fn did_open_console_for_first_time(&mut self) {
        self.console_opened = true;
    }
}
