/// Tracks which simulator was launched most recently.
#[derive(Debug, Default)]
pub(crate) struct LaunchHistory {
    last: Option<String>,
}

impl LaunchHistory {
    pub(crate) fn did_launch_simulator(&mut self, name: String) {
        self.last = Some(name);
    }

    pub(crate) fn simulator_launched_last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
