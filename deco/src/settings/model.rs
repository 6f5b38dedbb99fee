use serde::{Deserialize, Serialize};

use crate::store::model::Simulator;

const DEFAULT_PROJECT_TITLE: &str = "Untitled Project";
const DEFAULT_TOOLBAR_HEIGHT: f32 = 72.0;
const DEFAULT_CHAT_URL: &str = "https://decoslack.slack.com/messages/deco/";
const DEFAULT_DOCS_URL: &str =
    "http://facebook.github.io/react-native/docs/view.html#content";
const DEFAULT_SIGNUP_URL: &str = "https://decoslackin.herokuapp.com/";

/// External destinations opened from the docs button and discuss menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ExternalLinks {
    pub(crate) chat: String,
    pub(crate) docs: String,
    pub(crate) signup: String,
}

impl Default for ExternalLinks {
    fn default() -> Self {
        Self {
            chat: String::from(DEFAULT_CHAT_URL),
            docs: String::from(DEFAULT_DOCS_URL),
            signup: String::from(DEFAULT_SIGNUP_URL),
        }
    }
}

/// Startup configuration read from `settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DecoSettings {
    pub(crate) project_title: String,
    pub(crate) toolbar_height: f32,
    pub(crate) simulators: Vec<String>,
    pub(crate) links: ExternalLinks,
}

impl Default for DecoSettings {
    fn default() -> Self {
        Self {
            project_title: String::from(DEFAULT_PROJECT_TITLE),
            toolbar_height: DEFAULT_TOOLBAR_HEIGHT,
            simulators: [
                "iPhone 6",
                "iPhone 6 Plus",
                "iPhone SE",
                "iPad Air 2",
                "iPad Pro",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            links: ExternalLinks::default(),
        }
    }
}

impl DecoSettings {
    /// Return the configured simulators as host devices.
    pub(crate) fn available_simulators(&self) -> Vec<Simulator> {
        self.simulators.iter().map(Simulator::new).collect()
    }

    /// Return a toolbar height that can actually host the buttons.
    pub(crate) fn toolbar_height(&self) -> f32 {
        if self.toolbar_height.is_finite() && self.toolbar_height > 0.0 {
            self.toolbar_height
        } else {
            DEFAULT_TOOLBAR_HEIGHT
        }
    }
}
