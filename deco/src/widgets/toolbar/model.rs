use super::event::{ExternalLink, ToolbarIntent};
use crate::components::primitive::toolbar_button::ButtonState;
use crate::store::model::{ProcessStatus, RightSidebarContent, Simulator};

pub(crate) const TEMPORARY_TITLE_SUFFIX: &str = " (Temporary until saved)";
const PHONE_NAME_PATTERN: &str = "iPhone";
const TABLET_NAME_PATTERN: &str = "iPad";

/// Read-only inputs for a toolbar render pass, derived from the store.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToolbarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) height: f32,
    pub(crate) is_temp_project: bool,
    pub(crate) console_visible: bool,
    pub(crate) project_navigator_visible: bool,
    pub(crate) right_sidebar_content: RightSidebarContent,
    pub(crate) simulator_project_active: bool,
    pub(crate) available_simulators: &'a [Simulator],
    pub(crate) packager_status: ProcessStatus,
    pub(crate) last_launched_simulator: Option<&'a str>,
}

/// A selectable dropdown row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuOption {
    pub(crate) text: String,
    pub(crate) action: ToolbarIntent,
}

impl MenuOption {
    fn new(text: impl Into<String>, action: ToolbarIntent) -> Self {
        Self {
            text: text.into(),
            action,
        }
    }
}

/// Content of the simulator dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SimulatorMenu {
    /// No simulator is installed on the host.
    Empty,
    Columns {
        phones: Vec<MenuOption>,
        tablets: Vec<MenuOption>,
    },
}

/// Map a process status to the visual state of its button.
pub(crate) fn button_state(status: ProcessStatus) -> ButtonState {
    ButtonState::from(status == ProcessStatus::On)
}

/// Title shown in the center section.
pub(crate) fn display_title(title: &str, is_temp_project: bool) -> String {
    if is_temp_project {
        format!("{title}{TEMPORARY_TITLE_SUFFIX}")
    } else {
        title.to_owned()
    }
}

/// Partition simulators into phone and tablet columns by display name.
///
/// Names are matched case-sensitively; phones are checked first and devices
/// matching neither pattern are not listed.
pub(crate) fn simulator_menu(simulators: &[Simulator]) -> SimulatorMenu {
    if simulators.is_empty() {
        return SimulatorMenu::Empty;
    }

    let mut phones = Vec::new();
    let mut tablets = Vec::new();

    for simulator in simulators {
        let name = simulator.name();
        let option = || {
            MenuOption::new(name, ToolbarIntent::LaunchSimulator {
                name: name.to_owned(),
            })
        };

        if name.contains(PHONE_NAME_PATTERN) {
            phones.push(option());
        } else if name.contains(TABLET_NAME_PATTERN) {
            tablets.push(option());
        }
    }

    SimulatorMenu::Columns { phones, tablets }
}

/// Options of the discuss dropdown.
pub(crate) fn discuss_menu_options() -> Vec<MenuOption> {
    vec![
        MenuOption::new(
            "Open Deco Slack",
            ToolbarIntent::OpenLink(ExternalLink::Chat),
        ),
        MenuOption::new(
            "Create Slack Account",
            ToolbarIntent::OpenLink(ExternalLink::Signup),
        ),
    ]
}

/// View model for the toolbar widget.
#[derive(Debug, Clone)]
pub(crate) struct ToolbarViewModel {
    pub(crate) title: String,
    pub(crate) height: f32,
    pub(crate) navigator_button: ButtonState,
    pub(crate) console_button: ButtonState,
    pub(crate) properties_button: ButtonState,
    pub(crate) publishing_button: ButtonState,
    pub(crate) simulator_button: ButtonState,
    pub(crate) packager_button: ButtonState,
    pub(crate) discuss_button: ButtonState,
    pub(crate) rerun_target: Option<String>,
    pub(crate) simulator_menu_open: bool,
    pub(crate) discuss_menu_open: bool,
    pub(crate) simulator_menu: SimulatorMenu,
    pub(crate) discuss_options: Vec<MenuOption>,
}

impl ToolbarViewModel {
    pub(crate) fn new(
        props: ToolbarProps<'_>,
        simulator_menu_open: bool,
        discuss_menu_open: bool,
    ) -> Self {
        let right = props.right_sidebar_content;

        Self {
            title: display_title(props.title, props.is_temp_project),
            height: props.height,
            navigator_button: ButtonState::from(props.project_navigator_visible),
            console_button: ButtonState::from(props.console_visible),
            properties_button: ButtonState::from(
                right == RightSidebarContent::Properties,
            ),
            publishing_button: ButtonState::from(
                right == RightSidebarContent::Publishing,
            ),
            simulator_button: ButtonState::from(props.simulator_project_active),
            packager_button: button_state(props.packager_status),
            discuss_button: ButtonState::from(discuss_menu_open),
            rerun_target: props.last_launched_simulator.map(str::to_owned),
            simulator_menu_open,
            discuss_menu_open,
            simulator_menu: simulator_menu(props.available_simulators),
            discuss_options: discuss_menu_options(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ButtonState, SimulatorMenu, ToolbarProps, ToolbarViewModel,
        button_state, discuss_menu_options, display_title, simulator_menu,
    };
    use crate::store::model::{ProcessStatus, RightSidebarContent, Simulator};
    use crate::widgets::toolbar::event::{ExternalLink, ToolbarIntent};

    fn simulators(names: &[&str]) -> Vec<Simulator> {
        names.iter().copied().map(Simulator::new).collect()
    }

    fn option_names(options: &[super::MenuOption]) -> Vec<&str> {
        options.iter().map(|option| option.text.as_str()).collect()
    }

    fn props(sims: &[Simulator]) -> ToolbarProps<'_> {
        ToolbarProps {
            title: "Weather",
            height: 72.0,
            is_temp_project: false,
            console_visible: false,
            project_navigator_visible: true,
            right_sidebar_content: RightSidebarContent::Properties,
            simulator_project_active: false,
            available_simulators: sims,
            packager_status: ProcessStatus::Pending,
            last_launched_simulator: None,
        }
    }

    #[test]
    fn given_each_status_when_mapped_then_only_on_is_active() {
        assert_eq!(button_state(ProcessStatus::On), ButtonState::Active);
        assert_eq!(button_state(ProcessStatus::Off), ButtonState::Default);
        assert_eq!(button_state(ProcessStatus::Pending), ButtonState::Default);
    }

    #[test]
    fn given_empty_simulator_list_when_building_menu_then_fallback_is_used() {
        assert_eq!(simulator_menu(&[]), SimulatorMenu::Empty);
    }

    #[test]
    fn given_mixed_devices_when_building_menu_then_columns_are_partitioned() {
        let sims = simulators(&[
            "iPhone 6",
            "iPad Air 2",
            "Apple TV",
            "iPhone SE",
            "ipad mini",
            "iPad Pro",
        ]);

        let SimulatorMenu::Columns { phones, tablets } = simulator_menu(&sims)
        else {
            panic!("expected simulator columns");
        };

        assert_eq!(option_names(&phones), vec!["iPhone 6", "iPhone SE"]);
        assert_eq!(option_names(&tablets), vec!["iPad Air 2", "iPad Pro"]);
    }

    #[test]
    fn given_name_matching_both_patterns_when_building_menu_then_phone_wins() {
        let sims = simulators(&["iPhone/iPad hybrid", "iPad mini"]);

        let SimulatorMenu::Columns { phones, tablets } = simulator_menu(&sims)
        else {
            panic!("expected simulator columns");
        };

        assert_eq!(option_names(&phones), vec!["iPhone/iPad hybrid"]);
        assert_eq!(option_names(&tablets), vec!["iPad mini"]);
    }

    #[test]
    fn given_discuss_menu_when_built_then_slack_links_are_offered() {
        let options = discuss_menu_options();

        assert_eq!(option_names(&options), vec![
            "Open Deco Slack",
            "Create Slack Account"
        ]);
        assert_eq!(
            options[1].action,
            ToolbarIntent::OpenLink(ExternalLink::Signup)
        );
    }

    #[test]
    fn given_only_unknown_devices_when_building_menu_then_columns_are_empty() {
        let sims = simulators(&["Apple Watch", "Pixel 3"]);

        assert_eq!(
            simulator_menu(&sims),
            SimulatorMenu::Columns {
                phones: Vec::new(),
                tablets: Vec::new(),
            }
        );
    }

    #[test]
    fn given_simulator_option_when_built_then_action_launches_that_device() {
        let sims = simulators(&["iPad Pro"]);

        let SimulatorMenu::Columns { tablets, .. } = simulator_menu(&sims)
        else {
            panic!("expected simulator columns");
        };

        assert_eq!(
            tablets[0].action,
            ToolbarIntent::LaunchSimulator {
                name: String::from("iPad Pro"),
            }
        );
    }

    #[test]
    fn given_temp_project_when_rendering_title_then_suffix_is_added() {
        assert_eq!(
            display_title("Weather", true),
            "Weather (Temporary until saved)"
        );
        assert_eq!(display_title("Weather", false), "Weather");
    }

    #[test]
    fn given_props_when_building_vm_then_button_states_follow_props() {
        let sims = simulators(&["iPhone 6"]);
        let vm = ToolbarViewModel::new(props(&sims), false, false);

        assert_eq!(vm.navigator_button, ButtonState::Active);
        assert_eq!(vm.console_button, ButtonState::Default);
        assert_eq!(vm.properties_button, ButtonState::Active);
        assert_eq!(vm.publishing_button, ButtonState::Default);
        assert_eq!(vm.packager_button, ButtonState::Default);
        assert_eq!(vm.title, "Weather");
        assert!(vm.rerun_target.is_none());
    }
}
