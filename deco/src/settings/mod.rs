mod errors;
pub(crate) mod model;
mod storage;

pub(crate) use model::DecoSettings;
use storage::SettingsLoadStatus;

/// Load startup settings, falling back to defaults on any failure.
pub(crate) fn load() -> DecoSettings {
    match storage::load_settings() {
        Ok(load) => {
            let (settings, status) = load.into_parts();
            match status {
                SettingsLoadStatus::Loaded => log::info!("settings loaded"),
                SettingsLoadStatus::Missing => {
                    log::info!("settings file not found, using defaults")
                },
                SettingsLoadStatus::Invalid(reason) => {
                    log::warn!("settings file is invalid: {reason}")
                },
            }
            settings
        },
        Err(err) => {
            log::warn!("failed to read settings: {err}");
            DecoSettings::default()
        },
    }
}
