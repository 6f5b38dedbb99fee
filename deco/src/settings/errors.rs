use thiserror::Error;

/// Errors emitted while reading settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("settings IO failed: {0}")]
    Io(#[from] std::io::Error),
}
