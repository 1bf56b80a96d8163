//! SettingsState - UI Settings State

use crate::domain::settings::UiSettings;

/// State for persisted UI settings
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Current settings
    pub settings: UiSettings,
    /// Whether settings have been loaded from disk
    pub loaded: bool,
}

impl SettingsState {
    /// Replace the settings after a successful load
    pub fn update_settings(&mut self, settings: UiSettings) {
        self.settings = settings;
        self.loaded = true;
    }
}
