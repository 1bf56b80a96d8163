//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! Only ambient state lives here; the counter belongs to the counter page.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{i18n_state::I18nState, settings_state::SettingsState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Persisted UI settings
    pub settings: Entity<SettingsState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            settings: cx.new(|_| SettingsState::default()),
            i18n: cx.new(|_| I18nState::default()),
        }
    }
}
