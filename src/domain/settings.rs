//! Settings - Persisted UI Preferences
//!
//! Covers the window shell and locale only. Counter state is in-memory and
//! never persisted.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::Locale;

/// Persisted UI settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiSettings {
    /// Locale for UI chrome
    pub locale: Locale,
    /// Main window geometry
    pub window: WindowSettings,
}

/// Main window geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl UiSettings {
    /// Validate loaded settings before applying them to the window
    pub fn validate(&self) -> Result<()> {
        let w = self.window.width;
        let h = self.window.height;

        if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
            return Err(Error::Invalid {
                message: format!("window size {w}x{h} out of range"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(UiSettings::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_window_size() {
        let mut settings = UiSettings::default();
        settings.window.width = 0.0;
        assert!(settings.validate().is_err());

        settings.window.width = -100.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_window_size() {
        let mut settings = UiSettings::default();
        settings.window.height = f32::NAN;
        assert!(settings.validate().is_err());
    }
}
