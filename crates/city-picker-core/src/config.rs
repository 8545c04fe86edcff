// crates/city-picker-core/src/config.rs
use crate::error::{PickerError, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_TOUCH_DEBOUNCE_MS: u64 = 16;
pub const DEFAULT_CITY: &str = "北京";

/// Tunables for a [`CityPicker`](crate::CityPicker).
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change:
///
/// ```toml
/// search_debounce_ms = 300
/// default_city = "上海"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Quiet window before a query is matched.
    pub search_debounce_ms: u64,
    /// Quiet window before a touch move is mapped to a letter (about one frame).
    pub touch_debounce_ms: u64,
    /// Initial value of the selected-city store.
    pub default_city: String,
    /// Let a touch move scheduled before release still emit its letter.
    pub emit_after_release: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            touch_debounce_ms: DEFAULT_TOUCH_DEBOUNCE_MS,
            default_city: DEFAULT_CITY.to_string(),
            emit_after_release: false,
        }
    }
}

impl PickerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                PickerError::NotFound(format!("Config not found at {}: {}", path.display(), e))
            }
            _ => PickerError::Io(e),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn touch_debounce(&self) -> Duration {
        Duration::from_millis(self.touch_debounce_ms)
    }
}
