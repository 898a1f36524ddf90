//! Unified settings access for the hotkey.
//!
//! The host owns the actual preference store; this module only fixes the keys
//! and value formats used for the hotkey and the capture display strings.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

use crate::combination::{KeyCombination, PREFERENCE_KEY};
use crate::config::CaptureConfig;

/// Preference key holding the capture display configuration
pub const CAPTURE_CONFIG_KEY: &str = "hotkeyCapture";

/// Errors that can occur while reading or writing hotkey settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A value could not be serialized for storage
    #[error("Failed to serialize setting '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A stored value has the wrong shape
    #[error("Setting '{key}' has an invalid value: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Trait for key/value preference stores.
///
/// Implementations provide raw get/set; the hotkey helpers are built on top.
pub trait SettingsStore: Send + Sync {
    /// Get a setting value by key
    fn get(&self, key: &str) -> Option<Value>;

    /// Set a setting value
    fn set(&self, key: &str, value: Value);

    /// Load the stored hotkey.
    ///
    /// # Returns
    /// `Ok(None)` when no hotkey is configured, including a stored value that
    /// holds no usable entry.
    fn load_key_combination(&self) -> Result<Option<KeyCombination>, SettingsError> {
        let Some(value) = self.get(PREFERENCE_KEY) else {
            return Ok(None);
        };
        let text = value.as_str().ok_or_else(|| SettingsError::InvalidValue {
            key: PREFERENCE_KEY.to_string(),
            reason: format!("expected a string, got {}", value),
        })?;

        let combination =
            KeyCombination::from_preference_string(text).filter(KeyCombination::is_set);
        if combination.is_none() {
            crate::debug!("No usable hotkey stored under {}", PREFERENCE_KEY);
        }
        Ok(combination)
    }

    /// Store the hotkey
    fn save_key_combination(&self, combination: &KeyCombination) {
        let value = combination.to_preference_string();
        crate::debug!("Saving hotkey {}={}", PREFERENCE_KEY, value);
        self.set(PREFERENCE_KEY, Value::String(value));
    }

    /// Load the capture display configuration, falling back to defaults
    fn load_capture_config(&self) -> Result<CaptureConfig, SettingsError> {
        match self.get(CAPTURE_CONFIG_KEY) {
            None => Ok(CaptureConfig::default()),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| SettingsError::InvalidValue {
                    key: CAPTURE_CONFIG_KEY.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Store the capture display configuration
    fn save_capture_config(&self, config: &CaptureConfig) -> Result<(), SettingsError> {
        let value = serde_json::to_value(config).map_err(|source| SettingsError::Serialization {
            key: CAPTURE_CONFIG_KEY.to_string(),
            source,
        })?;
        self.set(CAPTURE_CONFIG_KEY, value);
        Ok(())
    }
}

/// In-memory settings store
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.values.write().insert(key.to_string(), value);
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
