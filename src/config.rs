//! Display configuration for hotkey capture.
//!
//! Hosts can override the strings shown in the shortcut field through the
//! `hotkeyCapture` preference entry. Every field falls back to its default, so
//! an absent or partial entry is always usable.

use serde::{Deserialize, Serialize};

/// Placeholder shown while capture waits for the first key
pub const DEFAULT_PLACEHOLDER: &str = "Press keys...";

/// Label shown for a stored combination that is not set
pub const DEFAULT_NOT_SET_LABEL: &str = "No hotkey set";

/// Separator placed between display parts
pub const DEFAULT_SEPARATOR: &str = " + ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureConfig {
    /// Shown while capturing when nothing is held
    pub placeholder: String,
    /// Shown for an unset combination
    pub not_set_label: String,
    /// Joins modifier symbols and key labels in the live and final display
    pub separator: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            not_set_label: DEFAULT_NOT_SET_LABEL.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}
