// Hotkey capture core: records a key combination from raw key events,
// encodes it for the preference store, and renders stored combinations.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod capture;
pub mod combination;
pub mod config;
pub mod events;
pub mod keys;
pub mod monitor;
pub mod settings;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use capture::{CaptureSession, CaptureState, KeyMonitor, NullKeyMonitor};
pub use combination::{CombinationError, KeyCombination, KeyInfo};
pub use config::CaptureConfig;
pub use keys::{key_label, KeyCode, KeyEvent, Modifiers};
pub use monitor::{HotkeyAction, HotkeyMonitor, MonitorState};
pub use settings::{MemoryStore, SettingsError, SettingsStore};
