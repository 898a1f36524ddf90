// Hotkey capture events for presentation-layer notification
// Defines event payloads and emission trait for testability

use serde::Serialize;

use crate::combination::KeyCombination;

/// Event names as constants for consistency
pub mod event_names {
    pub const HOTKEY_CAPTURE_STARTED: &str = "hotkey_capture_started";
    pub const HOTKEY_DISPLAY_UPDATED: &str = "hotkey_display_updated";
    pub const HOTKEY_CAPTURED: &str = "hotkey_captured";
    pub const HOTKEY_CAPTURE_CANCELLED: &str = "hotkey_capture_cancelled";
}

/// Payload for hotkey_capture_started event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaptureStartedPayload {
    /// Placeholder the display was reset to
    pub display: String,
    /// ISO 8601 timestamp when capture started
    pub timestamp: String,
}

/// Payload for hotkey_display_updated event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayUpdatedPayload {
    /// Live display string for the keys currently held
    pub display: String,
}

/// Payload for hotkey_captured event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotkeyCapturedPayload {
    /// The finalized combination
    pub combination: KeyCombination,
    /// Final display string for the whole gesture
    pub display: String,
    /// ISO 8601 timestamp when the combination was finalized
    pub timestamp: String,
}

/// Payload for hotkey_capture_cancelled event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaptureCancelledPayload {
    /// ISO 8601 timestamp when capture was cancelled
    pub timestamp: String,
}

/// Trait for emitting capture events
/// Allows mocking in tests while the host wires it to its UI
pub trait CaptureEventEmitter: Send + Sync {
    /// Emit hotkey_capture_started event
    fn emit_capture_started(&self, payload: CaptureStartedPayload);

    /// Emit hotkey_display_updated event
    fn emit_display_updated(&self, payload: DisplayUpdatedPayload);

    /// Emit hotkey_captured event
    fn emit_hotkey_captured(&self, payload: HotkeyCapturedPayload);

    /// Emit hotkey_capture_cancelled event
    fn emit_capture_cancelled(&self, payload: CaptureCancelledPayload);
}

/// Get the current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
