// Hotkey capture: turns a stream of key events into a KeyCombination
//
// The session pauses the global hotkey monitor for the duration of a capture
// so the shortcut being recorded does not trigger the old one.

mod session;

pub use session::{CaptureSession, CaptureState};

/// Trait for the global key monitor that must stay quiet during capture
/// (allows mocking in tests)
///
/// Calls are fire-and-forget: the session never waits for confirmation.
pub trait KeyMonitor: Send + Sync {
    /// Stop reporting hotkey activity
    fn pause(&self);
    /// Resume reporting hotkey activity
    fn resume(&self);
}

/// Key monitor that does nothing, for hosts without a global monitor
pub struct NullKeyMonitor;

impl KeyMonitor for NullKeyMonitor {
    fn pause(&self) {}

    fn resume(&self) {}
}
