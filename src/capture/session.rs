//! Capture session state machine.
//!
//! Tracks keys and modifiers across the whole gesture rather than sampling at
//! key-down, so a user can press modifiers, add keys, and release in any
//! order. The gesture ends when nothing relevant is held any more.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::KeyMonitor;
use crate::combination::{KeyCombination, KeyInfo};
use crate::config::CaptureConfig;
use crate::events::{
    current_timestamp, CaptureCancelledPayload, CaptureEventEmitter, CaptureStartedPayload,
    DisplayUpdatedPayload, HotkeyCapturedPayload,
};
use crate::keys::{key_label, modifier_symbols, to_event_flags, KeyCode, KeyEvent, Modifiers};

/// Capture lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// Not capturing; events are ignored
    #[default]
    Idle,
    /// Capturing; events update the session
    Capturing,
}

/// A single hotkey capture.
///
/// Owned by the presentation layer and fed events by whatever delivers raw
/// key events. Events for one session must be delivered in order.
pub struct CaptureSession {
    state: CaptureState,
    /// Keys physically down right now
    current_keys: BTreeSet<KeyCode>,
    /// Every key seen down since start (never shrinks)
    all_pressed_keys: BTreeSet<KeyCode>,
    /// Modifiers held right now
    current_modifiers: Modifiers,
    /// Every modifier seen since start (never shrinks)
    max_modifiers: Modifiers,
    /// Live display string
    display: String,
    /// Last finalized combination
    result: Option<KeyCombination>,
    monitor: Arc<dyn KeyMonitor>,
    emitter: Option<Arc<dyn CaptureEventEmitter>>,
    config: CaptureConfig,
}

impl CaptureSession {
    /// Create an idle session that pauses/resumes `monitor`
    pub fn new(monitor: Arc<dyn KeyMonitor>) -> Self {
        let config = CaptureConfig::default();
        Self {
            state: CaptureState::Idle,
            current_keys: BTreeSet::new(),
            all_pressed_keys: BTreeSet::new(),
            current_modifiers: Modifiers::empty(),
            max_modifiers: Modifiers::empty(),
            display: config.placeholder.clone(),
            result: None,
            monitor,
            emitter: None,
            config,
        }
    }

    /// Use custom display strings
    pub fn with_config(mut self, config: CaptureConfig) -> Self {
        self.display = config.placeholder.clone();
        self.config = config;
        self
    }

    /// Notify `emitter` of display changes and results
    pub fn with_emitter(mut self, emitter: Arc<dyn CaptureEventEmitter>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_capturing(&self) -> bool {
        self.state == CaptureState::Capturing
    }

    /// Current display string (live while capturing, final afterwards)
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The last finalized combination, if any
    pub fn result(&self) -> Option<KeyCombination> {
        self.result
    }

    /// Take the last finalized combination, leaving none behind
    pub fn take_result(&mut self) -> Option<KeyCombination> {
        self.result.take()
    }

    /// Begin capturing.
    ///
    /// Clears all tracked state and pauses the key monitor. Calling this while
    /// already capturing restarts the gesture without pausing twice.
    pub fn start(&mut self) {
        if self.is_capturing() {
            crate::debug!("Hotkey capture restarted");
        } else {
            self.monitor.pause();
            crate::info!("Hotkey capture started");
        }

        self.state = CaptureState::Capturing;
        self.current_keys.clear();
        self.all_pressed_keys.clear();
        self.current_modifiers = Modifiers::empty();
        self.max_modifiers = Modifiers::empty();
        self.result = None;
        self.display = self.config.placeholder.clone();

        if let Some(emitter) = &self.emitter {
            emitter.emit_capture_started(CaptureStartedPayload {
                display: self.display.clone(),
                timestamp: current_timestamp(),
            });
        }
    }

    /// Stop capturing without producing a combination.
    ///
    /// No-op when idle.
    pub fn cancel(&mut self) {
        if !self.is_capturing() {
            crate::debug!("Ignoring cancel, hotkey capture is not active");
            return;
        }

        self.state = CaptureState::Idle;
        self.monitor.resume();
        crate::info!("Hotkey capture cancelled");

        if let Some(emitter) = &self.emitter {
            emitter.emit_capture_cancelled(CaptureCancelledPayload {
                timestamp: current_timestamp(),
            });
        }
    }

    /// Feed one event. Returns the combination if this event completed it.
    pub fn handle_event(&mut self, event: KeyEvent) -> Option<KeyCombination> {
        match event {
            KeyEvent::KeyDown { code, modifiers } => {
                self.on_key_down(code, modifiers);
                None
            }
            KeyEvent::KeyUp { code } => self.on_key_up(code),
            KeyEvent::ModifierChange { modifiers } => self.on_modifier_change(modifiers),
        }
    }

    pub fn on_key_down(&mut self, code: KeyCode, modifiers: Modifiers) {
        if !self.is_capturing() {
            return;
        }
        crate::trace!("Capture key down: code={} modifiers={:?}", code, modifiers);

        self.current_keys.insert(code);
        self.all_pressed_keys.insert(code);
        self.current_modifiers = modifiers;
        self.max_modifiers |= modifiers;

        self.update_display();
    }

    pub fn on_key_up(&mut self, code: KeyCode) -> Option<KeyCombination> {
        if !self.is_capturing() {
            return None;
        }
        crate::trace!("Capture key up: code={}", code);

        // A release for a key never reported down is a no-op
        self.current_keys.remove(&code);

        if self.is_quiescent() {
            return Some(self.finalize());
        }
        None
    }

    pub fn on_modifier_change(&mut self, modifiers: Modifiers) -> Option<KeyCombination> {
        if !self.is_capturing() {
            return None;
        }
        crate::trace!("Capture modifiers changed: {:?}", modifiers);

        self.current_modifiers = modifiers;
        self.max_modifiers |= modifiers;

        // Checked before the display update so a full release finalizes
        // instead of flashing an empty display
        if self.is_quiescent() {
            return Some(self.finalize());
        }

        self.update_display();
        None
    }

    /// Nothing held, and a key or tracked modifier was captured
    fn is_quiescent(&self) -> bool {
        self.current_keys.is_empty()
            && !self.current_modifiers.any_tracked()
            && (self.max_modifiers.any_tracked() || !self.all_pressed_keys.is_empty())
    }

    fn finalize(&mut self) -> KeyCombination {
        let entries: Vec<KeyInfo> = if self.max_modifiers.any_tracked() {
            let flags = to_event_flags(self.max_modifiers);
            if self.all_pressed_keys.is_empty() {
                // Modifier-only combination
                vec![KeyInfo::new(0, flags)]
            } else {
                // Every key carries every modifier seen during the gesture
                self.all_pressed_keys
                    .iter()
                    .map(|&code| KeyInfo::new(code, flags))
                    .collect()
            }
        } else {
            self.all_pressed_keys
                .iter()
                .map(|&code| KeyInfo::new(code, 0))
                .collect()
        };

        let combination = KeyCombination::from_entries(&entries);
        self.display = self.render(self.max_modifiers, &self.all_pressed_keys);
        self.result = Some(combination);
        self.state = CaptureState::Idle;
        self.monitor.resume();

        crate::info!(
            "Hotkey captured: {} ({})",
            self.display,
            combination.to_preference_string()
        );

        if let Some(emitter) = &self.emitter {
            emitter.emit_display_updated(DisplayUpdatedPayload {
                display: self.display.clone(),
            });
            emitter.emit_hotkey_captured(HotkeyCapturedPayload {
                combination,
                display: self.display.clone(),
                timestamp: current_timestamp(),
            });
        }

        combination
    }

    fn update_display(&mut self) {
        let display = self.render(self.current_modifiers, &self.current_keys);
        self.display = if display.is_empty() {
            self.config.placeholder.clone()
        } else {
            display
        };

        if let Some(emitter) = &self.emitter {
            emitter.emit_display_updated(DisplayUpdatedPayload {
                display: self.display.clone(),
            });
        }
    }

    /// Modifier symbols then key labels (ascending), joined by the separator
    fn render(&self, modifiers: Modifiers, keys: &BTreeSet<KeyCode>) -> String {
        modifier_symbols(modifiers)
            .into_iter()
            .map(str::to_string)
            .chain(keys.iter().map(|&code| key_label(code)))
            .collect::<Vec<_>>()
            .join(&self.config.separator)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
