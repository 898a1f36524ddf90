// Global hotkey monitor
//
// Watches the raw key event stream for the configured combination and fires
// press/release callbacks. Modifier-only hotkeys (fn on its own, the default)
// are supported by tracking held modifiers as virtual keys alongside real ones.
//
// This is the monitor a CaptureSession pauses while a new hotkey is recorded.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::capture::KeyMonitor;
use crate::combination::KeyCombination;
use crate::keys::{KeyCode, KeyEvent, Modifiers};

// Virtual key codes for held modifiers, above any real key code
const VIRTUAL_KEY_FN: KeyCode = 0x1000;
const VIRTUAL_KEY_CONTROL: KeyCode = 0x1001;
const VIRTUAL_KEY_OPTION: KeyCode = 0x1002;
const VIRTUAL_KEY_SHIFT: KeyCode = 0x1003;
const VIRTUAL_KEY_COMMAND: KeyCode = 0x1004;

/// Modifiers re-derived from every key event. fn is handled separately
/// because arrow and navigation keys also report the fn flag.
const KEY_EVENT_MODIFIERS: [(Modifiers, KeyCode); 4] = [
    (Modifiers::CONTROL, VIRTUAL_KEY_CONTROL),
    (Modifiers::OPTION, VIRTUAL_KEY_OPTION),
    (Modifiers::SHIFT, VIRTUAL_KEY_SHIFT),
    (Modifiers::COMMAND, VIRTUAL_KEY_COMMAND),
];

/// Callback invoked on hotkey press or release
pub type HotkeyCallback = Arc<dyn Fn() + Send + Sync>;

/// Hotkey detection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorState {
    /// Waiting for the combination
    #[default]
    Idle,
    /// The combination is held
    ComboActive,
    /// The combination was broken; waiting for every key to be released
    WaitingForRelease,
}

/// What a single event did to the hotkey
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    Pressed,
    Released,
}

struct MonitorInner {
    state: MonitorState,
    paused: bool,
    combination: KeyCombination,
    /// Real and virtual keys that make up the combination
    target_keys: BTreeSet<KeyCode>,
    /// Real and virtual keys held right now
    pressed_keys: BTreeSet<KeyCode>,
}

impl MonitorInner {
    fn matches_target(&self) -> bool {
        !self.target_keys.is_empty() && self.pressed_keys == self.target_keys
    }

    fn set_virtual_key(&mut self, code: KeyCode, held: bool) {
        if held {
            self.pressed_keys.insert(code);
        } else {
            self.pressed_keys.remove(&code);
        }
    }

    fn update_modifiers(&mut self, modifiers: Modifiers) {
        for (flag, code) in KEY_EVENT_MODIFIERS {
            self.set_virtual_key(code, modifiers.contains(flag));
        }
    }

    fn apply(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::KeyDown { code, modifiers } => {
                self.pressed_keys.insert(code);
                self.update_modifiers(modifiers);
            }
            KeyEvent::KeyUp { code } => {
                self.pressed_keys.remove(&code);
            }
            KeyEvent::ModifierChange { modifiers } => {
                // fn only counts when it changes on its own
                self.set_virtual_key(VIRTUAL_KEY_FN, modifiers.contains(Modifiers::FUNCTION));
                self.update_modifiers(modifiers);
            }
        }
    }

    fn advance(&mut self) -> Option<HotkeyAction> {
        match self.state {
            MonitorState::Idle => {
                if self.matches_target() {
                    self.state = MonitorState::ComboActive;
                    return Some(HotkeyAction::Pressed);
                }
                None
            }
            MonitorState::ComboActive => {
                if self.matches_target() {
                    return None;
                }
                // Key released or extra key pressed
                self.state = if self.pressed_keys.is_empty() {
                    MonitorState::Idle
                } else {
                    MonitorState::WaitingForRelease
                };
                Some(HotkeyAction::Released)
            }
            MonitorState::WaitingForRelease => {
                if self.pressed_keys.is_empty() {
                    self.state = MonitorState::Idle;
                }
                None
            }
        }
    }
}

/// Real and virtual keys that must be held for `combination`
fn target_keys(combination: &KeyCombination) -> BTreeSet<KeyCode> {
    let mut keys = BTreeSet::new();
    if combination.count == 0 {
        return keys;
    }

    let mut modifiers = Modifiers::empty();
    for entry in combination.entries() {
        if entry.code != 0 {
            keys.insert(entry.code);
        }
        modifiers |= entry.modifiers();
    }

    if modifiers.contains(Modifiers::FUNCTION) {
        keys.insert(VIRTUAL_KEY_FN);
    }
    for (flag, code) in KEY_EVENT_MODIFIERS {
        if modifiers.contains(flag) {
            keys.insert(code);
        }
    }
    keys
}

/// Detects the configured hotkey in the raw key event stream.
///
/// Callbacks run after the internal lock is released, so they may call back
/// into the monitor.
pub struct HotkeyMonitor {
    inner: Mutex<MonitorInner>,
    on_press: HotkeyCallback,
    on_release: HotkeyCallback,
}

impl HotkeyMonitor {
    /// Create a monitor for the default hotkey (fn on its own)
    pub fn new(on_press: HotkeyCallback, on_release: HotkeyCallback) -> Self {
        Self::with_combination(KeyCombination::fn_key(), on_press, on_release)
    }

    /// Create a monitor for `combination`
    pub fn with_combination(
        combination: KeyCombination,
        on_press: HotkeyCallback,
        on_release: HotkeyCallback,
    ) -> Self {
        Self {
            inner: Mutex::new(MonitorInner {
                state: MonitorState::Idle,
                paused: false,
                target_keys: target_keys(&combination),
                combination,
                pressed_keys: BTreeSet::new(),
            }),
            on_press,
            on_release,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.inner.lock().state
    }

    pub fn is_paused(&self) -> bool {
        self.inner.lock().paused
    }

    /// The combination being watched
    pub fn combination(&self) -> KeyCombination {
        self.inner.lock().combination
    }

    /// Watch a different combination.
    ///
    /// An active hotkey is dropped without a release callback; the monitor
    /// waits for all keys to be released before matching again.
    pub fn set_combination(&self, combination: &KeyCombination) {
        let mut inner = self.inner.lock();
        inner.combination = *combination;
        inner.target_keys = target_keys(combination);
        if inner.state == MonitorState::ComboActive {
            inner.state = MonitorState::WaitingForRelease;
        }
        crate::info!("Hotkey monitor watching {}", combination);
    }

    /// Feed one raw key event. Events are ignored while paused.
    pub fn handle_event(&self, event: KeyEvent) -> Option<HotkeyAction> {
        let action = {
            let mut inner = self.inner.lock();
            if inner.paused {
                return None;
            }
            inner.apply(event);
            inner.advance()
        };

        match action {
            Some(HotkeyAction::Pressed) => {
                crate::debug!("Hotkey pressed");
                (self.on_press)();
            }
            Some(HotkeyAction::Released) => {
                crate::debug!("Hotkey released");
                (self.on_release)();
            }
            None => {}
        }
        action
    }
}

impl KeyMonitor for HotkeyMonitor {
    fn pause(&self) {
        self.inner.lock().paused = true;
        crate::debug!("Hotkey monitor paused");
    }

    /// Key state is reset because events were missed while paused
    fn resume(&self) {
        let mut inner = self.inner.lock();
        inner.paused = false;
        inner.pressed_keys.clear();
        inner.state = MonitorState::Idle;
        crate::debug!("Hotkey monitor resumed");
    }
}

#[cfg(test)]
#[path = "monitor_test.rs"]
mod tests;
