//! Key events and the static key metadata used by hotkey capture.
//!
//! ## Module Organization
//!
//! - `keycodes`: Keycode to display label conversion
//! - `modifiers`: Modifier set and the UI-level / event-flag codec

mod keycodes;
mod modifiers;

pub use keycodes::{key_label, ESCAPE_KEY_CODE};
pub use modifiers::{
    from_event_flags, modifier_symbols, to_event_flags, Modifiers, CG_EVENT_FLAG_MASK_ALPHA_SHIFT,
    CG_EVENT_FLAG_MASK_ALTERNATE, CG_EVENT_FLAG_MASK_COMMAND, CG_EVENT_FLAG_MASK_CONTROL,
    CG_EVENT_FLAG_MASK_SECONDARY_FN, CG_EVENT_FLAG_MASK_SHIFT,
};

/// Physical key identifier (macOS virtual key code)
pub type KeyCode = u32;

/// A single observed keyboard transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A non-modifier key went down while `modifiers` were held
    KeyDown { code: KeyCode, modifiers: Modifiers },
    /// A non-modifier key was released
    KeyUp { code: KeyCode },
    /// The set of held modifiers changed (FlagsChanged)
    ModifierChange { modifiers: Modifiers },
}

impl KeyEvent {
    pub fn key_down(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::KeyDown { code, modifiers }
    }

    pub fn key_up(code: KeyCode) -> Self {
        Self::KeyUp { code }
    }

    pub fn modifier_change(modifiers: Modifiers) -> Self {
        Self::ModifierChange { modifiers }
    }
}
