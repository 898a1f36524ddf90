//! Modifier key representation and the flag codec.
//!
//! Captured modifiers live in [`Modifiers`], a compact UI-level set. Persisted
//! combinations carry the low-level event flags instead (the CGEventFlags bit
//! layout), so every value crossing that boundary goes through
//! [`to_event_flags`] / [`from_event_flags`].

// Standard modifier flags from CGEvent
pub const CG_EVENT_FLAG_MASK_ALPHA_SHIFT: u32 = 0x0001_0000;
pub const CG_EVENT_FLAG_MASK_SHIFT: u32 = 0x0002_0000;
pub const CG_EVENT_FLAG_MASK_CONTROL: u32 = 0x0004_0000;
pub const CG_EVENT_FLAG_MASK_ALTERNATE: u32 = 0x0008_0000;
pub const CG_EVENT_FLAG_MASK_COMMAND: u32 = 0x0010_0000;
pub const CG_EVENT_FLAG_MASK_SECONDARY_FN: u32 = 0x0080_0000;

bitflags::bitflags! {
    /// Modifier keys held during a key event.
    ///
    /// Values coming from the platform may carry bits outside the six named
    /// modifiers; build those with [`Modifiers::from_bits_retain`] and use
    /// [`Modifiers::tracked`] when only the named modifiers matter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const CONTROL   = 1 << 0;
        const OPTION    = 1 << 1;
        const SHIFT     = 1 << 2;
        const COMMAND   = 1 << 3;
        const FUNCTION  = 1 << 4;
        const CAPS_LOCK = 1 << 5;
    }
}

/// One row of the codec: UI-level flag, event flag, display symbol.
///
/// Row order is the display order of the symbols.
const MODIFIER_TABLE: [(Modifiers, u32, &str); 6] = [
    (Modifiers::CONTROL, CG_EVENT_FLAG_MASK_CONTROL, "⌃"),
    (Modifiers::OPTION, CG_EVENT_FLAG_MASK_ALTERNATE, "⌥"),
    (Modifiers::SHIFT, CG_EVENT_FLAG_MASK_SHIFT, "⇧"),
    (Modifiers::COMMAND, CG_EVENT_FLAG_MASK_COMMAND, "⌘"),
    (Modifiers::FUNCTION, CG_EVENT_FLAG_MASK_SECONDARY_FN, "fn"),
    (Modifiers::CAPS_LOCK, CG_EVENT_FLAG_MASK_ALPHA_SHIFT, "⇪"),
];

impl Modifiers {
    /// Only the six named modifiers, any foreign bits dropped
    pub fn tracked(self) -> Self {
        self & Self::all()
    }

    /// Whether any of the six named modifiers is held
    pub fn any_tracked(self) -> bool {
        self.intersects(Self::all())
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

/// Convert UI-level modifiers to CGEvent flags.
///
/// Bits outside the six named modifiers are dropped.
pub fn to_event_flags(modifiers: Modifiers) -> u32 {
    MODIFIER_TABLE
        .iter()
        .filter(|(flag, _, _)| modifiers.contains(*flag))
        .fold(0, |acc, (_, event_bit, _)| acc | event_bit)
}

/// Convert CGEvent flags back to UI-level modifiers.
///
/// Unrelated event flags (device bits, numeric pad, etc.) are ignored.
pub fn from_event_flags(flags: u32) -> Modifiers {
    MODIFIER_TABLE
        .iter()
        .filter(|(_, event_bit, _)| flags & event_bit != 0)
        .fold(Modifiers::empty(), |acc, (flag, _, _)| acc | *flag)
}

/// Symbols for the held modifiers, always in ⌃ ⌥ ⇧ ⌘ fn ⇪ order
pub fn modifier_symbols(modifiers: Modifiers) -> Vec<&'static str> {
    MODIFIER_TABLE
        .iter()
        .filter(|(flag, _, _)| modifiers.contains(*flag))
        .map(|(_, _, symbol)| *symbol)
        .collect()
}

#[cfg(test)]
#[path = "modifiers_test.rs"]
mod tests;
