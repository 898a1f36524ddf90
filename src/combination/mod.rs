//! Canonical key combination and its persisted encodings.
//!
//! A combination is four `(code, flags)` slots plus a count. Slot flags use
//! the CGEvent flag layout, which is what the preference store and the global
//! hotkey monitor read. Two encodings are provided:
//!
//! - the fixed record: 9 `u32` values `code0, flags0, .., code3, flags3, count`
//!   (and its little-endian byte form)
//! - the preference string: `CODE:FLAGS` hex pairs joined by `;`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CaptureConfig;
use crate::keys::{
    from_event_flags, key_label, modifier_symbols, KeyCode, Modifiers,
    CG_EVENT_FLAG_MASK_SECONDARY_FN,
};

/// Number of key slots in a combination
pub const KEY_SLOTS: usize = 4;

/// Number of `u32` values in the fixed record
pub const RECORD_LEN: usize = KEY_SLOTS * 2 + 1;

/// Size of the fixed record in bytes
pub const RECORD_BYTES: usize = RECORD_LEN * 4;

/// Preference key holding the combination string
pub const PREFERENCE_KEY: &str = "KeyCombo";

/// Errors that can occur while decoding a stored combination
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombinationError {
    /// Record did not hold exactly nine values
    #[error("Key combination record must hold {expected} values, got {actual}")]
    RecordLength { expected: usize, actual: usize },
    /// Byte buffer did not hold exactly one record
    #[error("Key combination buffer must be {expected} bytes, got {actual}")]
    ByteLength { expected: usize, actual: usize },
    /// A `CODE:FLAGS` pair could not be parsed
    #[error("Invalid key combination entry '{0}'")]
    InvalidEntry(String),
}

/// One slot of a combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyInfo {
    /// Key code, 0 for a modifier-only entry
    pub code: KeyCode,
    /// Modifier flags in CGEvent layout
    pub flags: u32,
}

impl KeyInfo {
    pub const EMPTY: KeyInfo = KeyInfo { code: 0, flags: 0 };

    pub fn new(code: KeyCode, flags: u32) -> Self {
        Self { code, flags }
    }

    /// Unused slot
    pub fn is_empty(&self) -> bool {
        self.code == 0 && self.flags == 0
    }

    /// Flags decoded to the UI-level modifier set
    pub fn modifiers(&self) -> Modifiers {
        from_event_flags(self.flags)
    }

    /// Modifier symbols followed by the key label; the label is omitted for code 0
    fn label(&self) -> String {
        let mut label = modifier_symbols(self.modifiers()).concat();
        if self.code != 0 {
            label.push_str(&key_label(self.code));
        }
        label
    }

    fn parse(entry: &str) -> Result<Self, CombinationError> {
        let invalid = || CombinationError::InvalidEntry(entry.to_string());
        let (code, flags) = entry.trim().split_once(':').ok_or_else(invalid)?;
        let code = u32::from_str_radix(code.trim(), 16).map_err(|_| invalid())?;
        let flags = u32::from_str_radix(flags.trim(), 16).map_err(|_| invalid())?;
        Ok(Self { code, flags })
    }
}

/// A captured hotkey: four slots ordered by key code, plus a count.
///
/// `count` is 0 for "no combination" and 1 for any captured combination; it
/// is not the number of populated slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyCombination {
    pub keys: [KeyInfo; KEY_SLOTS],
    pub count: u32,
}

impl KeyCombination {
    /// Combination with every slot empty and `count == 0`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a combination from captured entries.
    ///
    /// Entries past the fourth are dropped and the rest padded with empty
    /// slots. `count` is 1 whenever at least one entry was given.
    pub fn from_entries(entries: &[KeyInfo]) -> Self {
        let mut keys = [KeyInfo::EMPTY; KEY_SLOTS];
        for (slot, entry) in keys.iter_mut().zip(entries) {
            *slot = *entry;
        }
        Self {
            keys,
            count: u32::from(!entries.is_empty()),
        }
    }

    /// The default hotkey: fn held on its own
    pub fn fn_key() -> Self {
        Self::from_entries(&[KeyInfo::new(0, CG_EVENT_FLAG_MASK_SECONDARY_FN)])
    }

    /// Whether this combination describes a configured hotkey
    pub fn is_set(&self) -> bool {
        self.count != 0 && self.keys.iter().any(|key| !key.is_empty())
    }

    /// Populated slots in slot order
    pub fn entries(&self) -> impl Iterator<Item = &KeyInfo> + '_ {
        self.keys.iter().filter(|key| !key.is_empty())
    }

    /// Encode as the fixed 9-value record
    pub fn to_record(&self) -> [u32; RECORD_LEN] {
        let mut record = [0u32; RECORD_LEN];
        for (i, key) in self.keys.iter().enumerate() {
            record[i * 2] = key.code;
            record[i * 2 + 1] = key.flags;
        }
        record[RECORD_LEN - 1] = self.count;
        record
    }

    /// Decode the fixed 9-value record.
    ///
    /// Only the length is validated; slot values are taken as stored.
    pub fn from_record(record: &[u32]) -> Result<Self, CombinationError> {
        if record.len() != RECORD_LEN {
            return Err(CombinationError::RecordLength {
                expected: RECORD_LEN,
                actual: record.len(),
            });
        }
        let mut keys = [KeyInfo::EMPTY; KEY_SLOTS];
        for (slot, pair) in keys.iter_mut().zip(record.chunks_exact(2)) {
            *slot = KeyInfo::new(pair[0], pair[1]);
        }
        Ok(Self {
            keys,
            count: record[RECORD_LEN - 1],
        })
    }

    /// Encode the record as little-endian bytes
    pub fn to_bytes(&self) -> [u8; RECORD_BYTES] {
        let mut bytes = [0u8; RECORD_BYTES];
        for (chunk, value) in bytes.chunks_exact_mut(4).zip(self.to_record()) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    /// Decode a little-endian record
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CombinationError> {
        if bytes.len() != RECORD_BYTES {
            return Err(CombinationError::ByteLength {
                expected: RECORD_BYTES,
                actual: bytes.len(),
            });
        }
        let record: Vec<u32> = bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Self::from_record(&record)
    }

    /// Encode as the preference string, e.g. `12:100000;13:100000`.
    ///
    /// Every populated slot is written. An unset combination encodes as an
    /// empty string.
    pub fn to_preference_string(&self) -> String {
        if self.count == 0 {
            return String::new();
        }
        self.entries()
            .map(|key| format!("{:X}:{:X}", key.code, key.flags))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Parse a preference string.
    ///
    /// At most four pairs are read and malformed pairs are skipped. Returns
    /// `None` when nothing usable was found.
    pub fn from_preference_string(value: &str) -> Option<Self> {
        let entries: Vec<KeyInfo> = value
            .split(';')
            .filter(|entry| !entry.trim().is_empty())
            .filter_map(|entry| match KeyInfo::parse(entry) {
                Ok(key) => Some(key),
                Err(e) => {
                    crate::warn!("Skipping stored hotkey entry: {}", e);
                    None
                }
            })
            .take(KEY_SLOTS)
            .collect();

        if entries.is_empty() {
            return None;
        }
        Some(Self::from_entries(&entries))
    }

    /// Human-readable label for a stored combination
    pub fn display_label(&self, config: &CaptureConfig) -> String {
        if self.count == 0 {
            return config.not_set_label.clone();
        }
        let parts: Vec<String> = self
            .entries()
            .map(KeyInfo::label)
            .filter(|label| !label.is_empty())
            .collect();
        if parts.is_empty() {
            config.not_set_label.clone()
        } else {
            parts.join(&config.separator)
        }
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label(&CaptureConfig::default()))
    }
}

#[cfg(test)]
#[path = "combination_test.rs"]
mod tests;
