// Tests for hotkey settings access
// Test code is excluded from coverage since we measure production code coverage
#![cfg_attr(coverage_nightly, coverage(off))]

use super::*;
use crate::combination::KeyInfo;
use crate::keys::CG_EVENT_FLAG_MASK_COMMAND;
use serde_json::json;

#[test]
fn test_memory_store_get_set() {
    let store = MemoryStore::new();
    assert!(store.get("missing").is_none());

    store.set("language", json!("en"));
    assert_eq!(store.get("language"), Some(json!("en")));
}

#[test]
fn test_load_key_combination_absent() {
    let store = MemoryStore::new();
    assert!(store.load_key_combination().unwrap().is_none());
}

#[test]
fn test_save_then_load_key_combination() {
    let store = MemoryStore::new();
    let combo = KeyCombination::from_entries(&[
        KeyInfo::new(12, CG_EVENT_FLAG_MASK_COMMAND),
        KeyInfo::new(13, CG_EVENT_FLAG_MASK_COMMAND),
    ]);

    store.save_key_combination(&combo);
    assert_eq!(store.get("KeyCombo"), Some(json!("C:100000;D:100000")));
    assert_eq!(store.load_key_combination().unwrap(), Some(combo));
}

#[test]
fn test_load_key_combination_empty_string_is_not_set() {
    let store = MemoryStore::new();
    store.save_key_combination(&KeyCombination::empty());
    assert!(store.load_key_combination().unwrap().is_none());
}

#[test]
fn test_load_key_combination_all_empty_pairs_is_not_set() {
    let store = MemoryStore::new();
    store.set("KeyCombo", json!("0:0"));
    assert!(store.load_key_combination().unwrap().is_none());
}

#[test]
fn test_load_key_combination_wrong_type() {
    let store = MemoryStore::new();
    store.set("KeyCombo", json!(42));

    let err = store.load_key_combination().unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue { ref key, .. } if key == "KeyCombo"));
}

#[test]
fn test_load_capture_config_defaults() {
    let store = MemoryStore::new();
    assert_eq!(store.load_capture_config().unwrap(), CaptureConfig::default());
}

#[test]
fn test_capture_config_round_trip() {
    let store = MemoryStore::new();
    let config = CaptureConfig {
        placeholder: "Type a shortcut".to_string(),
        ..CaptureConfig::default()
    };

    store.save_capture_config(&config).unwrap();
    assert_eq!(
        store.get(CAPTURE_CONFIG_KEY).unwrap()["placeholder"],
        "Type a shortcut"
    );
    assert_eq!(store.load_capture_config().unwrap(), config);
}

#[test]
fn test_load_capture_config_invalid_shape() {
    let store = MemoryStore::new();
    store.set(CAPTURE_CONFIG_KEY, json!({ "separator": 5 }));

    let err = store.load_capture_config().unwrap_err();
    assert!(err.to_string().contains("hotkeyCapture"));
}

#[test]
fn test_store_usable_as_trait_object() {
    let store: Box<dyn SettingsStore> = Box::new(MemoryStore::new());
    store.save_key_combination(&KeyCombination::fn_key());
    assert_eq!(
        store.load_key_combination().unwrap(),
        Some(KeyCombination::fn_key())
    );
}
