// Tests for the modifier codec
// Test code is excluded from coverage since we measure production code coverage
#![cfg_attr(coverage_nightly, coverage(off))]

use super::*;

#[test]
fn test_to_event_flags_single_modifiers() {
    assert_eq!(to_event_flags(Modifiers::CONTROL), 0x40000);
    assert_eq!(to_event_flags(Modifiers::OPTION), 0x80000);
    assert_eq!(to_event_flags(Modifiers::SHIFT), 0x20000);
    assert_eq!(to_event_flags(Modifiers::COMMAND), 0x100000);
    assert_eq!(to_event_flags(Modifiers::FUNCTION), 0x800000);
    assert_eq!(to_event_flags(Modifiers::CAPS_LOCK), 0x10000);
}

#[test]
fn test_to_event_flags_combined() {
    let mods = Modifiers::CONTROL | Modifiers::SHIFT;
    assert_eq!(to_event_flags(mods), 0x40000 | 0x20000);
}

#[test]
fn test_to_event_flags_drops_foreign_bits() {
    let mods = Modifiers::from_bits_retain(Modifiers::COMMAND.bits() | (1 << 21));
    assert_eq!(to_event_flags(mods), CG_EVENT_FLAG_MASK_COMMAND);
}

#[test]
fn test_from_event_flags_ignores_device_bits() {
    // Left-command device bit (0x08) and numeric pad (0x200000) are not modifiers
    let flags = CG_EVENT_FLAG_MASK_COMMAND | 0x08 | 0x200000;
    assert_eq!(from_event_flags(flags), Modifiers::COMMAND);
}

#[test]
fn test_round_trip_all_masks() {
    for bits in 0..=Modifiers::all().bits() {
        let mods = Modifiers::from_bits_truncate(bits);
        assert_eq!(from_event_flags(to_event_flags(mods)), mods);
    }
}

#[test]
fn test_round_trip_restricts_to_tracked_bits() {
    let mods = Modifiers::from_bits_retain(Modifiers::SHIFT.bits() | 0xFF00);
    assert_eq!(from_event_flags(to_event_flags(mods)), Modifiers::SHIFT);
}

#[test]
fn test_symbols_fixed_order() {
    let all = Modifiers::all();
    assert_eq!(modifier_symbols(all), vec!["⌃", "⌥", "⇧", "⌘", "fn", "⇪"]);

    // Order does not depend on how the mask was built
    let mods = Modifiers::COMMAND | Modifiers::CONTROL;
    assert_eq!(modifier_symbols(mods), vec!["⌃", "⌘"]);
}

#[test]
fn test_symbols_empty() {
    assert!(modifier_symbols(Modifiers::empty()).is_empty());
}

#[test]
fn test_tracked_and_any_tracked() {
    let foreign = Modifiers::from_bits_retain(1 << 30);
    assert!(!foreign.any_tracked());
    assert_eq!(foreign.tracked(), Modifiers::empty());

    let mixed = foreign | Modifiers::FUNCTION;
    assert!(mixed.any_tracked());
    assert_eq!(mixed.tracked(), Modifiers::FUNCTION);
}
