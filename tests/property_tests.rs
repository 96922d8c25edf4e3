//! Property-based tests for rust_level_logger using proptest

use proptest::prelude::*;
use rust_level_logger::prelude::*;
use rust_level_logger::{fields_to_map, pair_fields, separate_fields, simple_format};

fn canonical_level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::levels().to_vec())
}

/// Any non-empty union of canonical severities
fn level_set() -> impl Strategy<Value = Level> {
    (1u32..=Level::ALL.bits()).prop_map(Level::from_bits)
}

fn flat_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Null),
        "[a-z]{1,8}".prop_map(FieldValue::from),
        any::<i64>().prop_map(FieldValue::from),
        any::<bool>().prop_map(FieldValue::from),
    ]
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// A set holding one severity has exactly that severity
    #[test]
    fn test_single_severity_membership(level in canonical_level()) {
        let mut set = Level::NONE;
        set.set(level);

        for other in Level::levels() {
            prop_assert_eq!(set.has(*other), *other == level);
        }
    }

    /// Formatting then parsing reconstructs the set
    #[test]
    fn test_level_format_parse_roundtrip(level in level_set()) {
        let text = level.format().unwrap();
        prop_assert_eq!(Level::parse(&text).unwrap(), level);
        prop_assert_eq!(text.parse::<Level>().unwrap(), level);
    }

    /// Parsing ignores case and surrounding whitespace
    #[test]
    fn test_level_parse_case_insensitive(level in level_set()) {
        let text = level
            .format()
            .unwrap()
            .to_uppercase()
            .replace('|', " | ");
        prop_assert_eq!(Level::parse(&text).unwrap(), level);
    }

    /// Cumulative activation covers everything up to the most verbose severity
    #[test]
    fn test_cumulative_activation(level in canonical_level()) {
        let active = level.cumulative();
        for other in Level::levels() {
            prop_assert_eq!(active.has(*other), other.bits() <= level.bits());
        }
    }

    /// Only single canonical severities get a fixed label
    #[test]
    fn test_fixed_label_other(bits in any::<u32>()) {
        let level = Level::from_bits(bits);
        let canonical = Level::levels().contains(&level);
        prop_assert_eq!(level.fixed_label() == "OTHER", !canonical);
        prop_assert_eq!(level.fixed_label().len(), 5);
    }

    /// Serde goes through the formatted text
    #[test]
    fn test_level_serde_roundtrip(level in level_set()) {
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, level);
    }
}

// ============================================================================
// Field Pairing Tests
// ============================================================================

proptest! {
    /// Pairing never fails and yields one field per started pair
    #[test]
    fn test_pairing_length(items in prop::collection::vec(flat_value(), 0..20)) {
        let fields = pair_fields(&items);
        prop_assert_eq!(fields.len(), (items.len() + 1) / 2);

        let (names, values) = separate_fields(&items);
        prop_assert_eq!(names.len(), fields.len());
        prop_assert_eq!(values.len(), fields.len());
    }

    /// A trailing lone element is kept as a value, never as a key
    #[test]
    fn test_pairing_odd_tail(items in prop::collection::vec(flat_value(), 0..10), tail in flat_value()) {
        let mut all = items.clone();
        if all.len() % 2 == 1 {
            all.pop();
        }
        all.push(tail.clone());

        let fields = pair_fields(&all);
        let last = fields.last().unwrap();
        prop_assert_eq!(&last.value, &tail);
        prop_assert_eq!(&last.key, &format!("@logfield-{:02}", fields.len()));
    }

    /// Null keys get the name of their 1-based pair position
    #[test]
    fn test_pairing_null_keys(values in prop::collection::vec(any::<i64>(), 1..10)) {
        let items: Vec<FieldValue> = values
            .iter()
            .flat_map(|v| [FieldValue::Null, FieldValue::from(*v)])
            .collect();

        let map = fields_to_map(&items);
        prop_assert_eq!(map.len(), values.len());
        for (idx, value) in values.iter().enumerate() {
            let name = format!("@logfield-{:02}", idx + 1);
            prop_assert_eq!(map.get(&name), Some(&FieldValue::Int(*value)));
        }
    }

    /// The simple formatter starts with the message and adds one separator per pair
    #[test]
    fn test_simple_format_prefix(msg in "[a-z ]{0,20}", items in prop::collection::vec(flat_value(), 0..10)) {
        let out = simple_format(&msg, &items, '=');
        prop_assert!(out.starts_with(&msg));
        if items.is_empty() {
            prop_assert_eq!(out, msg);
        }
    }
}
