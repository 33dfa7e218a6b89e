//! Property-based tests for the output contract: presence semantics, the
//! always-emitted item list, and whitespace-only divergence between the two
//! output modes, across generated documents.

use alfred_script_filter::{to_string, to_string_indent, Item, ScriptFilter, Variables};
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = (Item, ItemShape)> {
    (
        "[a-zA-Z0-9 ./:_-]{0,16}",
        proptest::option::of("[a-zA-Z0-9 ]{0,12}"),
        proptest::option::of("[a-zA-Z0-9 ]{0,12}"),
        proptest::option::of("[a-zA-Z0-9 ]{0,12}"),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(title, uid, subtitle, arg, valid)| {
            let shape = ItemShape {
                uid: uid.is_some(),
                subtitle: subtitle.is_some(),
                arg: arg.is_some(),
                valid,
            };
            let mut item = Item::new(title);
            if let Some(uid) = uid {
                item = item.uid(uid);
            }
            if let Some(subtitle) = subtitle {
                item = item.subtitle(subtitle);
            }
            if let Some(arg) = arg {
                item = item.arg(arg);
            }
            if let Some(valid) = valid {
                item = item.valid(valid);
            }
            (item, shape)
        })
}

#[derive(Clone, Debug)]
struct ItemShape {
    uid: bool,
    subtitle: bool,
    arg: bool,
    valid: Option<bool>,
}

fn arb_filter() -> impl Strategy<Value = ScriptFilter> {
    (
        proptest::collection::vec(arb_item().prop_map(|(item, _)| item), 0..8),
        proptest::collection::vec(("[a-z]{1,6}", "[a-z0-9]{0,6}"), 0..4),
    )
        .prop_map(|(items, variables)| {
            let mut sf = ScriptFilter::new();
            sf.append(items);
            for (k, v) in variables {
                sf.put_variable(k, v);
            }
            sf
        })
}

proptest! {
    #[test]
    fn items_key_is_always_an_array(sf in arb_filter()) {
        let value: serde_json::Value =
            serde_json::from_str(&to_string(&sf).unwrap()).unwrap();
        let items = value.get("items").expect("items key missing");
        prop_assert!(items.is_array());
        prop_assert_eq!(items.as_array().unwrap().len(), sf.items().len());
    }

    #[test]
    fn variables_key_present_iff_nonempty(sf in arb_filter()) {
        let value: serde_json::Value =
            serde_json::from_str(&to_string(&sf).unwrap()).unwrap();
        prop_assert_eq!(value.get("variables").is_some(), !sf.variables().is_empty());
    }

    #[test]
    fn optional_keys_track_presence_not_value((item, shape) in arb_item()) {
        let value: serde_json::Value =
            serde_json::from_str(&to_string(&item).unwrap()).unwrap();
        let obj = value.as_object().unwrap();

        // title is unconditional, even when empty
        prop_assert!(obj.contains_key("title"));
        prop_assert_eq!(obj.contains_key("uid"), shape.uid);
        prop_assert_eq!(obj.contains_key("subtitle"), shape.subtitle);
        prop_assert_eq!(obj.contains_key("arg"), shape.arg);
        prop_assert_eq!(obj.contains_key("valid"), shape.valid.is_some());
        if let Some(valid) = shape.valid {
            prop_assert_eq!(obj["valid"].as_bool(), Some(valid));
        }
    }

    #[test]
    fn compact_and_indented_parse_identically(
        sf in arb_filter(),
        prefix in "[ \t]{0,3}",
        indent in "[ \t]{0,4}",
    ) {
        let compact: serde_json::Value =
            serde_json::from_str(&to_string(&sf).unwrap()).unwrap();
        let indented: serde_json::Value =
            serde_json::from_str(&to_string_indent(&sf, &prefix, &indent).unwrap()).unwrap();
        prop_assert_eq!(compact, indented);
    }

    #[test]
    fn serialization_is_deterministic(sf in arb_filter()) {
        prop_assert_eq!(to_string(&sf).unwrap(), to_string(&sf).unwrap());
    }

    #[test]
    fn variables_last_write_wins(
        key in "[a-z]{1,6}",
        first in "[a-z0-9]{0,6}",
        second in "[a-z0-9]{0,6}",
    ) {
        let mut vars = Variables::new();
        vars.put(key.clone(), first);
        vars.put(key.clone(), second.clone());
        prop_assert_eq!(vars.len(), 1);
        prop_assert_eq!(vars.get(&key), Some(second.as_str()));
    }
}
