//! Property-based tests for the HAL codec.
//!
//! These tests use proptest to generate resource trees and verify that
//! encoding is deterministic and survives a decode/encode cycle.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p hal-json --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p hal-json --test property_tests
//! ```

use proptest::prelude::*;
use serde_json::{Value, json};

use hal_json::codec::{decode_resource, encode_resource};
use hal_json::{Curie, Link, ReservedKey, Resource};

// =============================================================================
// Test Strategies
// =============================================================================

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[ -~]{0,12}")
}

fn link() -> impl Strategy<Value = Link> {
    (
        "/[a-z0-9/{}?]{0,16}",
        prop::option::of(any::<bool>()),
        optional_text(),
        optional_text(),
        optional_text(),
        optional_text(),
        optional_text(),
        optional_text(),
    )
        .prop_map(|(href, templated, media_type, deprecation, name, profile, title, hreflang)| Link {
            href,
            templated,
            media_type,
            deprecation,
            name,
            profile,
            title,
            hreflang,
        })
}

/// Plain, curied (`ns:`) and leading-colon relation names.
fn relation() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        "ns:[a-z]{1,8}",
        ":[a-z]{1,6}",
    ]
}

/// Data keys the encoder accepts.
fn data_key() -> impl Strategy<Value = String> {
    "[a-z_]{1,10}".prop_filter("reserved key", |k| {
        !ReservedKey::from_key(k).is_some_and(|r| r.is_consumed_at_top_level())
    })
}

/// JSON values without floats, so textual round-trips are exact.
fn data_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "\\PC{0,16}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn leaf_resource() -> impl Strategy<Value = Resource> {
    (
        prop::option::of(link()),
        any::<bool>(),
        prop::collection::vec((relation(), link()), 0..5),
        prop::collection::btree_map(data_key(), data_value(), 0..5),
    )
        .prop_map(|(self_link, with_curie, links, data)| {
            let mut r = Resource::new();
            if let Some(link) = self_link {
                r.links.set_self(link);
            }
            if with_curie {
                r.add_curie(Curie::new("ns", "https://docs.example.com/{rel}"));
            }
            for (relation, link) in links {
                // Curied relations are dropped when no curie was registered.
                let _ = r.add_link(relation, link);
            }
            r.data = data;
            r
        })
}

fn resource() -> impl Strategy<Value = Resource> {
    (
        leaf_resource(),
        prop::collection::vec(("[a-z]{1,6}", leaf_resource()), 0..4),
    )
        .prop_map(|(mut r, embeds)| {
            for (relation, child) in embeds {
                r.add_embed(relation, child);
            }
            r
        })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn reencode_is_byte_identical(r in resource()) {
        let first = encode_resource(&r).unwrap();
        let decoded: Resource = decode_resource(&first).unwrap();
        let second = encode_resource(&decoded).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn encoding_is_deterministic(r in resource()) {
        let first = encode_resource(&r).unwrap();
        let second = encode_resource(&r.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn links_and_embeds_survive_decode(r in resource()) {
        let decoded: Resource = decode_resource(&encode_resource(&r).unwrap()).unwrap();
        if r.links.is_empty() {
            prop_assert!(decoded.links.is_empty());
        } else {
            prop_assert_eq!(&decoded.links, &r.links);
        }
        prop_assert_eq!(&decoded.embeds.len(), &r.embeds.len());
        prop_assert_eq!(&decoded.data, &r.data);
    }

    #[test]
    fn data_keys_are_sorted(r in resource()) {
        let value: Value = serde_json::from_slice(&encode_resource(&r).unwrap()).unwrap();
        let keys: Vec<&String> = value
            .as_object()
            .unwrap()
            .keys()
            .filter(|k| k.as_str() != "_links" && k.as_str() != "_embedded")
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn curied_relations_always_have_a_curie(r in resource()) {
        for relation in r.links.relations().keys() {
            if let Some((prefix, _)) = hal_json::model::split_curied(relation) {
                prop_assert!(r.links.find_curie(prefix).is_some());
            }
        }
    }
}
