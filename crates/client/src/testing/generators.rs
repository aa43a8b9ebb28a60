//! Proptest strategies for inventory API documents.

use proptest::prelude::*;
use serde_json::{Map, Value};

/// Keys commonly seen in root documents, plus the two envelope keys.
const KEYS: &[&str] = &[
    "collection",
    "items",
    "version",
    "href",
    "projects",
    "accounts",
    "invoices",
    "regions",
];

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z/:.]{0,12}".prop_map(Value::String),
    ]
}

/// Arbitrary JSON nested up to a few levels, biased toward envelope keys.
pub fn arb_document() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::vec((prop::sample::select(KEYS), inner), 0..6).prop_map(|pairs| {
                let mut map = Map::new();
                for (k, v) in pairs {
                    map.insert(k.to_string(), v);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// A project record with realistic field types.
pub fn arb_project() -> impl Strategy<Value = Value> {
    (
        "[A-Z0-9]{16}",
        "[A-Za-z ]{1,20}",
        any::<bool>(),
        any::<bool>(),
        prop::option::of("[A-Z0-9]{16}"),
    )
        .prop_map(|(public_id, name, public, active, inventory_type)| {
            serde_json::json!({
                "public_id": public_id,
                "name": name,
                "public": public,
                "active": active,
                "inventory_type_public_id": inventory_type,
                "memberships": [],
            })
        })
}
