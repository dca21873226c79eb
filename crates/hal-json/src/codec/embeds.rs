//! `_embedded` object encoding/decoding.
//!
//! Relations are written in insertion order and are not sorted.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::codec::options::{DecodeOptions, EncodeOptions};
use crate::codec::primitives::json_type;
use crate::codec::resource::{ResourceRepr, resource_at_depth};
use crate::error::DecodeError;
use crate::model::{Embeds, RelationMap, Resource};

// =============================================================================
// ENCODING
// =============================================================================

/// Serializes an [`Embeds`] with the encoder's options.
pub(crate) struct EmbedsRepr<'a> {
    pub embeds: &'a Embeds,
    pub options: &'a EncodeOptions,
}

impl Serialize for EmbedsRepr<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.embeds.len()))?;
        for (relation, resources) in self.embeds.relations() {
            match resources.as_slice() {
                [single] if self.options.single_embed_as_object => {
                    map.serialize_entry(relation, &ResourceRepr::new(single, self.options))?;
                }
                _ => {
                    let seq = ResourceSeq {
                        resources,
                        options: self.options,
                    };
                    map.serialize_entry(relation, &seq)?;
                }
            }
        }
        map.end()
    }
}

struct ResourceSeq<'a> {
    resources: &'a [Resource],
    options: &'a EncodeOptions,
}

impl Serialize for ResourceSeq<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.resources.iter().map(|r| ResourceRepr::new(r, self.options)))
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes an `_embedded` object belonging to a resource at `depth`.
///
/// Every relation value must be an array of resource objects, unless
/// [`DecodeOptions::accept_single_embeds`] allows a bare object.
pub(crate) fn embeds_from_value(value: Value, options: &DecodeOptions, depth: usize) -> Result<Embeds, DecodeError> {
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(DecodeError::NotAnObject {
                context: "_embedded".to_string(),
                found: json_type(&other),
            });
        }
    };
    tracing::trace!(depth, relations = object.len(), "decoding embedded resources");

    let mut relations = RelationMap::default();
    for (relation, value) in object {
        let items = match value {
            Value::Array(items) => items,
            single @ Value::Object(_) if options.accept_single_embeds => vec![single],
            other => {
                return Err(DecodeError::EmbedNotArray {
                    relation,
                    found: json_type(&other),
                });
            }
        };

        let mut resources = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match resource_at_depth(item, options, depth + 1) {
                Ok(resource) => resources.push(resource),
                Err(source) => {
                    return Err(DecodeError::EmbeddedResource {
                        relation,
                        index,
                        source: Box::new(source),
                    });
                }
            }
        }
        relations.insert(relation, resources);
    }

    Ok(Embeds::from_relations(relations))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn order(id: u32) -> Resource {
        let mut r = Resource::new();
        r.set_self(format!("/orders/{id}"));
        r
    }

    fn encode(embeds: &Embeds, options: &EncodeOptions) -> String {
        serde_json::to_string(&EmbedsRepr { embeds, options }).unwrap()
    }

    #[test]
    fn test_encode_insertion_order() {
        let mut embeds = Embeds::new();
        embeds.add("zeta", order(1));
        embeds.add("alpha", order(2));
        assert_eq!(
            encode(&embeds, &EncodeOptions::default()),
            r#"{"zeta":[{"_links":{"self":{"href":"/orders/1"}}}],"alpha":[{"_links":{"self":{"href":"/orders/2"}}}]}"#
        );
    }

    #[test]
    fn test_encode_single_as_object() {
        let mut embeds = Embeds::new();
        embeds.add("one", order(1));
        embeds.add("two", order(2));
        embeds.add("two", order(3));
        let encoded = encode(&embeds, &EncodeOptions::single_embed_as_object());
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert!(value["one"].is_object());
        assert_eq!(value["two"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_decode_preserves_relation_order() {
        let embeds = embeds_from_value(
            json!({"zeta": [{}], "alpha": [{}, {}]}),
            &DecodeOptions::default(),
            0,
        )
        .unwrap();
        let keys: Vec<_> = embeds.relations().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
        assert_eq!(embeds.get("alpha").unwrap().len(), 2);
    }

    #[test]
    fn test_decode_non_array_relation() {
        let err = embeds_from_value(json!({"orders": {}}), &DecodeOptions::default(), 0).unwrap_err();
        assert_eq!(
            err,
            DecodeError::EmbedNotArray {
                relation: "orders".to_string(),
                found: "object",
            }
        );

        let embeds = embeds_from_value(json!({"orders": {}}), &DecodeOptions::lenient(), 0).unwrap();
        assert_eq!(embeds.get("orders").unwrap().len(), 1);

        let err = embeds_from_value(json!({"orders": 3}), &DecodeOptions::lenient(), 0).unwrap_err();
        assert!(matches!(err, DecodeError::EmbedNotArray { found: "number", .. }));
    }

    #[test]
    fn test_decode_nested_error_carries_path() {
        let err = embeds_from_value(
            json!({"orders": [{}, {"_links": {"foo": 1}}]}),
            &DecodeOptions::default(),
            0,
        )
        .unwrap_err();
        match err {
            DecodeError::EmbeddedResource { relation, index, source } => {
                assert_eq!(relation, "orders");
                assert_eq!(index, 1);
                assert!(matches!(*source, DecodeError::RelationNotArray { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_not_object() {
        let err = embeds_from_value(json!([]), &DecodeOptions::default(), 0).unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject { found: "array", .. }));
    }
}
