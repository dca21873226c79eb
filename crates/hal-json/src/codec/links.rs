//! `_links` object encoding/decoding.
//!
//! Encoded order is `self`, then `curies` (when any are registered), then
//! every relation in ascending key order, each as an array of link objects.

use std::collections::BTreeMap;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::codec::link::{decode_curie, decode_link};
use crate::codec::options::DecodeOptions;
use crate::codec::primitives::{expect_object, json_type, parse_json};
use crate::error::{DecodeError, EncodeError};
use crate::model::{Curie, Link, Links, ReservedKey};

// =============================================================================
// ENCODING
// =============================================================================

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(self_link) = self.self_link() {
            map.serialize_entry(ReservedKey::SelfLink.as_str(), self_link)?;
        }
        if !self.curies().is_empty() {
            map.serialize_entry(ReservedKey::Curies.as_str(), self.curies())?;
        }
        // BTreeMap iteration is ascending by key.
        for (relation, links) in self.relations() {
            map.serialize_entry(relation, links)?;
        }
        map.end()
    }
}

/// Encodes a `_links` object on its own.
pub fn encode_links(links: &Links) -> Result<Vec<u8>, EncodeError> {
    serde_json::to_vec(links).map_err(|e| EncodeError::Json(e.to_string()))
}

// =============================================================================
// DECODING
// =============================================================================

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        links_from_value(value, &DecodeOptions::default()).map_err(de::Error::custom)
    }
}

/// Decodes a `_links` object from bytes.
pub fn decode_links(input: &[u8]) -> Result<Links, DecodeError> {
    links_from_value(parse_json(input)?, &DecodeOptions::default())
}

/// Decodes a `_links` object from a parsed JSON value.
///
/// Curie gating is not applied: a decoded payload may carry curied
/// relations without a matching curie. See
/// [`validate_resource`](crate::validate::validate_resource) for that check.
pub fn links_from_value(value: Value, options: &DecodeOptions) -> Result<Links, DecodeError> {
    let object = expect_object(value, || ReservedKey::Links.as_str().to_string())?;

    let mut self_link = None;
    let mut curies = Vec::new();
    let mut relations = BTreeMap::new();

    for (key, value) in object {
        match ReservedKey::from_key(&key) {
            Some(ReservedKey::SelfLink) => {
                let context = || format!("{}.{}", ReservedKey::Links, ReservedKey::SelfLink);
                let object = expect_object(value, context)?;
                self_link = Some(decode_link(object, &context)?);
            }
            Some(ReservedKey::Curies) => curies = decode_curies(value)?,
            _ => {
                let links = decode_relation(&key, value, options)?;
                relations.insert(key, links);
            }
        }
    }

    Ok(Links::from_parts(self_link, curies, relations))
}

/// Decodes a `curies` array.
pub fn decode_curies(value: Value) -> Result<Vec<Curie>, DecodeError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(DecodeError::CuriesNotArray { found: json_type(&other) }),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(object) => decode_curie(object, &|| format!("curie entry {index}")),
            other => Err(DecodeError::CurieNotObject {
                index,
                found: json_type(&other),
            }),
        })
        .collect()
}

fn decode_relation(relation: &str, value: Value, options: &DecodeOptions) -> Result<Vec<Link>, DecodeError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(object) if options.accept_single_links => {
            let context = || format!("link relation {relation:?}");
            return Ok(vec![decode_link(object, &context)?]);
        }
        other => {
            return Err(DecodeError::RelationNotArray {
                relation: relation.to_string(),
                found: json_type(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(object) => {
                decode_link(object, &|| format!("link relation {relation:?} entry {index}"))
            }
            other => Err(DecodeError::LinkNotObject {
                relation: relation.to_string(),
                index,
                found: json_type(&other),
            }),
        })
        .collect()
}
