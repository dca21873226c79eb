//! Resource object encoding/decoding.
//!
//! Encoded field order:
//! 1. `_links`, if there is a self link or any relation
//! 2. `_embedded`, if any relation was embedded
//! 3. Data entries in ascending key order
//!
//! The same logical resource therefore always produces the same bytes.

use std::collections::BTreeMap;
use std::io::Write;

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{self, Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::codec::embeds::{EmbedsRepr, embeds_from_value};
use crate::codec::links::{decode_curies, links_from_value};
use crate::codec::options::{DecodeOptions, EncodeOptions};
use crate::codec::primitives::{expect_object, non_null, parse_json};
use crate::error::{DecodeError, EncodeError};
use crate::model::{Embeds, Links, ReservedKey, Resource};

// =============================================================================
// ENCODING
// =============================================================================

/// Serializes a [`Resource`] with the encoder's options.
pub(crate) struct ResourceRepr<'a, T> {
    resource: &'a Resource<T>,
    options: &'a EncodeOptions,
}

impl<'a, T> ResourceRepr<'a, T> {
    pub(crate) fn new(resource: &'a Resource<T>, options: &'a EncodeOptions) -> Self {
        Self { resource, options }
    }
}

impl<T: Serialize> Serialize for ResourceRepr<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let resource = self.resource;
        if let Some(key) = reserved_data_key(resource) {
            return Err(ser::Error::custom(EncodeError::ReservedDataKey { key: key.clone() }));
        }

        let mut map = serializer.serialize_map(None)?;
        if !resource.links.is_empty() {
            map.serialize_entry(ReservedKey::Links.as_str(), &resource.links)?;
        }
        if !resource.embeds.is_empty() {
            let embeds = EmbedsRepr {
                embeds: &resource.embeds,
                options: self.options,
            };
            map.serialize_entry(ReservedKey::Embedded.as_str(), &embeds)?;
        }
        for (key, value) in &resource.data {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<T: Serialize> Serialize for Resource<T> {
    /// Serializes with default [`EncodeOptions`].
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResourceRepr::new(self, &EncodeOptions::default()).serialize(serializer)
    }
}

/// Returns the first Data key that the decoder would consume.
fn reserved_data_key<T>(resource: &Resource<T>) -> Option<&String> {
    resource.data.keys().find(|key| {
        ReservedKey::from_key(key).is_some_and(|reserved| reserved.is_consumed_at_top_level())
    })
}

/// Rejects reserved Data keys anywhere in the tree.
fn check_reserved_keys<T>(resource: &Resource<T>) -> Result<(), EncodeError> {
    if let Some(key) = reserved_data_key(resource) {
        return Err(EncodeError::ReservedDataKey { key: key.clone() });
    }
    for resources in resource.embeds.relations().values() {
        for embedded in resources {
            check_reserved_keys(embedded)?;
        }
    }
    Ok(())
}

/// Encodes a Resource to compact JSON bytes.
pub fn encode_resource<T: Serialize>(resource: &Resource<T>) -> Result<Vec<u8>, EncodeError> {
    encode_resource_with_options(resource, EncodeOptions::default())
}

/// Encodes a Resource to JSON bytes with the given options.
pub fn encode_resource_with_options<T: Serialize>(
    resource: &Resource<T>,
    options: EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(256);
    encode_resource_to_writer(&mut buf, resource, options)?;
    Ok(buf)
}

/// Encodes a Resource straight into a writer.
///
/// Reserved Data keys are checked before anything is written.
pub fn encode_resource_to_writer<W: Write, T: Serialize>(
    writer: W,
    resource: &Resource<T>,
    options: EncodeOptions,
) -> Result<(), EncodeError> {
    check_reserved_keys(resource)?;
    let repr = ResourceRepr::new(resource, &options);
    let result = if options.pretty {
        serde_json::to_writer_pretty(writer, &repr)
    } else {
        serde_json::to_writer(writer, &repr)
    };
    result.map_err(|e| EncodeError::Json(e.to_string()))
}

// =============================================================================
// DECODING
// =============================================================================

impl<'de, T: DeserializeOwned> Deserialize<'de> for Resource<T> {
    /// Deserializes with default [`DecodeOptions`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        resource_from_value(value, &DecodeOptions::default()).map_err(de::Error::custom)
    }
}

/// Decodes a Resource from JSON bytes.
///
/// Returns a new resource; on error nothing partially decoded is exposed.
pub fn decode_resource<T: DeserializeOwned>(input: &[u8]) -> Result<Resource<T>, DecodeError> {
    decode_resource_with_options(input, &DecodeOptions::default())
}

/// Decodes a Resource from JSON bytes with the given options.
pub fn decode_resource_with_options<T: DeserializeOwned>(
    input: &[u8],
    options: &DecodeOptions,
) -> Result<Resource<T>, DecodeError> {
    resource_from_value(parse_json(input)?, options)
}

/// Decodes a Resource from a JSON string.
pub fn decode_resource_str<T: DeserializeOwned>(input: &str) -> Result<Resource<T>, DecodeError> {
    decode_resource(input.as_bytes())
}

/// Decodes a Resource from a parsed JSON value.
pub fn resource_from_value<T: DeserializeOwned>(
    value: Value,
    options: &DecodeOptions,
) -> Result<Resource<T>, DecodeError> {
    resource_at_depth(value, options, 0)
}

/// Decodes a Resource nested `depth` levels below the document root.
pub(crate) fn resource_at_depth<T: DeserializeOwned>(
    value: Value,
    options: &DecodeOptions,
    depth: usize,
) -> Result<Resource<T>, DecodeError> {
    if depth > options.max_depth {
        return Err(DecodeError::DepthLimitExceeded { max: options.max_depth });
    }
    let object = expect_object(value, || "resource".to_string())?;

    let mut links_value = None;
    let mut embedded_value = None;
    let mut top_level_curies = None;
    let mut rest = Vec::with_capacity(object.len());
    for (key, value) in object {
        match ReservedKey::from_key(&key) {
            Some(ReservedKey::Links) => links_value = Some(value),
            Some(ReservedKey::Embedded) => embedded_value = Some(value),
            Some(ReservedKey::Curies) => top_level_curies = Some(value),
            _ => rest.push((key, value)),
        }
    }

    let embeds = match non_null(embedded_value) {
        Some(value) => embeds_from_value(value, options, depth)?,
        None => Embeds::new(),
    };
    let mut links = match non_null(links_value) {
        Some(value) => links_from_value(value, options)?,
        None => Links::new(),
    };
    // A top-level curies array replaces any under _links.
    if let Some(value) = non_null(top_level_curies) {
        let curies = decode_curies(value)?;
        tracing::trace!(count = curies.len(), "hoisting top-level curies into _links");
        links.set_curies(curies);
    }

    let mut data = BTreeMap::new();
    for (key, value) in rest {
        match serde_json::from_value(value) {
            Ok(typed) => {
                data.insert(key, typed);
            }
            Err(e) => {
                return Err(DecodeError::DataType {
                    key,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(Resource { links, embeds, data })
}
