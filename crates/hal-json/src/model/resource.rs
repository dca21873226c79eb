//! HAL Resource Objects.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DecodeError, EncodeError, LinkError};
use crate::model::embeds::Embeds;
use crate::model::link::{Curie, Link};
use crate::model::links::Links;

/// A HAL resource: links, embedded resources and the resource's own state.
///
/// `T` is the type of each Data value. Embedded resources are always
/// untyped (`Resource<Value>`), since one relation map holds resources of
/// any shape.
///
/// Data keys should not use reserved HAL names. `_links`, `_embedded` and
/// `curies` are rejected at encode time because decoding would consume
/// them; `self` is accepted at the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T = Value> {
    pub links: Links,
    pub embeds: Embeds,
    /// Resource state, encoded in ascending key order.
    pub data: BTreeMap<String, T>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            links: Links::new(),
            embeds: Embeds::new(),
            data: BTreeMap::new(),
        }
    }
}

impl<T> Resource<T> {
    /// Creates an empty resource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the self link to `href`.
    pub fn set_self(&mut self, href: impl Into<String>) {
        self.links.set_self(Link::new(href));
    }

    /// Adds a link. See [`Links::add_link`].
    pub fn add_link(&mut self, relation: impl Into<String>, link: Link) -> Result<(), LinkError> {
        self.links.add_link(relation, link)
    }

    /// Registers a curie. Must precede any link that uses its prefix.
    pub fn add_curie(&mut self, curie: Curie) {
        self.links.add_curie(curie);
    }

    /// Embeds a resource under `relation`.
    pub fn add_embed(&mut self, relation: impl Into<String>, resource: Resource) {
        self.embeds.add(relation, resource);
    }

    /// Sets a Data entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.data.insert(key.into(), value)
    }

    /// Returns a Data entry.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.data.get(key)
    }
}

impl<T: Serialize> Resource<T> {
    /// Converts Data values to JSON, e.g. before embedding a typed resource.
    pub fn into_untyped(self) -> Result<Resource, EncodeError> {
        let data = self
            .data
            .into_iter()
            .map(|(key, value)| {
                serde_json::to_value(value)
                    .map(|value| (key, value))
                    .map_err(|e| EncodeError::Json(e.to_string()))
            })
            .collect::<Result<_, _>>()?;
        Ok(Resource {
            links: self.links,
            embeds: self.embeds,
            data,
        })
    }
}

impl Resource {
    /// Converts Data values to `U`, e.g. to read an embedded resource as a
    /// typed one.
    pub fn into_typed<U: DeserializeOwned>(self) -> Result<Resource<U>, DecodeError> {
        let data = self
            .data
            .into_iter()
            .map(|(key, value)| match serde_json::from_value(value) {
                Ok(value) => Ok((key, value)),
                Err(e) => Err(DecodeError::DataType {
                    key,
                    message: e.to_string(),
                }),
            })
            .collect::<Result<_, _>>()?;
        Ok(Resource {
            links: self.links,
            embeds: self.embeds,
            data,
        })
    }
}
