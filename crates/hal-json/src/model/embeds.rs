//! The `_embedded` collection.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::model::resource::Resource;

/// Relation-keyed map that keeps insertion order.
pub type RelationMap<V> = IndexMap<String, V, FxBuildHasher>;

/// Embedded resources, keyed by relation.
///
/// Relations keep insertion order and are encoded in that order, unlike
/// link relations and Data keys which are encoded sorted. HAL does not
/// order embeds; do not sort them here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Embeds {
    relations: RelationMap<Vec<Resource>>,
}

impl Embeds {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_relations(relations: RelationMap<Vec<Resource>>) -> Self {
        Self { relations }
    }

    /// Appends a resource under `relation`. No cycle detection is done;
    /// the resource is moved in, so the tree owns it.
    pub fn add(&mut self, relation: impl Into<String>, resource: Resource) {
        self.relations.entry(relation.into()).or_default().push(resource);
    }

    /// Returns the resources of one relation.
    pub fn get(&self, relation: &str) -> Option<&[Resource]> {
        self.relations.get(relation).map(Vec::as_slice)
    }

    /// Returns relations in insertion order.
    pub fn relations(&self) -> &RelationMap<Vec<Resource>> {
        &self.relations
    }

    /// Returns true if no relation has been added.
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Number of relations.
    pub fn len(&self) -> usize {
        self.relations.len()
    }
}
