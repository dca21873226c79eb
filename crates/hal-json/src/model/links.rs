//! The `_links` collection and its curie registry.

use std::collections::BTreeMap;

use crate::error::LinkError;
use crate::model::keys::ReservedKey;
use crate::model::link::{Curie, Link, split_curied};

/// Links of a resource, keyed by relation.
///
/// Relations are kept sorted so encoding emits them in ascending order.
/// Fields are private: links only enter through [`Links::add_link`], which
/// enforces curie registration, or through the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Links {
    self_link: Option<Link>,
    curies: Vec<Curie>,
    relations: BTreeMap<String, Vec<Link>>,
}

impl Links {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a collection without curie gating. Used by the decoder.
    pub(crate) fn from_parts(
        self_link: Option<Link>,
        curies: Vec<Curie>,
        relations: BTreeMap<String, Vec<Link>>,
    ) -> Self {
        Self {
            self_link,
            curies,
            relations,
        }
    }

    /// Returns the self link.
    pub fn self_link(&self) -> Option<&Link> {
        self.self_link.as_ref()
    }

    /// Sets the self link, replacing any previous one.
    pub fn set_self(&mut self, link: Link) {
        self.self_link = Some(link);
    }

    /// Removes and returns the self link.
    pub fn take_self(&mut self) -> Option<Link> {
        self.self_link.take()
    }

    /// Returns registered curies in insertion order.
    pub fn curies(&self) -> &[Curie] {
        &self.curies
    }

    /// Appends a curie. Duplicate names are not detected.
    pub fn add_curie(&mut self, curie: Curie) {
        self.curies.push(curie);
    }

    /// Replaces every registered curie.
    ///
    /// Relations already added are kept even if their prefix no longer has
    /// a curie; [`validate_resource`](crate::validate::validate_resource)
    /// reports those.
    pub fn set_curies(&mut self, curies: Vec<Curie>) {
        self.curies = curies;
    }

    /// Returns relations in ascending key order.
    pub fn relations(&self) -> &BTreeMap<String, Vec<Link>> {
        &self.relations
    }

    /// Returns the links of one relation.
    pub fn get(&self, relation: &str) -> Option<&[Link]> {
        self.relations.get(relation).map(Vec::as_slice)
    }

    /// Adds a link under `relation`.
    ///
    /// A relation with a colon after its first character is curied, and its
    /// prefix must name a curie already registered here. `self` and
    /// `curies` are not relations here; use [`Links::set_self`] and
    /// [`Links::add_curie`]. HAL does not forbid these names as relations,
    /// but they are refused here with [`LinkError::ReservedRelation`]:
    /// inside `_links` they would emit a second key next to the self link
    /// or the curie array. On error nothing is changed.
    pub fn add_link(&mut self, relation: impl Into<String>, link: Link) -> Result<(), LinkError> {
        let relation = relation.into();
        if matches!(
            ReservedKey::from_key(&relation),
            Some(ReservedKey::SelfLink | ReservedKey::Curies)
        ) {
            return Err(LinkError::ReservedRelation { relation });
        }
        if let Some((prefix, _)) = split_curied(&relation) {
            if self.find_curie(prefix).is_none() {
                tracing::debug!(%relation, %prefix, "rejected curied link without registered curie");
                return Err(LinkError::MissingCurie {
                    prefix: prefix.to_string(),
                    relation,
                });
            }
        }
        self.relations.entry(relation).or_default().push(link);
        Ok(())
    }

    /// Returns the first curie registered under `name`.
    pub fn find_curie(&self, name: &str) -> Option<&Curie> {
        self.curies.iter().find(|c| c.name == name)
    }

    /// Expands a curied relation to its full URI.
    ///
    /// Returns `None` for relations that are not curied or whose curie is
    /// not registered.
    pub fn resolve_relation(&self, relation: &str) -> Option<String> {
        let (prefix, reference) = split_curied(relation)?;
        self.find_curie(prefix).map(|c| c.expand(reference))
    }

    /// Returns true if there is neither a self link nor any relation.
    ///
    /// Curies alone do not make the collection non-empty: a resource with
    /// only curies encodes without `_links`.
    pub fn is_empty(&self) -> bool {
        self.self_link.is_none() && self.relations.is_empty()
    }

    /// Total number of links, counting the self link.
    pub fn len(&self) -> usize {
        self.relations.values().map(Vec::len).sum::<usize>() + usize::from(self.self_link.is_some())
    }
}
