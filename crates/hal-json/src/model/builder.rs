//! Builder API for ergonomic Resource construction.
//!
//! Provides a fluent interface over the mutating [`Resource`] operations.
//! Curie gating still happens link by link, in call order; the first
//! rejected link is reported by [`ResourceBuilder::build`].
//!
//! # Example
//!
//! ```rust
//! use hal_json::{Curie, Link, ResourceBuilder};
//! use serde_json::json;
//!
//! let order = ResourceBuilder::new()
//!     .self_link("/orders/523")
//!     .curie(Curie::new("acme", "https://docs.acme.com/relations/{rel}"))
//!     .link("acme:warehouse", Link::new("/warehouse/56"))
//!     .data("status", json!("shipped"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(order.links.get("acme:warehouse").unwrap().len(), 1);
//! ```

use serde_json::Value;

use crate::error::LinkError;
use crate::model::{Curie, Link, Resource};

/// Builder for constructing a [`Resource`].
#[derive(Debug, Clone)]
pub struct ResourceBuilder<T = Value> {
    resource: Resource<T>,
    error: Option<LinkError>,
}

impl<T> Default for ResourceBuilder<T> {
    fn default() -> Self {
        Self {
            resource: Resource::new(),
            error: None,
        }
    }
}

impl<T> ResourceBuilder<T> {
    /// Creates a builder for an empty resource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the self link to `href`.
    pub fn self_link(mut self, href: impl Into<String>) -> Self {
        self.resource.set_self(href);
        self
    }

    /// Sets the self link to a full link object.
    pub fn self_link_object(mut self, link: Link) -> Self {
        self.resource.links.set_self(link);
        self
    }

    /// Registers a curie.
    pub fn curie(mut self, curie: Curie) -> Self {
        self.resource.add_curie(curie);
        self
    }

    /// Adds a link. After the first rejected link, further links are ignored.
    pub fn link(mut self, relation: impl Into<String>, link: Link) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.resource.add_link(relation, link) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Adds every link of an iterator under one relation.
    pub fn links(mut self, relation: impl Into<String>, links: impl IntoIterator<Item = Link>) -> Self {
        let relation = relation.into();
        for link in links {
            self = self.link(relation.clone(), link);
        }
        self
    }

    /// Embeds a resource.
    pub fn embed(mut self, relation: impl Into<String>, resource: Resource) -> Self {
        self.resource.add_embed(relation, resource);
        self
    }

    /// Sets a Data entry.
    pub fn data(mut self, key: impl Into<String>, value: T) -> Self {
        self.resource.insert(key, value);
        self
    }

    /// Returns the resource, or the first link insertion error.
    pub fn build(self) -> Result<Resource<T>, LinkError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.resource),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_builder_basic() {
        let r = ResourceBuilder::new()
            .self_link("/orders/523")
            .link("warehouse", Link::new("/warehouse/56"))
            .link("invoice", Link::new("/invoices/873"))
            .data("currency", json!("USD"))
            .build()
            .unwrap();

        assert_eq!(r.links.self_link().unwrap().href, "/orders/523");
        assert_eq!(r.links.relations().len(), 2);
        assert_eq!(r.get("currency"), Some(&json!("USD")));
    }

    #[test]
    fn test_builder_reports_first_rejected_link() {
        let result = ResourceBuilder::<Value>::new()
            .link("a:one", Link::new("/1"))
            .curie(Curie::new("b", "/docs/{rel}"))
            .link("b:two", Link::new("/2"))
            .build();

        match result {
            Err(LinkError::MissingCurie { relation, prefix }) => {
                assert_eq!(relation, "a:one");
                assert_eq!(prefix, "a");
            }
            other => panic!("expected MissingCurie, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_curie_order_matters() {
        let ok = ResourceBuilder::<Value>::new()
            .curie(Curie::new("ns", "/ns/{rel}"))
            .links("ns:item", [Link::new("/items/1"), Link::new("/items/2")])
            .build()
            .unwrap();
        assert_eq!(ok.links.get("ns:item").unwrap().len(), 2);
    }

    #[test]
    fn test_builder_embed() {
        let child = ResourceBuilder::new().self_link("/orders/1").build().unwrap();
        let r = ResourceBuilder::<Value>::new()
            .self_link("/orders")
            .embed("orders", child)
            .build()
            .unwrap();
        assert_eq!(r.embeds.get("orders").unwrap().len(), 1);
    }
}
