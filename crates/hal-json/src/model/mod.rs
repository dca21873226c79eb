//! Data model types for HAL documents.
//!
//! This module contains the in-memory resource graph:
//! - Links and curies
//! - The `_links` and `_embedded` collections
//! - Resources with typed state
//! - Reserved wire key names
//! - Builders (ergonomic construction)

pub mod builder;
pub mod embeds;
pub mod keys;
pub mod link;
pub mod links;
pub mod resource;

pub use builder::ResourceBuilder;
pub use embeds::{Embeds, RelationMap};
pub use keys::{LinkProperty, ReservedKey};
pub use link::{Curie, Link, split_curied};
pub use links::Links;
pub use resource::Resource;
