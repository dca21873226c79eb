//! HAL: Hypertext Application Language resources in JSON.
//!
//! This crate encodes and decodes HAL documents (`application/hal+json`)
//! as described in draft-kelly-json-hal.
//!
//! # Overview
//!
//! A HAL resource carries:
//! - **Links** under `_links`: a self link, curies, and link arrays keyed by
//!   relation
//! - **Embedded resources** under `_embedded`, keyed by relation
//! - **State**: every other property, typed as `T` in [`Resource<T>`]
//!
//! # Quick Start
//!
//! ```rust
//! use hal_json::codec::{decode_resource, encode_resource};
//! use hal_json::{Link, Resource};
//! use serde_json::json;
//!
//! let mut order = Resource::new();
//! order.set_self("/orders/523");
//! order.add_link("warehouse", Link::new("/warehouse/56")).unwrap();
//! order.add_link("invoice", Link::new("/invoices/873")).unwrap();
//! order.insert("currency", json!("USD"));
//! order.insert("status", json!("shipped"));
//! order.insert("total", json!(10.20));
//!
//! let bytes = encode_resource(&order).unwrap();
//! assert_eq!(
//!     String::from_utf8(bytes.clone()).unwrap(),
//!     r#"{"_links":{"self":{"href":"/orders/523"},"invoice":[{"href":"/invoices/873"}],"warehouse":[{"href":"/warehouse/56"}]},"currency":"USD","status":"shipped","total":10.2}"#
//! );
//!
//! let decoded: Resource = decode_resource(&bytes).unwrap();
//! assert_eq!(decoded, order);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Resources, links, curies, embeds and reserved key names
//! - [`codec`]: JSON encoding/decoding and codec options
//! - [`validate`]: Opt-in semantic validation
//! - [`error`]: Error types
//! - [`limits`]: Decoding limits
//!
//! # Determinism
//!
//! Encoding is deterministic: `_links` first, `_embedded` second, then
//! Data in ascending key order. Inside `_links`, `self` and `curies` come
//! before relations in ascending order. Embedded relations keep insertion
//! order. `encode(decode(encode(r)))` equals `encode(r)` byte for byte.
//!
//! # Curies
//!
//! A relation like `acme:widgets` is curied. [`Links::add_link`] refuses it
//! until a curie named `acme` is registered. Decoding does not apply this
//! check; use [`validate::validate_resource`] for that.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    DecodeOptions, EncodeOptions, decode_links, decode_resource, decode_resource_str,
    decode_resource_with_options, encode_links, encode_resource, encode_resource_to_writer,
    encode_resource_with_options, resource_from_value,
};
pub use error::{DecodeError, EncodeError, ErrorKind, LinkError, ValidationError};
pub use limits::HAL_MEDIA_TYPE;
pub use model::{Curie, Embeds, Link, LinkProperty, Links, ReservedKey, Resource, ResourceBuilder};
pub use validate::validate_resource;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// HAL draft this crate implements.
pub const HAL_DRAFT: &str = "draft-kelly-json-hal-11";
