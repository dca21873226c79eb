//! HAL JSON encoding/decoding.
//!
//! Encoding writes through serde so output streams straight into a buffer
//! or writer. Decoding parses into a generic JSON value first, then splits
//! it into links, embedded resources and typed Data.

mod embeds;
pub mod link;
pub mod links;
pub mod options;
pub mod primitives;
pub mod resource;

pub use link::{decode_curie, decode_link};
pub use links::{decode_curies, decode_links, encode_links, links_from_value};
pub use options::{DecodeOptions, EncodeOptions};
pub use primitives::json_type;
pub use resource::{
    decode_resource, decode_resource_str, decode_resource_with_options, encode_resource,
    encode_resource_to_writer, encode_resource_with_options, resource_from_value,
};
