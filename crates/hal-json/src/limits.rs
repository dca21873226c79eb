//! Limits applied while decoding untrusted HAL documents.

/// Default maximum nesting of `_embedded` resources.
///
/// Each embedded level costs four JSON nesting levels (resource object,
/// `_embedded` object, relation array, member object), so 32 levels stay
/// inside serde_json's own recursion limit of 128.
pub const MAX_EMBED_DEPTH: usize = 32;

/// Media type of HAL JSON documents.
pub const HAL_MEDIA_TYPE: &str = "application/hal+json";
