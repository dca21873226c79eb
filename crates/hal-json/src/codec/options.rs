//! Encoder and decoder configuration.

use crate::limits::MAX_EMBED_DEPTH;

/// Options for encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Encode a relation holding exactly one embedded resource as a bare
    /// object instead of a one-element array.
    ///
    /// HAL permits both forms. Off by default: embeds are always arrays, so
    /// a consumer sees the same shape regardless of cardinality. Output
    /// written with this enabled needs [`DecodeOptions::lenient`] to be read
    /// back by this crate.
    pub single_embed_as_object: bool,
    /// Indent output for humans. Key order is unaffected.
    pub pretty: bool,
}

impl EncodeOptions {
    /// Creates default (array-only, compact) encoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates compact options that write singleton embeds as bare objects.
    pub fn single_embed_as_object() -> Self {
        Self {
            single_embed_as_object: true,
            ..Self::default()
        }
    }

    /// Returns these options with pretty printing enabled.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

/// Options for decoding.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Maximum `_embedded` nesting.
    pub max_depth: usize,
    /// Accept a bare resource object as the value of an embedded relation.
    pub accept_single_embeds: bool,
    /// Accept a bare link object as the value of a link relation.
    pub accept_single_links: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_EMBED_DEPTH,
            accept_single_embeds: false,
            accept_single_links: false,
        }
    }
}

impl DecodeOptions {
    /// Creates the default strict options: relation values must be arrays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that also accept the bare-object relation values
    /// HAL allows for links and embeds.
    pub fn lenient() -> Self {
        Self {
            accept_single_embeds: true,
            accept_single_links: true,
            ..Self::default()
        }
    }

    /// Returns these options with a different depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
