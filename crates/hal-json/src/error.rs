//! Error types for HAL link insertion, encoding, decoding and validation.

use thiserror::Error;

/// Error kinds a caller can branch on, independent of the variant detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A curied relation was added before its curie was registered.
    MissingCurie,
    /// Input was not JSON, or a HAL sub-structure had the wrong shape.
    MalformedPayload,
    /// A Data value could not be converted to the resource's value type.
    TypeMismatch,
    /// A link relation used a name HAL reserves inside `_links`.
    ReservedName,
}

/// Error raised synchronously by [`Links::add_link`](crate::model::Links::add_link).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("must add curie {prefix:?} before adding curied link relation {relation:?}")]
    MissingCurie { relation: String, prefix: String },

    #[error("link relation {relation:?} is reserved inside _links")]
    ReservedRelation { relation: String },
}

impl LinkError {
    /// Returns the error kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinkError::MissingCurie { .. } => ErrorKind::MissingCurie,
            LinkError::ReservedRelation { .. } => ErrorKind::ReservedName,
        }
    }
}

/// Error during HAL decoding.
///
/// Variants name the offending key wherever the payload makes that possible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === Input ===
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{context} must be a JSON object, found {found}")]
    NotAnObject {
        context: String,
        found: &'static str,
    },

    // === _links ===
    #[error("link relation {relation:?} must be an array of link objects, found {found}")]
    RelationNotArray {
        relation: String,
        found: &'static str,
    },

    #[error("link relation {relation:?} entry {index} must be a link object, found {found}")]
    LinkNotObject {
        relation: String,
        index: usize,
        found: &'static str,
    },

    #[error("curies must be an array of curie objects, found {found}")]
    CuriesNotArray { found: &'static str },

    #[error("curie entry {index} must be a JSON object, found {found}")]
    CurieNotObject { index: usize, found: &'static str },

    #[error("{context} is missing required property {property:?}")]
    MissingProperty {
        context: String,
        property: &'static str,
    },

    #[error("{context} property {property:?} must be a {expected}, found {found}")]
    InvalidProperty {
        context: String,
        property: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    // === _embedded ===
    #[error("embedded relation {relation:?} must be an array of resources, found {found}")]
    EmbedNotArray {
        relation: String,
        found: &'static str,
    },

    #[error("embedded relation {relation:?} entry {index}: {source}")]
    EmbeddedResource {
        relation: String,
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },

    #[error("embedded resources nested deeper than {max} levels")]
    DepthLimitExceeded { max: usize },

    // === Data ===
    #[error("data key {key:?} does not match the resource value type: {message}")]
    DataType { key: String, message: String },
}

impl DecodeError {
    /// Returns the error kind for this error.
    ///
    /// Errors inside embedded resources report the kind of the inner error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::DataType { .. } => ErrorKind::TypeMismatch,
            DecodeError::EmbeddedResource { source, .. } => source.kind(),
            _ => ErrorKind::MalformedPayload,
        }
    }

    /// Returns the innermost error, unwrapping embedded-resource context.
    pub fn root_cause(&self) -> &DecodeError {
        match self {
            DecodeError::EmbeddedResource { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Error during HAL encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("data key {key:?} collides with a reserved HAL property")]
    ReservedDataKey { key: String },

    #[error("JSON serialization failed: {0}")]
    Json(String),
}

/// Error during semantic validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{path}: data key {key:?} is a reserved HAL property name")]
    ReservedDataKey { path: String, key: String },

    #[error("{path}: link relation {relation:?} uses unregistered curie {prefix:?}")]
    UnregisteredCurie {
        path: String,
        relation: String,
        prefix: String,
    },

    #[error("{path}: link relation {relation:?} has an empty href")]
    EmptyHref { path: String, relation: String },
}
