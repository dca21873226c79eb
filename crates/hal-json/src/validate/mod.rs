//! Semantic validation for HAL resources.
//!
//! This module provides validation beyond structural decoding. Decoding
//! accepts anything shaped like HAL; it does not apply curie gating and
//! keeps a top-level `self` key as Data. Validation reports those cases
//! for callers that want a strict document.
//!
//! **Note:** Validation is opt-in. Encoding only rejects Data keys the
//! decoder would consume (`_links`, `_embedded`, `curies`).

use serde_json::Value;

use crate::error::ValidationError;
use crate::model::{Links, ReservedKey, Resource, split_curied};

/// Validates a resource tree, returning the first violation.
///
/// Checks, for the resource and every embedded resource:
/// - Data keys do not use any reserved HAL name
/// - curied relations have a registered curie
/// - links have a non-empty href
///
/// Paths in errors are dotted, e.g. `_embedded.orders[1]`; the root is `$`.
pub fn validate_resource<T>(resource: &Resource<T>) -> Result<(), ValidationError> {
    validate_at(resource, "$")
}

fn validate_at<T>(resource: &Resource<T>, path: &str) -> Result<(), ValidationError> {
    if let Some(key) = resource.data.keys().find(|k| ReservedKey::from_key(k).is_some()) {
        return Err(ValidationError::ReservedDataKey {
            path: path.to_string(),
            key: key.clone(),
        });
    }

    validate_links(&resource.links, path)?;

    for (relation, embedded) in resource.embeds.relations() {
        for (index, child) in embedded.iter().enumerate() {
            let child_path = format!("{path}.{}.{relation}[{index}]", ReservedKey::Embedded);
            validate_at::<Value>(child, &child_path)?;
        }
    }
    Ok(())
}

fn validate_links(links: &Links, path: &str) -> Result<(), ValidationError> {
    if let Some(self_link) = links.self_link() {
        if self_link.href.is_empty() {
            return Err(ValidationError::EmptyHref {
                path: path.to_string(),
                relation: ReservedKey::SelfLink.as_str().to_string(),
            });
        }
    }

    for (relation, entries) in links.relations() {
        validate_relation_name(links, relation).map_err(|prefix| ValidationError::UnregisteredCurie {
            path: path.to_string(),
            relation: relation.clone(),
            prefix,
        })?;
        if entries.iter().any(|link| link.href.is_empty()) {
            return Err(ValidationError::EmptyHref {
                path: path.to_string(),
                relation: relation.clone(),
            });
        }
    }
    Ok(())
}

/// Checks that a relation name would pass curie gating against `links`.
///
/// Returns the unregistered prefix on failure.
pub fn validate_relation_name(links: &Links, relation: &str) -> Result<(), String> {
    match split_curied(relation) {
        Some((prefix, _)) if links.find_curie(prefix).is_none() => Err(prefix.to_string()),
        _ => Ok(()),
    }
}
