//! Link and Curie object encoding/decoding.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::codec::primitives::{expect_bool, expect_string};
use crate::error::DecodeError;
use crate::model::{Curie, Link, LinkProperty};

// =============================================================================
// ENCODING
// =============================================================================

impl Serialize for Link {
    /// Writes `href`, then `templated` if set, then the present optional
    /// text properties in [`LinkProperty::OPTIONAL_TEXT`] order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(LinkProperty::Href.as_str(), &self.href)?;
        if let Some(templated) = self.templated {
            map.serialize_entry(LinkProperty::Templated.as_str(), &templated)?;
        }
        for property in LinkProperty::OPTIONAL_TEXT {
            if let Some(value) = self.text_property(property) {
                map.serialize_entry(property.as_str(), value)?;
            }
        }
        map.end()
    }
}

impl Serialize for Curie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(LinkProperty::Name.as_str(), &self.name)?;
        map.serialize_entry(LinkProperty::Href.as_str(), &self.href)?;
        if self.templated {
            map.serialize_entry(LinkProperty::Templated.as_str(), &true)?;
        }
        map.end()
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a Link object.
///
/// `href` is required. Known properties must have their JSON type; unknown
/// properties are ignored.
pub fn decode_link(object: Map<String, Value>, context: &dyn Fn() -> String) -> Result<Link, DecodeError> {
    let mut link = Link::default();
    let mut href = None;

    for (key, value) in object {
        let Some(property) = LinkProperty::from_key(&key) else {
            tracing::trace!(property = %key, "ignoring unknown link property");
            continue;
        };
        match property {
            LinkProperty::Href => href = Some(expect_string(value, property, context)?),
            LinkProperty::Templated => link.templated = Some(expect_bool(value, property, context)?),
            _ => {
                let text = expect_string(value, property, context)?;
                if let Some(slot) = link.optional_text_mut(property) {
                    *slot = Some(text);
                }
            }
        }
    }

    link.href = href.ok_or_else(|| DecodeError::MissingProperty {
        context: context(),
        property: LinkProperty::Href.as_str(),
    })?;
    Ok(link)
}

/// Decodes a Curie object. `name` and `href` are required.
pub fn decode_curie(object: Map<String, Value>, context: &dyn Fn() -> String) -> Result<Curie, DecodeError> {
    let mut name = None;
    let mut href = None;
    let mut templated = false;

    for (key, value) in object {
        match LinkProperty::from_key(&key) {
            Some(p @ LinkProperty::Name) => name = Some(expect_string(value, p, context)?),
            Some(p @ LinkProperty::Href) => href = Some(expect_string(value, p, context)?),
            Some(p @ LinkProperty::Templated) => templated = expect_bool(value, p, context)?,
            _ => {}
        }
    }

    let missing = |property: LinkProperty| DecodeError::MissingProperty {
        context: context(),
        property: property.as_str(),
    };
    Ok(Curie {
        name: name.ok_or_else(|| missing(LinkProperty::Name))?,
        href: href.ok_or_else(|| missing(LinkProperty::Href))?,
        templated,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ctx() -> String {
        "link relation \"test\"".to_string()
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_encode_href_only() {
        let encoded = serde_json::to_string(&Link::new("/orders/523")).unwrap();
        assert_eq!(encoded, r#"{"href":"/orders/523"}"#);
    }

    #[test]
    fn test_encode_property_order() {
        let link = Link::new("/x{?q}")
            .with_hreflang("en")
            .with_title("X")
            .with_profile("/p")
            .with_name("x")
            .with_deprecation("/d")
            .with_type("text/html")
            .with_templated(true);
        let encoded = serde_json::to_string(&link).unwrap();
        assert_eq!(
            encoded,
            r#"{"href":"/x{?q}","templated":true,"type":"text/html","deprecation":"/d","name":"x","profile":"/p","title":"X","hreflang":"en"}"#
        );
    }

    #[test]
    fn test_encode_keeps_empty_and_false() {
        let link = Link::new("/a").with_title("").with_templated(false);
        let encoded = serde_json::to_string(&link).unwrap();
        assert_eq!(encoded, r#"{"href":"/a","templated":false,"title":""}"#);
    }

    #[test]
    fn test_encode_curie() {
        let curie = Curie::new("bar", "/docs/bar/{rel}");
        assert_eq!(
            serde_json::to_string(&curie).unwrap(),
            r#"{"name":"bar","href":"/docs/bar/{rel}","templated":true}"#
        );
        let plain = curie.with_templated(false);
        assert_eq!(
            serde_json::to_string(&plain).unwrap(),
            r#"{"name":"bar","href":"/docs/bar/{rel}"}"#
        );
    }

    #[test]
    fn test_decode_all_properties() {
        let link = decode_link(
            object(json!({
                "href": "/test",
                "templated": true,
                "type": "text",
                "deprecation": "/depr",
                "name": "mylink",
                "profile": "/prof",
                "title": "Test",
                "hreflang": "en"
            })),
            &ctx,
        )
        .unwrap();
        assert_eq!(
            link,
            Link::new("/test")
                .with_templated(true)
                .with_type("text")
                .with_deprecation("/depr")
                .with_name("mylink")
                .with_profile("/prof")
                .with_title("Test")
                .with_hreflang("en")
        );
    }

    #[test]
    fn test_decode_ignores_unknown_properties() {
        let link = decode_link(object(json!({"href": "/a", "rel": "x", "extra": [1]})), &ctx).unwrap();
        assert_eq!(link, Link::new("/a"));
    }

    #[test]
    fn test_decode_preserves_empty_string() {
        let link = decode_link(object(json!({"href": "/a", "title": ""})), &ctx).unwrap();
        assert_eq!(link.title.as_deref(), Some(""));
        assert_eq!(link.name, None);
    }

    #[test]
    fn test_decode_missing_href() {
        let err = decode_link(object(json!({"title": "x"})), &ctx).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingProperty {
                context: ctx(),
                property: "href",
            }
        );
    }

    #[test]
    fn test_decode_wrong_property_type() {
        let err = decode_link(object(json!({"href": 5})), &ctx).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidProperty { property: "href", expected: "string", found: "number", .. }
        ));
    }

    #[test]
    fn test_decode_curie() {
        let curie = decode_curie(
            object(json!({"name": "acme", "href": "/docs/{rel}", "templated": true})),
            &ctx,
        )
        .unwrap();
        assert_eq!(curie, Curie::new("acme", "/docs/{rel}"));

        let untemplated = decode_curie(object(json!({"name": "acme", "href": "/docs"})), &ctx).unwrap();
        assert!(!untemplated.templated);

        let err = decode_curie(object(json!({"href": "/docs"})), &ctx).unwrap_err();
        assert!(matches!(err, DecodeError::MissingProperty { property: "name", .. }));
    }
}
