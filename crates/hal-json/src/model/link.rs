//! Link and Curie objects.

use crate::model::keys::LinkProperty;

/// A HAL Link Object (draft-kelly-json-hal section 5).
///
/// Optional properties are `None` when absent from the wire. A property
/// that is present but empty is `Some("")` and stays present on encode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Link {
    /// URI or URI Template of the target. Required.
    pub href: String,
    /// True if `href` is a URI Template.
    pub templated: Option<bool>,
    /// Media type hint (`type` on the wire).
    pub media_type: Option<String>,
    /// URL describing why the link is deprecated.
    pub deprecation: Option<String>,
    /// Secondary key for selecting among links of the same relation.
    pub name: Option<String>,
    /// RFC 6906 profile of the target.
    pub profile: Option<String>,
    /// Human-readable label.
    pub title: Option<String>,
    /// Language of the target.
    pub hreflang: Option<String>,
}

impl Link {
    /// Creates a link with only an href.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    /// Sets `templated`.
    pub fn with_templated(mut self, templated: bool) -> Self {
        self.templated = Some(templated);
        self
    }

    /// Sets `type`.
    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Sets `deprecation`.
    pub fn with_deprecation(mut self, deprecation: impl Into<String>) -> Self {
        self.deprecation = Some(deprecation.into());
        self
    }

    /// Sets `name`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets `profile`.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Sets `title`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets `hreflang`.
    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    /// Returns true if the link is a URI Template.
    pub fn is_templated(&self) -> bool {
        self.templated.unwrap_or(false)
    }

    /// Returns a string-valued property, or `None` if it is absent.
    ///
    /// `Templated` is boolean and always returns `None` here.
    pub fn text_property(&self, property: LinkProperty) -> Option<&str> {
        match property {
            LinkProperty::Href => Some(&self.href),
            LinkProperty::Templated => None,
            LinkProperty::Type => self.media_type.as_deref(),
            LinkProperty::Deprecation => self.deprecation.as_deref(),
            LinkProperty::Name => self.name.as_deref(),
            LinkProperty::Profile => self.profile.as_deref(),
            LinkProperty::Title => self.title.as_deref(),
            LinkProperty::HrefLang => self.hreflang.as_deref(),
        }
    }

    /// Slot for one of [`LinkProperty::OPTIONAL_TEXT`].
    pub(crate) fn optional_text_mut(&mut self, property: LinkProperty) -> Option<&mut Option<String>> {
        match property {
            LinkProperty::Href | LinkProperty::Templated => None,
            LinkProperty::Type => Some(&mut self.media_type),
            LinkProperty::Deprecation => Some(&mut self.deprecation),
            LinkProperty::Name => Some(&mut self.name),
            LinkProperty::Profile => Some(&mut self.profile),
            LinkProperty::Title => Some(&mut self.title),
            LinkProperty::HrefLang => Some(&mut self.hreflang),
        }
    }
}

/// A named URI Template that compacts link relations (`name:relation`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Curie {
    pub name: String,
    /// URI Template, usually containing `{rel}`.
    pub href: String,
    pub templated: bool,
}

impl Curie {
    /// Creates a templated curie, the form HAL documents almost always use.
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            templated: true,
        }
    }

    /// Sets `templated`.
    pub fn with_templated(mut self, templated: bool) -> Self {
        self.templated = templated;
        self
    }

    /// Expands `reference` (the part of a curied relation after the colon)
    /// into a full relation URI.
    pub fn expand(&self, reference: &str) -> String {
        if self.templated {
            self.href.replace("{rel}", reference)
        } else {
            self.href.clone()
        }
    }
}

/// Splits a curied relation into `(prefix, reference)`.
///
/// Only a colon at an index greater than zero makes a relation curied; a
/// relation starting with `:` is a plain relation name.
pub fn split_curied(relation: &str) -> Option<(&str, &str)> {
    match relation.find(':') {
        Some(idx) if idx > 0 => Some((&relation[..idx], &relation[idx + 1..])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_setters_chain() {
        let link = Link::new("/orders{?id}")
            .with_templated(true)
            .with_type("application/hal+json")
            .with_deprecation("/deprecated")
            .with_name("orders")
            .with_profile("/profiles/order")
            .with_title("Orders")
            .with_hreflang("en");

        assert_eq!(link.href, "/orders{?id}");
        assert!(link.is_templated());
        assert_eq!(link.text_property(LinkProperty::Type), Some("application/hal+json"));
        assert_eq!(link.text_property(LinkProperty::HrefLang), Some("en"));
        assert_eq!(link.text_property(LinkProperty::Templated), None);
    }

    #[test]
    fn test_absent_and_empty_are_distinct() {
        let absent = Link::new("/a");
        let empty = Link::new("/a").with_title("");
        assert_ne!(absent, empty);
        assert_eq!(absent.text_property(LinkProperty::Title), None);
        assert_eq!(empty.text_property(LinkProperty::Title), Some(""));
    }

    #[test]
    fn test_split_curied() {
        assert_eq!(split_curied("acme:widgets"), Some(("acme", "widgets")));
        assert_eq!(split_curied("a:b:c"), Some(("a", "b:c")));
        assert_eq!(split_curied(":special"), None);
        assert_eq!(split_curied("plain"), None);
    }

    #[test]
    fn test_curie_expand() {
        let curie = Curie::new("acme", "https://docs.acme.com/relations/{rel}");
        assert_eq!(curie.expand("widgets"), "https://docs.acme.com/relations/widgets");

        let fixed = Curie::new("doc", "https://docs.acme.com/").with_templated(false);
        assert_eq!(fixed.expand("widgets"), "https://docs.acme.com/");
    }
}
