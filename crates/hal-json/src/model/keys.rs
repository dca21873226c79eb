//! Wire key names with codec-defined meaning.
//!
//! Every codec resolves reserved names through [`ReservedKey`] and link
//! property names through [`LinkProperty`], so the sets cannot drift apart.

/// Property names reserved by HAL at some level of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedKey {
    /// `_links` on a resource object.
    Links,
    /// `_embedded` on a resource object.
    Embedded,
    /// `self` inside `_links`.
    SelfLink,
    /// `curies` inside `_links` (also hoisted from the top level on decode).
    Curies,
}

impl ReservedKey {
    /// All reserved keys.
    pub const ALL: [ReservedKey; 4] = [
        ReservedKey::Links,
        ReservedKey::Embedded,
        ReservedKey::SelfLink,
        ReservedKey::Curies,
    ];

    /// Returns the wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ReservedKey::Links => "_links",
            ReservedKey::Embedded => "_embedded",
            ReservedKey::SelfLink => "self",
            ReservedKey::Curies => "curies",
        }
    }

    /// Looks up a wire name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "_links" => Some(ReservedKey::Links),
            "_embedded" => Some(ReservedKey::Embedded),
            "self" => Some(ReservedKey::SelfLink),
            "curies" => Some(ReservedKey::Curies),
            _ => None,
        }
    }

    /// Returns true if the resource decoder consumes this key when it
    /// appears at the top level of a resource object.
    ///
    /// `self` is not consumed there and lands in the resource's Data.
    pub const fn is_consumed_at_top_level(self) -> bool {
        !matches!(self, ReservedKey::SelfLink)
    }
}

impl std::fmt::Display for ReservedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties of a HAL Link Object, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkProperty {
    Href,
    Templated,
    Type,
    Deprecation,
    Name,
    Profile,
    Title,
    HrefLang,
}

impl LinkProperty {
    /// All properties in the order they are encoded.
    pub const ALL: [LinkProperty; 8] = [
        LinkProperty::Href,
        LinkProperty::Templated,
        LinkProperty::Type,
        LinkProperty::Deprecation,
        LinkProperty::Name,
        LinkProperty::Profile,
        LinkProperty::Title,
        LinkProperty::HrefLang,
    ];

    /// The optional string-valued properties, in the order they are encoded.
    pub const OPTIONAL_TEXT: [LinkProperty; 6] = [
        LinkProperty::Type,
        LinkProperty::Deprecation,
        LinkProperty::Name,
        LinkProperty::Profile,
        LinkProperty::Title,
        LinkProperty::HrefLang,
    ];

    /// Returns the wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            LinkProperty::Href => "href",
            LinkProperty::Templated => "templated",
            LinkProperty::Type => "type",
            LinkProperty::Deprecation => "deprecation",
            LinkProperty::Name => "name",
            LinkProperty::Profile => "profile",
            LinkProperty::Title => "title",
            LinkProperty::HrefLang => "hreflang",
        }
    }

    /// Looks up a wire name. Unknown names return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        LinkProperty::ALL.into_iter().find(|p| p.as_str() == key)
    }
}
