//! Slug - URL-safe identifier derived from a title

use std::fmt;

/// Lowercase, hyphen-separated identifier used in public URLs
///
/// Derivation is deterministic and idempotent: slugifying an existing slug
/// yields the same slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a title
    ///
    /// Returns `None` when the title has no letters or digits to keep.
    pub fn from_title(title: &str) -> Option<Self> {
        let slug = slug::slugify(title);
        if slug.is_empty() {
            None
        } else {
            Some(Self(slug))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}
