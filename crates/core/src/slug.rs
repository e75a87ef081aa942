//! Slug derivation for URL-safe entity identifiers.
//!
//! Slugs are computed once when an entity is first saved and are never
//! regenerated when the source field is later edited. The repository layer
//! relies on this: update statements deliberately leave the slug column
//! untouched.

/// Maximum number of characters of review text used to derive a review slug.
pub const REVIEW_SLUG_PREFIX_CHARS: usize = 40;

/// Derive a URL-safe slug from a human-readable name or title.
///
/// Lowercases ASCII, maps whitespace runs to single hyphens, drops anything
/// that is not alphanumeric, and trims leading/trailing hyphens. An input
/// with no usable characters produces an empty slug; callers that need a
/// non-empty identifier should fall back to the numeric id.
pub fn slugify(source: &str) -> String {
    let mut slug = String::with_capacity(source.len());
    let mut last_was_hyphen = true; // suppress leading hyphens

    for ch in source.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
            last_was_hyphen = false;
        } else if (ch.is_whitespace() || ch == '-' || ch == '_') && !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Derive a review slug from the leading characters of the review text.
pub fn review_slug(review_text: &str) -> String {
    let prefix: String = review_text.chars().take(REVIEW_SLUG_PREFIX_CHARS).collect();
    slugify(&prefix)
}
