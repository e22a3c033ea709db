// crates/post-core/src/slug.rs - Slug validation and title derivation
//
// A slug is the URL-safe, hyphen-separated identifier of a post and doubles
// as its filename stem. Anything that would change the shape of the target
// path (separators, whitespace, dot segments) is rejected here, before any
// filesystem access happens.

use thiserror::Error;

/// Errors produced while validating a slug
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug must not be empty")]
    Empty,

    #[error("slug must not contain path separators: '{0}'")]
    PathSeparator(String),

    #[error("slug must not contain whitespace: '{0}'")]
    Whitespace(String),

    #[error("slug must not be a dot segment: '{0}'")]
    DotSegment(String),
}

/// Validate a slug before it becomes a filename stem.
///
/// The rules are deliberately minimal: only characters that would alter the
/// target path are rejected. Casing and punctuation beyond separators are
/// the author's business.
pub fn validate(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if slug.contains('/') || slug.contains('\\') {
        return Err(SlugError::PathSeparator(slug.to_string()));
    }
    if slug.chars().any(char::is_whitespace) {
        return Err(SlugError::Whitespace(slug.to_string()));
    }
    if slug == "." || slug == ".." {
        return Err(SlugError::DotSegment(slug.to_string()));
    }
    Ok(())
}

/// Derive a human-readable title from a slug.
///
/// Splits on the literal hyphen, uppercases the first character of each
/// segment, and rejoins the segments with single spaces. Only the first
/// character of each segment is touched; the rest keeps its casing.
///
/// EXAMPLES:
/// - `my-awesome-post` -> `My Awesome Post`
/// - `a` -> `A`
/// - `already-Capitalized` -> `Already Capitalized`
pub fn derive_title(slug: &str) -> String {
    slug.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
