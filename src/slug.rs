//! Slug generation for list entries.
//!
//! A slug is the lowercase, hyphenated form of a display name used as a sprite
//! filename. Only six fixed substitutions are applied; every other character
//! passes through unchanged.

/// Characters replaced by a hyphen.
const HYPHENATED: [char; 2] = [' ', '_'];

/// Characters dropped from the slug.
const REMOVED: [char; 3] = ['.', '\'', ':'];

/// Convert a display name to its slug.
///
/// Lowercases the name, turns spaces and underscores into hyphens and removes
/// periods, apostrophes and colons.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !REMOVED.contains(c))
        .map(|c| if HYPHENATED.contains(&c) { '-' } else { c })
        .collect()
}
