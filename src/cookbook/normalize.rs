//! Canonicalization of free-form entry names.

use super::types::CookbookError;

/// Normalize handwritten text into a Title Case display name.
///
/// Hyphens and underscores become spaces, anything that is neither an ASCII letter nor a
/// space is dropped, and each word is capitalized with the rest lower-cased. Runs of
/// whitespace collapse to a single space. Returns [`CookbookError::InvalidName`] when no
/// letters survive.
pub fn normalize_name(raw: &str) -> Result<String, CookbookError> {
    let mut scanned = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '-' || c == '_' {
            scanned.push(' ');
        } else if c != ' ' && !c.is_ascii_alphabetic() {
            continue;
        } else if scanned.is_empty() || scanned.ends_with(' ') {
            scanned.push(c.to_ascii_uppercase());
        } else {
            scanned.push(c.to_ascii_lowercase());
        }
    }

    let normalized = scanned.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Err(CookbookError::InvalidName(raw.to_string()));
    }
    Ok(normalized)
}
