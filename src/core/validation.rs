//! Name normalization and slugification.
//!
//! Friendly names must match `^[A-Za-z][A-Za-z0-9 ]*$` once whitespace is
//! collapsed, and slugs must match `^[a-z][a-z0-9-]*$`.

use crate::error::{Result, ValidationError};

/// Collapse whitespace runs to single spaces, trim, and validate a name.
///
/// # Arguments
///
/// * `field` - What the name is (for error messages), e.g. "friendly name"
/// * `raw` - The name as entered by the user
///
/// # Errors
///
/// Returns `ValidationError` if the result is empty, doesn't start with a
/// letter, or contains anything other than letters, digits and spaces.
pub fn normalize_name(field: &'static str, raw: &str) -> Result<String> {
    let name = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    if name.is_empty() {
        return Err(ValidationError::Empty { field }.into());
    }

    if let Some(first_char) = name.chars().next() {
        if !first_char.is_ascii_alphabetic() {
            return Err(ValidationError::InvalidName {
                field,
                value: name.clone(),
                reason: "must start with a letter".to_string(),
            }
            .into());
        }
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != ' ' {
            return Err(ValidationError::InvalidName {
                field,
                value: name.clone(),
                reason: format!(
                    "invalid character '{}' at position {}. Only letters, digits and spaces are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(name)
}

/// Lowercase a name and join its words with hyphens.
///
/// # Errors
///
/// Returns `ValidationError::InvalidSlug` if the result doesn't match
/// `^[a-z][a-z0-9-]*$`.
pub fn slugify(name: &str) -> Result<String> {
    let slug = name
        .trim()
        .to_lowercase()
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if !is_valid_slug(&slug) {
        return Err(ValidationError::InvalidSlug {
            name: name.to_string(),
            slug,
        }
        .into());
    }

    Ok(slug)
}

/// Check `^[a-z][a-z0-9-]*$`.
pub fn is_valid_slug(slug: &str) -> bool {
    let mut chars = slug.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
